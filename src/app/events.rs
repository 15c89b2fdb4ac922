//! Inbound and outbound application events.
//!
//! [`InputEvent`] is what the key decoder hands the service — already
//! decoded, carrier-agnostic.  [`MonitorEvent`] is what the service emits
//! through the [`EventSink`](super::ports::EventSink) port; adapters on
//! the other side decide what to do with them.

/// Decoded user intents consumed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move the edit cursor to the previous navigable pin.
    MoveUp,
    /// Move the edit cursor to the next navigable pin.
    MoveDown,
    /// Flip the output pin under the cursor.
    Toggle,
    /// Leave the monitor loop.
    Quit,
}

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The monitor started (carries the resolved register base).
    Started { port_base: u16 },

    /// The edit cursor moved between pins.
    CursorMoved { from: u8, to: u8 },

    /// An output pin was toggled; `value` is the register byte after the
    /// write.
    OutputToggled { pin: u8, value: u8 },

    /// The monitor loop ended.
    Stopped,
}
