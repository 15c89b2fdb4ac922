//! Port traits — the hexagonal boundary between the pin engine and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (hardware registers, terminal surface, speaker, key
//! decoder, event sinks) implement these traits.  The
//! [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the pin engine never touches real hardware or a real
//! terminal directly.

use bitflags::bitflags;

use super::events::{InputEvent, MonitorEvent};

// ───────────────────────────────────────────────────────────────
// Hardware port (driven adapter: registers ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Byte-wide access to the I/O register space.
///
/// Reads and writes are assumed synchronous and always succeeding —
/// adapters absorb transport errors rather than surfacing them into the
/// frame loop.
pub trait HardwarePort {
    /// Read the byte at `addr`.
    fn read_byte(&mut self, addr: u16) -> u8;

    /// Write `value` to `addr`.
    fn write_byte(&mut self, addr: u16, value: u8);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

bitflags! {
    /// Style attributes for a run of cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellStyle: u8 {
        /// Bright/bold text (input pins).
        const BOLD = 1 << 0;
        /// Reverse video (the line under the edit cursor).
        const INVERSE = 1 << 1;
    }
}

/// Write-side port for the screen.  Coordinates are 1-based, matching the
/// fixed layout the renderer reproduces.
pub trait DisplaySurface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Place `text` starting at (`col`, `row`) with the given style.
    /// Style is reset at the end of the run.
    fn put_text(&mut self, col: u16, row: u16, text: &str, style: CellStyle);

    /// Move the visible hardware cursor to (`col`, `row`).
    fn position_cursor(&mut self, col: u16, row: u16);

    /// Flush any buffered operations to the screen.
    fn present(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Tone port (driven adapter: domain → speaker)
// ───────────────────────────────────────────────────────────────

/// Sustained audible tone.  Both operations are idempotent.
pub trait TonePort {
    /// Start (or keep) sounding at `freq_hz`.
    fn tone_on(&mut self, freq_hz: u32);

    /// Silence the speaker.
    fn tone_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Input port (driving adapter: keyboard → domain)
// ───────────────────────────────────────────────────────────────

/// Non-blocking source of decoded navigation/action events.
///
/// Returns `None` immediately when no key is pending — the frame loop is
/// paced by its own delay, never by input.
pub trait InputPort {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`MonitorEvent`]s through this port.
/// Adapters decide where they go (log records, a test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &MonitorEvent);
}
