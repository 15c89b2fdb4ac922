//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the pin table, edit cursor, scope panel and
//! render state.  It exposes a clean, hardware-agnostic API; all I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!  HardwarePort ──▶ ┌─────────────────────────┐ ──▶ DisplaySurface
//!                   │      MonitorService      │ ──▶ TonePort
//!   InputEvent  ──▶ │  pins · cursor · scope   │ ──▶ EventSink
//!                   └─────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::MonitorConfig;
use crate::cursor::EditCursor;
use crate::pins::{PinDir, PinTable};
use crate::render::{PARK_ROW, Renderer};
use crate::sampler;
use crate::scope::{SECONDS_ROW, ScopePanel};

use super::events::{InputEvent, MonitorEvent};
use super::ports::{DisplaySurface, EventSink, HardwarePort, TonePort};

/// The monitor service orchestrates one sample-render-input cycle per
/// tick.
pub struct MonitorService {
    pins: PinTable,
    cursor: EditCursor,
    scope: ScopePanel,
    renderer: Renderer,
    port_base: u16,
    tone_freq_hz: u32,
    running: bool,
    /// Redraw every status line this frame, regardless of cached state.
    full_redraw: bool,
    tick_count: u64,
}

impl MonitorService {
    /// Construct the service for a resolved port base.
    ///
    /// Does **not** draw anything — call [`start`](Self::start) next.
    pub fn new(config: &MonitorConfig, port_base: u16) -> Self {
        let pins = PinTable::new();
        let cursor = EditCursor::new(config.start_pin, &pins);
        Self {
            pins,
            cursor,
            scope: ScopePanel::new(),
            renderer: Renderer::new(port_base),
            port_base,
            tone_freq_hz: config.tone_freq_hz,
            running: false,
            full_redraw: true,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Clear the screen, draw the static header, and mark the loop
    /// running.
    pub fn start(&mut self, display: &mut impl DisplaySurface, sink: &mut impl EventSink) {
        display.clear();
        self.renderer.draw_header(display);
        display.present();
        self.running = true;
        self.full_redraw = true;
        sink.emit(&MonitorEvent::Started {
            port_base: self.port_base,
        });
        info!("monitor started, port base {:04x}", self.port_base);
    }

    /// One cleanup pass: silence the tone and park the terminal cursor
    /// below the scope panel.  Idempotent.
    pub fn shutdown(
        &mut self,
        display: &mut impl DisplaySurface,
        tone: &mut impl TonePort,
        sink: &mut impl EventSink,
    ) {
        tone.tone_off();
        display.position_cursor(1, PARK_ROW);
        display.present();
        sink.emit(&MonitorEvent::Stopped);
        info!("monitor stopped after {} ticks", self.tick_count);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one frame: sample and render all 25 pins in ascending id
    /// order, feed the scope strips, drive the tone for the pin under the
    /// edit cursor, and advance the seconds marker.
    ///
    /// `now_secs` is a monotonic wall-clock second counter; the seconds
    /// strip marks each change.
    pub fn tick(
        &mut self,
        hw: &mut impl HardwarePort,
        display: &mut impl DisplaySurface,
        tone: &mut impl TonePort,
        now_secs: u64,
    ) {
        let edit = self.cursor.pin_id();

        // Keep the hardware cursor parked beside the edited line; it
        // doubles as the selection marker.
        {
            let pin = self.pins.get(edit);
            display.position_cursor(pin.col.saturating_sub(1), pin.row);
        }

        for id in PinTable::ids() {
            let state = sampler::sample(hw, self.port_base, self.pins.get(id));
            let selected = id == edit;

            let pin = self.pins.get_mut(id);
            let dir = pin.dir;
            self.renderer
                .render_pin(display, pin, state, selected, self.full_redraw);

            if dir == PinDir::Input {
                if let Some(trace) = self.scope.trace_mut(id) {
                    trace.record(state != 0);
                    if self.full_redraw {
                        self.renderer.draw_trace_legend(display, id, trace.row);
                    }
                    self.renderer.draw_trace(display, trace.row, trace.strip());
                }
            }

            // Audible feedback: tone while an input pin under the cursor
            // reads set, silence in every other case.
            if selected {
                if dir == PinDir::Input && state != 0 {
                    tone.tone_on(self.tone_freq_hz);
                } else {
                    tone.tone_off();
                }
            }
        }

        self.scope.advance_seconds(now_secs);
        self.renderer
            .draw_trace(display, SECONDS_ROW, self.scope.seconds());

        display.present();
        self.full_redraw = false;
        self.tick_count += 1;
    }

    // ── Event handling ────────────────────────────────────────

    /// Apply one decoded input event.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hw: &mut impl HardwarePort,
        sink: &mut impl EventSink,
    ) {
        match event {
            InputEvent::MoveUp => {
                let from = self.cursor.pin_id();
                self.cursor.move_up(&self.pins);
                self.full_redraw = true;
                sink.emit(&MonitorEvent::CursorMoved {
                    from,
                    to: self.cursor.pin_id(),
                });
            }
            InputEvent::MoveDown => {
                let from = self.cursor.pin_id();
                self.cursor.move_down(&self.pins);
                self.full_redraw = true;
                sink.emit(&MonitorEvent::CursorMoved {
                    from,
                    to: self.cursor.pin_id(),
                });
            }
            InputEvent::Toggle => {
                let id = self.cursor.pin_id();
                let pin = self.pins.get(id);
                // Only outputs are writable; a toggle on an input pin is
                // silently ignored.
                if pin.dir == PinDir::Output {
                    let value = sampler::toggle_output(hw, self.port_base, pin);
                    self.full_redraw = true;
                    sink.emit(&MonitorEvent::OutputToggled { pin: id, value });
                } else {
                    debug!("toggle ignored on non-output pin {id}");
                }
            }
            InputEvent::Quit => {
                self.running = false;
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Whether the loop should keep running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pin id under the edit cursor.
    pub fn cursor_pin(&self) -> u8 {
        self.cursor.pin_id()
    }

    /// Frames rendered since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Read-only view of the pin table (state caches included).
    pub fn pins(&self) -> &PinTable {
        &self.pins
    }
}
