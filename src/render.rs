//! Differential renderer for the pin table and oscilloscope panel.
//!
//! Status lines are only re-emitted when a pin's sampled byte differs from
//! the cached previous value (or a full redraw is pending) — the diff
//! gate keeps the per-frame terminal traffic proportional to what actually
//! changed.  Trace strips shift every frame, so they are re-emitted every
//! frame.

use crate::app::ports::{CellStyle, DisplaySurface};
use crate::pins::{Pin, PinDir};
use crate::scope::{SCOPE_LEAD_COL, TraceStrip};

/// Row the hardware cursor is parked on at shutdown.
pub const PARK_ROW: u16 = 25;

/// Screen column of the scope legends (` NN [`), ending just before the
/// strip's leading column.
const LEGEND_COL: u16 = 3;

/// Status label for a sampled pin.
pub fn status_label(dir: PinDir, state: u8) -> &'static str {
    match dir {
        PinDir::Ground => "gnd",
        _ if state != 0 => "SET",
        _ => "clr",
    }
}

/// Emits the fixed screen layout through a [`DisplaySurface`].
pub struct Renderer {
    port_base: u16,
}

impl Renderer {
    pub fn new(port_base: u16) -> Self {
        Self { port_base }
    }

    /// Static header block: usage reminder, resolved base, column headings.
    pub fn draw_header(&self, d: &mut impl DisplaySurface) {
        d.put_text(
            1,
            1,
            "usage: parmon <port|lpt#> ; monitors specific parallel port",
            CellStyle::empty(),
        );
        d.put_text(
            1,
            3,
            &format!("{:04x} = port base", self.port_base),
            CellStyle::empty(),
        );
        let heading = "PIN STATE  PORT MASK SIGNAL";
        let dashes = "--- -----  ---- ---- ------";
        d.put_text(1, 5, &format!("    {heading:<39} {heading}"), CellStyle::empty());
        d.put_text(1, 6, &format!("    {dashes:<39} {dashes}"), CellStyle::empty());
    }

    /// Draw one pin's status line if its state changed (or a full redraw
    /// is pending), caching the new state.  Returns whether a line was
    /// emitted.
    ///
    /// Line layout: id, SET/clr/gnd, resolved register address, mask byte
    /// with a `!` marker on active-low pins, signal name.  Reverse video
    /// marks the edit cursor, bold marks input pins.
    pub fn render_pin(
        &self,
        d: &mut impl DisplaySurface,
        pin: &mut Pin,
        state: u8,
        selected: bool,
        full_redraw: bool,
    ) -> bool {
        if !full_redraw && pin.last_state == Some(state) {
            return false;
        }

        let mut style = CellStyle::empty();
        if selected {
            style |= CellStyle::INVERSE;
        }
        if pin.dir == PinDir::Input {
            style |= CellStyle::BOLD;
        }

        let line = format!(
            "{:2}   {}   {:04x} {}{:02x}  {}",
            pin.id,
            status_label(pin.dir, state),
            self.port_base + pin.reg,
            if pin.active_low { '!' } else { ' ' },
            pin.mask,
            pin.label,
        );
        d.put_text(pin.col, pin.row, &line, style);
        pin.last_state = Some(state);
        true
    }

    /// Legend annotation (` NN [`) immediately before a strip's leading
    /// column.  Drawn on full-redraw frames only.
    pub fn draw_trace_legend(&self, d: &mut impl DisplaySurface, pin_id: u8, row: u16) {
        d.put_text(LEGEND_COL, row, &format!(" {pin_id:2} ["), CellStyle::empty());
    }

    /// Re-emit a trace strip, newest glyph at the leading column.
    pub fn draw_trace(&self, d: &mut impl DisplaySurface, row: u16, strip: &TraceStrip) {
        let cells: String = strip.iter().collect();
        d.put_text(SCOPE_LEAD_COL, row, &cells, CellStyle::empty());
    }
}
