//! The 25-pin map of a PC parallel port.
//!
//! Single source of truth — the sampler, renderer and cursor all reference
//! this table rather than hard-coding register offsets or screen positions.
//! The offsets and masks mirror the standard DB-25 printer-port pin-out;
//! downstream I/O correctness depends on them bit-for-bit.

/// Total number of physical pins on the connector.
pub const PIN_COUNT: usize = 25;

/// Register offsets from the resolved port base.
pub const DATA_REG: u16 = 0;
pub const STATUS_REG: u16 = 1;
pub const CONTROL_REG: u16 = 2;

/// Electrical role of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDir {
    /// Driven by the host; toggleable from the edit cursor.
    Output,
    /// Driven by the peripheral; traced on the oscilloscope panel.
    Input,
    /// Ground — display-only, never sampled meaningfully.
    Ground,
}

/// One physical signal line.
#[derive(Debug, Clone)]
pub struct Pin {
    /// Stable identity, 1..=25.
    pub id: u8,
    /// Screen column of this pin's status line (1-based).
    pub col: u16,
    /// Screen row of this pin's status line (1-based).
    pub row: u16,
    /// Register offset from the port base (data/status/control).
    pub reg: u16,
    /// Bit within that register that carries this pin.
    pub mask: u8,
    /// The physical signal is active-low relative to the read bit.
    /// Rendering annotation only — the sampled byte is never flipped.
    pub active_low: bool,
    pub dir: PinDir,
    /// Human-readable signal name.
    pub label: &'static str,
    /// Masked register byte observed on the previous frame.
    /// `None` until the first sample, so the first frame always draws.
    pub last_state: Option<u8>,
}

#[allow(clippy::too_many_arguments)]
const fn pin(
    id: u8,
    col: u16,
    row: u16,
    reg: u16,
    mask: u8,
    active_low: bool,
    dir: PinDir,
    label: &'static str,
) -> Pin {
    Pin {
        id,
        col,
        row,
        reg,
        mask,
        active_low,
        dir,
        label,
        last_state: None,
    }
}

/// Owned, exclusively-held collection of the 25 pins.
pub struct PinTable {
    pins: [Pin; PIN_COUNT],
}

impl PinTable {
    /// Build the fixed pin map.  Purely declarative — no failure modes.
    #[rustfmt::skip]
    pub fn new() -> Self {
        use PinDir::{Ground, Input, Output};
        Self {
            //       ID  COL ROW  REG          MASK  INV    DIR     LABEL
            pins: [
                pin( 1,  5,  7, CONTROL_REG, 0x01, true,  Output, "-strobe"),
                pin( 2,  5,  8, DATA_REG,    0x01, false, Output, "+data0"),
                pin( 3,  5,  9, DATA_REG,    0x02, false, Output, "+data1"),
                pin( 4,  5, 10, DATA_REG,    0x04, false, Output, "+data2"),
                pin( 5,  5, 11, DATA_REG,    0x08, false, Output, "+data3"),
                pin( 6,  5, 12, DATA_REG,    0x10, false, Output, "+data4"),
                pin( 7,  5, 13, DATA_REG,    0x20, false, Output, "+data5"),
                pin( 8,  5, 14, DATA_REG,    0x40, false, Output, "+data6"),
                pin( 9,  5, 15, DATA_REG,    0x80, false, Output, "+data7"),
                pin(10,  5, 16, STATUS_REG,  0x40, true,  Input,  "-ack"),
                pin(11,  5, 17, STATUS_REG,  0x80, true,  Input,  "+busy"),
                pin(12,  5, 18, STATUS_REG,  0x20, false, Input,  "+outpap"),
                pin(13,  5, 19, STATUS_REG,  0x10, false, Input,  "+sel"),
                pin(14, 45,  7, CONTROL_REG, 0x02, true,  Output, "-autofeed"),
                pin(15, 45,  8, STATUS_REG,  0x08, false, Input,  "-error"),
                pin(16, 45,  9, CONTROL_REG, 0x04, false, Output, "-init"),
                pin(17, 45, 10, CONTROL_REG, 0x08, true,  Output, "-sel"),
                pin(18, 45, 11, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(19, 45, 12, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(20, 45, 13, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(21, 45, 14, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(22, 45, 15, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(23, 45, 16, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(24, 45, 17, DATA_REG,    0x00, false, Ground, "gnd"),
                pin(25, 45, 18, DATA_REG,    0x00, false, Ground, "gnd"),
            ],
        }
    }

    /// All valid pin ids, in ascending (render) order.
    pub fn ids() -> core::ops::RangeInclusive<u8> {
        1..=PIN_COUNT as u8
    }

    /// Convert a pin id to a table index.  Out-of-range ids are a caller
    /// bug; debug builds assert, release builds clamp to the nearest pin.
    fn index_of(id: u8) -> usize {
        debug_assert!((1..=PIN_COUNT as u8).contains(&id), "invalid pin id: {id}");
        (id.clamp(1, PIN_COUNT as u8) - 1) as usize
    }

    pub fn get(&self, id: u8) -> &Pin {
        &self.pins[Self::index_of(id)]
    }

    pub fn get_mut(&mut self, id: u8) -> &mut Pin {
        &mut self.pins[Self::index_of(id)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    /// Ids reachable by the edit cursor (every non-Ground pin), in order.
    pub fn navigable_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.pins
            .iter()
            .filter(|p| p.dir != PinDir::Ground)
            .map(|p| p.id)
    }
}

impl Default for PinTable {
    fn default() -> Self {
        Self::new()
    }
}
