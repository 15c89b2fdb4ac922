//! PC speaker tone adapter.
//!
//! Drives the Intel 8254 PIT's channel 2 as a square-wave generator and
//! gates it onto the speaker via bits 0–1 of port 0x61 — the same
//! mechanism the BIOS `sound()` call used.  All register traffic goes
//! through an injected [`HardwarePort`], so the adapter is testable
//! against a mock register map.

use crate::app::ports::{HardwarePort, TonePort};

/// PIT input clock frequency (Hz).
pub const PIT_HZ: u32 = 1_193_182;

/// PIT channel 2 data port.
const PIT_CH2: u16 = 0x42;
/// PIT mode/command register.
const PIT_CMD: u16 = 0x43;
/// Channel 2 select, lobyte/hibyte access, mode 3 (square wave).
const PIT_CMD_CH2_SQUARE: u8 = 0xb6;

/// Keyboard controller port B: bit 0 gates the PIT to the speaker,
/// bit 1 enables the speaker data line.
const SPEAKER_PORT: u16 = 0x61;
const SPEAKER_GATE: u8 = 0b0000_0011;

/// Sustained square-wave tone on the PC speaker.
pub struct PcSpeaker<H: HardwarePort> {
    hw: H,
    sounding: bool,
}

impl<H: HardwarePort> PcSpeaker<H> {
    pub fn new(hw: H) -> Self {
        Self { hw, sounding: false }
    }
}

impl<H: HardwarePort> TonePort for PcSpeaker<H> {
    /// Program the divisor and open the gate.  A no-op while already
    /// sounding — reprogramming every frame would glitch the tone.
    fn tone_on(&mut self, freq_hz: u32) {
        if self.sounding {
            return;
        }
        let divisor = (PIT_HZ / freq_hz.max(1)).clamp(1, u32::from(u16::MAX)) as u16;
        self.hw.write_byte(PIT_CMD, PIT_CMD_CH2_SQUARE);
        self.hw.write_byte(PIT_CH2, (divisor & 0xff) as u8);
        self.hw.write_byte(PIT_CH2, (divisor >> 8) as u8);
        let gate = self.hw.read_byte(SPEAKER_PORT);
        self.hw.write_byte(SPEAKER_PORT, gate | SPEAKER_GATE);
        self.sounding = true;
    }

    /// Close the gate, leaving the other port B bits untouched.
    /// Unconditional, so shutdown can silence a speaker left on by a
    /// previous run.
    fn tone_off(&mut self) {
        let gate = self.hw.read_byte(SPEAKER_PORT);
        self.hw.write_byte(SPEAKER_PORT, gate & !SPEAKER_GATE);
        self.sounding = false;
    }
}
