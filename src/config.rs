//! Monitor configuration parameters.
//!
//! All tunable parameters for a monitoring session.  Values can be
//! overridden from the command line at startup.

use serde::{Deserialize, Serialize};

/// Core monitor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Timing ---
    /// Frame delay between polling iterations (milliseconds).
    pub tick_interval_ms: u64,

    // --- Feedback ---
    /// Speaker frequency while an input pin under the edit cursor reads
    /// set (Hz).
    pub tone_freq_hz: u32,

    // --- Cursor ---
    /// Pin the edit cursor starts on.
    pub start_pin: u8,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 25, // ~40 Hz, fast enough to catch handshakes
            tone_freq_hz: 3000,
            start_pin: 1,
        }
    }
}
