//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured monitor events to the
//! `log` facade (stderr under `env_logger`, so records do not disturb the
//! pin table on stdout).  A telemetry adapter would implement the same
//! trait.

use log::info;

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started { port_base } => {
                info!("START | port_base={port_base:04x}");
            }
            MonitorEvent::CursorMoved { from, to } => {
                info!("CURSOR | pin {from} -> pin {to}");
            }
            MonitorEvent::OutputToggled { pin, value } => {
                info!("TOGGLE | pin {pin} | register now {value:02x}");
            }
            MonitorEvent::Stopped => {
                info!("STOP | monitor loop ended");
            }
        }
    }
}
