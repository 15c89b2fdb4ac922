//! parmon — monitor/control a PC parallel port.
//!
//! Hexagonal wiring: the binary resolves the port base, opens the
//! concrete adapters, and drives the paced sample-render-input loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  DevPort          TerminalSurface/Input    PcSpeaker     │
//! │  (HardwarePort)   (DisplaySurface/Input)   (TonePort)    │
//! │  LogEventSink     WallClock                              │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           MonitorService (pure logic)          │      │
//! │  │  pin table · sampler · renderer · cursor       │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use parmon::adapters::clock::WallClock;
use parmon::adapters::dev_port::DevPort;
use parmon::adapters::log_sink::LogEventSink;
use parmon::adapters::resolver::{self, PortSelector};
use parmon::adapters::speaker::PcSpeaker;
use parmon::adapters::terminal::{TerminalInput, TerminalSurface};
use parmon::app::ports::InputPort;
use parmon::app::service::MonitorService;
use parmon::config::MonitorConfig;

const KEYS_HELP: &str = "KEYS:
    ESC, SPACE   quit
    UP/DOWN      move edit cursor
    ENTER        toggle state of output (when cursor on an output)

While the edit cursor is on an input pin, the speaker sounds whenever
the pin reads set.";

/// Monitor/control an IBM PC parallel port.
#[derive(Parser)]
#[command(name = "parmon", version, after_help = KEYS_HELP)]
struct Args {
    /// Port to monitor: 1-3 for LPT1-LPT3, or a hex register base
    /// (e.g. 378) [default: LPT1]
    port: Option<String>,

    /// Frame delay in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Tone frequency in Hz for input-pin feedback
    #[arg(long)]
    tone_hz: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = MonitorConfig::default();
    if let Some(ms) = args.tick_ms {
        config.tick_interval_ms = ms.max(1);
    }
    if let Some(hz) = args.tone_hz {
        config.tone_freq_hz = hz;
    }

    let selector = match &args.port {
        Some(s) => s.parse::<PortSelector>()?,
        None => PortSelector::Lpt(1),
    };
    let port_base = resolver::resolve(selector)?;

    let mut hw = DevPort::open().context("opening the parallel port register space")?;
    let mut tone = PcSpeaker::new(DevPort::open().context("opening the speaker register space")?);
    let mut display = TerminalSurface::new().context("entering raw mode")?;
    let mut input = TerminalInput::new();
    let mut sink = LogEventSink::new();
    let clock = WallClock::new();

    let mut service = MonitorService::new(&config, port_base);
    service.start(&mut display, &mut sink);

    let tick = Duration::from_millis(config.tick_interval_ms);
    while service.is_running() {
        service.tick(&mut hw, &mut display, &mut tone, clock.uptime_secs());
        if let Some(event) = input.poll_event() {
            service.handle_event(event, &mut hw, &mut sink);
        }
        thread::sleep(tick);
    }

    service.shutdown(&mut display, &mut tone, &mut sink);
    display.release().context("restoring the terminal")?;
    Ok(())
}
