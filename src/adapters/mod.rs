//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                        |
//! |------------|----------------|------------------------------------|
//! | `dev_port` | HardwarePort   | `/dev/port` register space (Linux) |
//! | `terminal` | DisplaySurface | crossterm raw-mode stdout          |
//! |            | InputPort      | crossterm key events               |
//! | `speaker`  | TonePort       | 8254 PIT channel 2 + speaker gate  |
//! | `log_sink` | EventSink      | `log` records                      |
//! | `clock`    | —              | monotonic uptime seconds           |
//! | `resolver` | —              | LPT slot / hex selector → base     |

pub mod clock;
pub mod dev_port;
pub mod log_sink;
pub mod resolver;
pub mod speaker;
pub mod terminal;
