//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the pin monitor's business rules: sampling,
//! differential rendering, cursor navigation and tone feedback.  All
//! interaction with hardware and the terminal happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without a parallel port or a TTY.

pub mod events;
pub mod ports;
pub mod service;
