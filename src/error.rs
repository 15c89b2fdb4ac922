//! Unified error types for parmon.
//!
//! Everything that can fail does so at startup (port resolution, opening
//! the hardware device, entering raw mode).  Once the frame loop is
//! running, every core operation is total — there are no error paths to
//! thread through the sampler, renderer or cursor.

use std::fmt;

/// Every fallible startup operation funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No register base is known for the requested LPT slot.
    UnresolvedPort(u8),
    /// The port selector did not parse as an LPT number or hex address.
    BadSelector(String),
    /// A hardware access device could not be opened.
    Hardware(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedPort(lpt) => write!(f, "no printer port for LPT{lpt}"),
            Self::BadSelector(s) => {
                write!(f, "'{s}' bad LPT or port# (expected 1, 2, 3 or 0378, 03bc, ...)")
            }
            Self::Hardware(msg) => write!(f, "hardware: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
