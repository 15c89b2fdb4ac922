//! `/dev/port` hardware adapter.
//!
//! Linux exposes the x86 I/O port space as a seekable character device;
//! one byte at offset `addr` is one `inb`/`outb` at that port.  Opening
//! requires root (CAP_SYS_RAWIO).  This is the only module in the crate
//! that touches real registers.
//!
//! Per the [`HardwarePort`] contract, per-operation failures are absorbed:
//! a failed read logs and returns 0, a failed write logs and drops the
//! byte.  Only the initial open is fallible.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};

use log::warn;

use crate::app::ports::HardwarePort;
use crate::error::{Error, Result};

const PORT_DEVICE: &str = "/dev/port";

/// File-backed access to the I/O register space.
pub struct DevPort {
    file: File,
}

impl DevPort {
    /// Open the port device read-write.
    pub fn open() -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(PORT_DEVICE)
            .map_err(|e| {
                warn!("cannot open {PORT_DEVICE}: {e}");
                Error::Hardware("cannot open /dev/port (root required)")
            })?;
        Ok(Self { file })
    }
}

impl HardwarePort for DevPort {
    fn read_byte(&mut self, addr: u16) -> u8 {
        let mut buf = [0u8; 1];
        let res = self
            .file
            .seek(SeekFrom::Start(u64::from(addr)))
            .and_then(|_| self.file.read_exact(&mut buf));
        if let Err(e) = res {
            warn!("port read {addr:04x} failed: {e}");
            return 0;
        }
        buf[0]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        let res = self
            .file
            .seek(SeekFrom::Start(u64::from(addr)))
            .and_then(|_| self.file.write_all(&[value]));
        if let Err(e) = res {
            warn!("port write {addr:04x} failed: {e}");
        }
    }
}
