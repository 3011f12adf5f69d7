//! Indicator commands and the serial sink that carries them.
//!
//! [`IndicatorCommand`] is the fixed 4-byte wire protocol the lamp speaks.
//! The [`IndicatorSink`] trait is the seam the write task pushes commands
//! through; [`SerialIndicator`] is the production implementation backed by a
//! usb-serial port.

use std::{io::Write, path::Path, time::Duration};

use serialport::SerialPort;
use strum::Display;

use crate::status::BuildResult;

pub mod error;

use error::{IndicatorError, Result};

/// Baud rate of the indicator's serial link.
pub const SERIAL_BAUD_RATE: u32 = 9_600;

/// Color command accepted by the indicator device.
///
/// Each command has a fixed 4-byte ASCII wire form: three hex-like digits
/// plus a newline. The mapping from [`BuildResult`] is total; every result
/// the CI server can report lands on exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IndicatorCommand {
    /// Build succeeded; also the initial state before the first poll.
    Green,
    /// Build failed.
    Red,
    /// Anything else: build in progress, unstable, aborted, unknown.
    Amber,
}

impl IndicatorCommand {
    /// Returns the command's wire form.
    pub const fn as_bytes(&self) -> &'static [u8; 4] {
        match self {
            Self::Green => b"0F0\n",
            Self::Red => b"F00\n",
            Self::Amber => b"FF0\n",
        }
    }
}

impl From<&BuildResult> for IndicatorCommand {
    fn from(result: &BuildResult) -> Self {
        match result {
            BuildResult::Success => Self::Green,
            BuildResult::Failure => Self::Red,
            BuildResult::Other(_) => Self::Amber,
        }
    }
}

/// Sink for indicator commands.
///
/// Production writes go to a serial port; tests substitute an in-memory
/// recorder. The caller decides what to do with a write failure — the
/// pipeline logs it and carries on.
pub trait IndicatorSink: Send {
    fn write_command(&mut self, command: IndicatorCommand) -> Result<()>;
}

/// Serial-port sink driving the physical indicator at [`SERIAL_BAUD_RATE`].
pub struct SerialIndicator {
    port: Box<dyn SerialPort>,
}

impl SerialIndicator {
    /// Opens the serial port at `path`.
    ///
    /// The device path is expected to come from [`device::locate`]; the port
    /// is owned by this sink until it is dropped.
    ///
    /// [`device::locate`]: crate::device::locate
    pub fn open(path: &Path) -> Result<Self> {
        let port = serialport::new(path.to_string_lossy(), SERIAL_BAUD_RATE)
            .timeout(Duration::from_secs(1))
            .open()
            .map_err(|source| IndicatorError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { port })
    }
}

impl IndicatorSink for SerialIndicator {
    fn write_command(&mut self, command: IndicatorCommand) -> Result<()> {
        self.port.write_all(command.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
