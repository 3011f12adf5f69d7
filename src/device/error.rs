use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("device directory {} could not be read: {source}", path.display())]
    DirUnreadable { path: PathBuf, source: io::Error },

    #[error("no usb-serial device found under {}", path.display())]
    NoDeviceFound { path: PathBuf },
}

pub(crate) type Result<T> = result::Result<T, DeviceError>;
