use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("serial port {} could not be opened: {source}", path.display())]
    Open {
        path: PathBuf,
        source: serialport::Error,
    },

    #[error("indicator write failed: {0}")]
    Write(#[from] io::Error),
}

pub(crate) type Result<T> = result::Result<T, IndicatorError>;
