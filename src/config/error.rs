use std::{io, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file could not be read: {0}")]
    Io(#[from] io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) type Result<T> = result::Result<T, SettingsError>;
