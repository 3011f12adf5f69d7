use std::{fs, path::Path};

use serde::Deserialize;

pub mod error;

use error::Result;

/// Location of the settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Endpoint and credentials for the CI server's build-status API.
///
/// Loaded once at startup and passed by reference into the components that
/// need it; never mutated afterwards. A missing or malformed file is fatal to
/// startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    url: String,
    user: String,
    password: String,
}

impl Settings {
    /// Reads and parses a settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses settings from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Returns the build-status endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the basic-auth user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the basic-auth password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests;
