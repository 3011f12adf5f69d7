//! CI build status retrieval.
//!
//! [`CiStatusClient`] fetches the latest build status from a Jenkins-style
//! JSON endpoint. The [`StatusSource`] trait is the seam the watch process
//! polls through, so tests can substitute a scripted source.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use strum::Display;

use crate::config::Settings;

pub mod error;

use error::{Result, StatusApiError};

/// Outcome of the most recent CI build.
///
/// Only `SUCCESS` and `FAILURE` are recognized; every other reported string
/// (`UNSTABLE`, `ABORTED`, an empty placeholder while a build is running)
/// is carried verbatim in [`BuildResult::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BuildResult {
    #[strum(serialize = "SUCCESS")]
    Success,
    #[strum(serialize = "FAILURE")]
    Failure,
    #[strum(to_string = "{0}")]
    Other(String),
}

impl Default for BuildResult {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for BuildResult {
    fn from(value: &str) -> Self {
        match value {
            "SUCCESS" => Self::Success,
            "FAILURE" => Self::Failure,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BuildResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SUCCESS" => Self::Success,
            "FAILURE" => Self::Failure,
            _ => Self::Other(value),
        }
    }
}

impl<'de> Deserialize<'de> for BuildResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `result` is `null` while a build is in progress.
        let value = Option::<String>::deserialize(deserializer)?;

        Ok(value.map(Self::from).unwrap_or_default())
    }
}

/// Latest build as reported by the CI endpoint.
///
/// Fields the endpoint omits fall back to their defaults rather than
/// failing the whole payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStatus {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    result: BuildResult,
}

impl BuildStatus {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn result(&self) -> &BuildResult {
        &self.result
    }

    pub fn into_result(self) -> BuildResult {
        self.result
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name, self.result)
    }
}

/// Source of CI build statuses.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<BuildStatus>;
}

/// HTTP client for a CI status endpoint secured with basic auth.
///
/// Certificate validation is disabled. The endpoints this targets live on
/// trusted local networks behind self-signed certificates.
pub struct CiStatusClient {
    url: String,
    user: String,
    password: String,
    client: Client,
}

impl CiStatusClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        // No `.timeout(..)`: a poll request is allowed to block indefinitely.
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(StatusApiError::HttpClient)?;

        Ok(Self {
            url: settings.url().to_string(),
            user: settings.user().to_string(),
            password: settings.password().to_string(),
            client,
        })
    }
}

#[async_trait]
impl StatusSource for CiStatusClient {
    async fn fetch_status(&self) -> Result<BuildStatus> {
        let response = self
            .client
            .get(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .map_err(StatusApiError::RequestFailed)?;

        let raw_response = response
            .text()
            .await
            .map_err(StatusApiError::ResponseDecoding)?;

        // Whatever body came back is parsed as a build status. A non-JSON
        // error page surfaces as a malformed response.
        serde_json::from_str::<BuildStatus>(&raw_response).map_err(|e| {
            StatusApiError::ResponseJsonDeserializeFailed { raw_response, e }
        })
    }
}

#[cfg(test)]
mod tests;
