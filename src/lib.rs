#![doc = include_str!("../README.md")]

/// Exports [`Settings`] and the settings-file location.
///
/// [`Settings`]: crate::config::Settings
pub mod config;
/// Exports the serial-device discovery routine and its selection policy.
pub mod device;
/// Exports [`IndicatorCommand`], the [`IndicatorSink`] seam, and the serial
/// sink implementation.
///
/// [`IndicatorCommand`]: crate::indicator::IndicatorCommand
/// [`IndicatorSink`]: crate::indicator::IndicatorSink
pub mod indicator;
/// Exports [`BuildResult`], [`BuildStatus`], and the CI status client.
///
/// [`BuildResult`]: crate::status::BuildResult
/// [`BuildStatus`]: crate::status::BuildStatus
pub mod status;
mod util;
/// Exports [`WatchEngine`], [`WatchController`], and the types describing a
/// running watch pipeline.
///
/// [`WatchEngine`]: crate::watch::WatchEngine
/// [`WatchController`]: crate::watch::WatchController
pub mod watch;

/// Error types returned by `buildlamp`.
pub mod error {
    pub use super::config::error::SettingsError;
    pub use super::device::error::DeviceError;
    pub use super::indicator::error::IndicatorError;
    pub use super::status::error::StatusApiError;
    pub use super::watch::{
        error::WatchError,
        process::error::{PollTaskFatalError, WatchProcessFatalError, WriteTaskFatalError},
    };

    /// Convenience general-purpose Result type alias.
    pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
}

/// Exports the build-status and indicator-command models.
pub mod models {
    pub use super::indicator::IndicatorCommand;
    pub use super::status::{BuildResult, BuildStatus};
}
