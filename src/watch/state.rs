use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use tokio::sync::broadcast;

use crate::status::BuildResult;

use super::process::error::{PollTaskFatalError, WatchProcessFatalError};

/// Overall status of the watch pipeline.
///
/// Status changes are broadcast as [`WatchUpdate::Status`] to any number of
/// subscribers, in addition to being readable as a snapshot.
#[derive(Debug, Clone)]
pub enum WatchStatus {
    /// Watch process has not been started yet.
    NotStarted,
    /// Watch process is starting; covers the settle delay before the first
    /// poll.
    Starting,
    /// Both the poller and the writer are running.
    Watching,
    /// The poller died on a malformed CI response. The writer stays parked on
    /// the handoff channel and the indicator freezes at its last color; this
    /// is NOT a stopped state — the process keeps running.
    PollerStopped(Arc<PollTaskFatalError>),
    /// Shutdown has been requested and is in progress.
    ShutdownInitiated,
    /// Watch process has been gracefully shut down.
    Shutdown,
    /// Watch process terminated due to a fatal error.
    Terminated(Arc<WatchProcessFatalError>),
}

impl WatchStatus {
    /// Returns `true` if the watch process has stopped (either shut down or
    /// terminated).
    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Shutdown | Self::Terminated(_))
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not started"),
            Self::Starting => write!(f, "Starting"),
            Self::Watching => write!(f, "Watching"),
            Self::PollerStopped(error) => write!(f, "Poller stopped: {error}"),
            Self::ShutdownInitiated => write!(f, "Shutdown initiated"),
            Self::Shutdown => write!(f, "Shutdown"),
            Self::Terminated(error) => write!(f, "Terminated: {error}"),
        }
    }
}

impl From<Arc<PollTaskFatalError>> for WatchStatus {
    fn from(value: Arc<PollTaskFatalError>) -> Self {
        Self::PollerStopped(value)
    }
}

impl From<Arc<WatchProcessFatalError>> for WatchStatus {
    fn from(value: Arc<WatchProcessFatalError>) -> Self {
        Self::Terminated(value)
    }
}

impl From<WatchProcessFatalError> for WatchStatus {
    fn from(value: WatchProcessFatalError) -> Self {
        Arc::new(value).into()
    }
}

/// Update events emitted by the watch pipeline.
///
/// Broadcast to subscribers; includes status changes and every build result
/// the writer consumed from the handoff channel.
#[derive(Debug, Clone)]
pub enum WatchUpdate {
    /// Watch process status has changed.
    Status(WatchStatus),
    /// A build result was consumed and reflected on the indicator.
    Result(BuildResult),
}

impl From<WatchStatus> for WatchUpdate {
    fn from(value: WatchStatus) -> Self {
        Self::Status(value)
    }
}

pub(crate) type WatchTransmitter = broadcast::Sender<WatchUpdate>;

/// Receiver for subscribing to [`WatchUpdate`]s.
pub type WatchReceiver = broadcast::Receiver<WatchUpdate>;

/// Trait for reading watch status and subscribing to updates.
///
/// Provides a read-only interface to the pipeline state without the ability
/// to control or modify it.
pub trait WatchReader: Send + Sync + 'static {
    /// Creates a new [`WatchReceiver`] for subscribing to watch updates.
    fn update_receiver(&self) -> WatchReceiver;

    /// Returns the current [`WatchStatus`] as a snapshot.
    fn status_snapshot(&self) -> WatchStatus;
}

#[derive(Debug)]
pub(crate) struct WatchStatusManager {
    status: Mutex<WatchStatus>,
    update_tx: WatchTransmitter,
}

impl WatchStatusManager {
    pub fn new(update_tx: WatchTransmitter) -> Arc<Self> {
        let status = Mutex::new(WatchStatus::NotStarted);

        Arc::new(Self { status, update_tx })
    }

    fn lock_status(&self) -> MutexGuard<'_, WatchStatus> {
        self.status
            .lock()
            .expect("`WatchStatusManager` mutex can't be poisoned")
    }

    pub fn update(&self, new_status: WatchStatus) {
        let mut status_guard = self.lock_status();
        *status_guard = new_status.clone();
        drop(status_guard);

        // Ignore no-receivers errors
        let _ = self.update_tx.send(new_status.into());
    }
}

impl WatchReader for WatchStatusManager {
    fn update_receiver(&self) -> WatchReceiver {
        self.update_tx.subscribe()
    }

    fn status_snapshot(&self) -> WatchStatus {
        self.lock_status().clone()
    }
}
