use std::result;

use thiserror::Error;
use tokio::{
    sync::broadcast::error::{RecvError, SendError},
    task::JoinError,
};

use crate::status::error::StatusApiError;

/// Terminal error of the status poll task.
///
/// Fatal for the poller only: the process keeps running, the writer stays
/// parked on the handoff channel, and the indicator freezes at its last
/// color.
#[derive(Error, Debug)]
pub enum PollTaskFatalError {
    #[error("CI response could not be parsed, polling stopped: {0}")]
    MalformedResponse(StatusApiError),

    #[error("handoff channel closed under the poller")]
    HandoffClosed,
}

/// Terminal error of the indicator write task.
///
/// Fatal for the whole process: without a writer the pipeline serves no
/// purpose.
#[derive(Error, Debug)]
pub enum WriteTaskFatalError {
    #[error("handoff channel closed while the writer was receiving")]
    HandoffClosed,
}

#[derive(Error, Debug)]
pub enum WatchProcessFatalError {
    #[error("watch process task join error: {0}")]
    WatchProcessTaskJoin(JoinError),

    #[error("status poll task join error: {0}")]
    PollTaskJoin(JoinError),

    #[error("indicator write task join error: {0}")]
    WriteTaskJoin(JoinError),

    #[error(transparent)]
    WriteTask(#[from] WriteTaskFatalError),

    #[error("shutdown `RecvError` error: {0}")]
    ShutdownSignalRecv(RecvError),

    #[error("failed to send watch process shutdown request error: {0}")]
    SendShutdownSignalFailed(SendError<()>),

    #[error("watch shutdown timeout error")]
    ShutdownTimeout,
}
