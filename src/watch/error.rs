use std::{result, sync::Arc};

use thiserror::Error;

use super::{process::error::WatchProcessFatalError, state::WatchStatus};

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("watch process already shut down")]
    AlreadyShutdown,

    #[error("watch process already terminated, status: {0}")]
    AlreadyTerminated(WatchStatus),

    #[error("watch shutdown procedure failed: {0}")]
    ShutdownFailed(Arc<WatchProcessFatalError>),
}

pub(super) type Result<T> = result::Result<T, WatchError>;
