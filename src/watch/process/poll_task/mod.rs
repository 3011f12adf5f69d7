use std::sync::Arc;

use tokio::{sync::mpsc, time};
use tracing::{debug, error, warn};

use crate::{
    status::{BuildResult, StatusSource},
    util::Never,
    watch::config::WatchProcessConfig,
};

use super::error::PollTaskFatalError;

/// Polls the CI status source on a fixed cadence and publishes each result
/// on the handoff channel.
///
/// The loop is "work then sleep": the actual cadence is the poll interval
/// plus request latency. Transport errors are logged and retried on the next
/// tick with no backoff; a malformed response ends the task.
pub(crate) struct StatusPollTask {
    config: StatusPollTaskConfig,
    source: Arc<dyn StatusSource>,
    result_tx: mpsc::Sender<BuildResult>,
}

impl StatusPollTask {
    pub fn new(
        config: &WatchProcessConfig,
        source: Arc<dyn StatusSource>,
        result_tx: mpsc::Sender<BuildResult>,
    ) -> Self {
        Self {
            config: config.into(),
            source,
            result_tx,
        }
    }

    pub async fn run(self) -> Result<Never, PollTaskFatalError> {
        loop {
            match self.source.fetch_status().await {
                Ok(status) => {
                    debug!("publishing build result: {status}");

                    // Blocks until the writer has drained the previous
                    // result; publish is the back-pressure point.
                    if self.result_tx.send(status.into_result()).await.is_err() {
                        return Err(PollTaskFatalError::HandoffClosed);
                    }
                }
                Err(e) if e.is_fatal() => {
                    error!("malformed CI response, polling stops: {e}");
                    return Err(PollTaskFatalError::MalformedResponse(e));
                }
                Err(e) => {
                    warn!("status fetch failed: {e}");
                }
            }

            time::sleep(self.config.poll_interval()).await;
        }
    }
}

#[derive(Clone)]
struct StatusPollTaskConfig {
    poll_interval: time::Duration,
}

impl StatusPollTaskConfig {
    pub fn poll_interval(&self) -> time::Duration {
        self.poll_interval
    }
}

impl From<&WatchProcessConfig> for StatusPollTaskConfig {
    fn from(value: &WatchProcessConfig) -> Self {
        Self {
            poll_interval: value.poll_interval(),
        }
    }
}
