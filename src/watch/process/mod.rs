use std::sync::Arc;

use futures::TryFutureExt;
use tokio::{
    sync::{broadcast, mpsc},
    time,
};
use tracing::{info, warn};

use crate::{
    indicator::IndicatorSink,
    status::{BuildResult, StatusSource},
    util::{AbortOnDropHandle, Never},
};

use super::{
    config::{WatchConfig, WatchProcessConfig},
    state::{WatchStatus, WatchStatusManager, WatchTransmitter},
};

pub(crate) mod error;
pub(crate) mod poll_task;
pub(crate) mod write_task;

use error::{PollTaskFatalError, WatchProcessFatalError};
use poll_task::StatusPollTask;
use write_task::IndicatorWriteTask;

/// Supervising task that owns the poller and the writer.
///
/// Wires the capacity-1 handoff channel between them, waits out the settle
/// delay, and turns worker exits into observable statuses. There is no
/// restart machinery: a dead poller is recorded as
/// [`WatchStatus::PollerStopped`] and the process keeps running with the
/// indicator frozen; a dead writer terminates the process.
pub(super) struct WatchProcess {
    config: WatchProcessConfig,
    source: Arc<dyn StatusSource>,
    sink: Box<dyn IndicatorSink>,
    shutdown_tx: broadcast::Sender<()>,
    status_manager: Arc<WatchStatusManager>,
    update_tx: WatchTransmitter,
}

impl WatchProcess {
    pub fn spawn(
        config: &WatchConfig,
        source: Arc<dyn StatusSource>,
        sink: Box<dyn IndicatorSink>,
        shutdown_tx: broadcast::Sender<()>,
        status_manager: Arc<WatchStatusManager>,
        update_tx: WatchTransmitter,
    ) -> AbortOnDropHandle<()> {
        let config = config.into();

        tokio::spawn(async move {
            let process = Self {
                config,
                source,
                sink,
                shutdown_tx,
                status_manager,
                update_tx,
            };

            process.run().await
        })
        .into()
    }

    async fn run(self) {
        let Self {
            config,
            source,
            sink,
            shutdown_tx,
            status_manager,
            update_tx,
        } = self;

        status_manager.update(WatchStatus::Starting);

        let mut shutdown_rx = shutdown_tx.subscribe();

        // Give the attached microcontroller time to finish its reset cycle
        // after the serial line was opened.
        tokio::select! {
            _ = time::sleep(config.settle_delay()) => {}
            shutdown_res = shutdown_rx.recv() => {
                if let Err(e) = shutdown_res {
                    status_manager
                        .update(WatchProcessFatalError::ShutdownSignalRecv(e).into());
                }
                return;
            }
        }

        let (result_tx, result_rx) = mpsc::channel::<BuildResult>(1);

        let poll_task = StatusPollTask::new(&config, source, result_tx.clone());
        let mut poll_handle: AbortOnDropHandle<Result<Never, PollTaskFatalError>> =
            tokio::spawn(poll_task.run()).into();

        let write_task = IndicatorWriteTask::new(sink, result_rx, update_tx);
        let mut write_handle: AbortOnDropHandle<Result<Never, WatchProcessFatalError>> =
            tokio::spawn(write_task.run().map_err(WatchProcessFatalError::from)).into();

        status_manager.update(WatchStatus::Watching);
        info!("watch pipeline running");

        let mut poller_alive = true;

        loop {
            tokio::select! {
                poll_res = &mut poll_handle, if poller_alive => {
                    poller_alive = false;

                    let fatal = match poll_res {
                        Ok(Err(e)) => e,
                        Ok(Ok(never)) => match never {},
                        Err(join_e) => {
                            let e = WatchProcessFatalError::PollTaskJoin(join_e);
                            status_manager.update(e.into());
                            return;
                        }
                    };

                    // `result_tx` stays alive for the rest of this loop, so
                    // the channel never closes: the writer parks on `recv`
                    // and the indicator freezes at its last color.
                    warn!("poller stopped, indicator frozen: {fatal}");
                    status_manager.update(WatchStatus::PollerStopped(Arc::new(fatal)));
                }
                write_res = &mut write_handle => {
                    let fatal = match write_res {
                        Ok(Err(e)) => e,
                        Ok(Ok(never)) => match never {},
                        Err(join_e) => WatchProcessFatalError::WriteTaskJoin(join_e),
                    };

                    status_manager.update(fatal.into());
                    return;
                }
                shutdown_res = shutdown_rx.recv() => {
                    if let Err(e) = shutdown_res {
                        status_manager
                            .update(WatchProcessFatalError::ShutdownSignalRecv(e).into());
                    }
                    return;
                }
            }
        }
    }
}
