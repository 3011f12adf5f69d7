use std::sync::{Arc, Mutex};

use tokio::{
    sync::broadcast::{self, error::RecvError},
    time,
};

use crate::{indicator::IndicatorSink, status::StatusSource, util::AbortOnDropHandle};

use super::{
    config::{WatchConfig, WatchControllerConfig},
    error::{Result, WatchError},
    process::{WatchProcess, error::WatchProcessFatalError},
    state::{
        WatchReader, WatchReceiver, WatchStatus, WatchStatusManager, WatchTransmitter, WatchUpdate,
    },
};

/// Controller for managing and monitoring a running watch pipeline.
///
/// `WatchController` provides an interface to monitor the status of the
/// pipeline and perform graceful shutdown operations. It holds a handle to
/// the running watch task and coordinates shutdown signals.
#[derive(Debug)]
pub struct WatchController {
    config: WatchControllerConfig,
    handle: Mutex<Option<AbortOnDropHandle<()>>>,
    shutdown_tx: broadcast::Sender<()>,
    status_manager: Arc<WatchStatusManager>,
}

impl WatchController {
    fn new(
        config: &WatchConfig,
        handle: AbortOnDropHandle<()>,
        shutdown_tx: broadcast::Sender<()>,
        status_manager: Arc<WatchStatusManager>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config: config.into(),
            handle: Mutex::new(Some(handle)),
            shutdown_tx,
            status_manager,
        })
    }

    /// Returns a [`WatchReader`] interface for accessing watch status and
    /// updates.
    pub fn reader(&self) -> Arc<dyn WatchReader> {
        self.status_manager.clone()
    }

    /// Creates a new [`WatchReceiver`] for subscribing to status changes and
    /// consumed build results.
    pub fn update_receiver(&self) -> WatchReceiver {
        self.status_manager.update_receiver()
    }

    /// Returns the current [`WatchStatus`] as a snapshot.
    pub fn status_snapshot(&self) -> WatchStatus {
        self.status_manager.status_snapshot()
    }

    fn try_consume_handle(&self) -> Option<AbortOnDropHandle<()>> {
        self.handle
            .lock()
            .expect("`WatchController` mutex can't be poisoned")
            .take()
    }

    /// Tries to perform a clean shutdown of the watch process and consumes
    /// the task handle.
    ///
    /// If a clean shutdown fails, the process is aborted. This method can
    /// only be called once per controller instance.
    ///
    /// Returns an error if the process had to be aborted, or if the handle
    /// was already consumed.
    pub async fn shutdown(&self) -> Result<()> {
        let Some(mut handle) = self.try_consume_handle() else {
            return Err(WatchError::AlreadyShutdown);
        };

        if handle.is_finished() {
            let status = self.status_manager.status_snapshot();
            return Err(WatchError::AlreadyTerminated(status));
        }

        self.status_manager.update(WatchStatus::ShutdownInitiated);

        let shutdown_send_res = self.shutdown_tx.send(()).map_err(|e| {
            handle.abort();
            WatchProcessFatalError::SendShutdownSignalFailed(e)
        });

        let shutdown_res = match shutdown_send_res {
            Ok(_) => {
                tokio::select! {
                    join_res = &mut handle => {
                        join_res.map_err(WatchProcessFatalError::WatchProcessTaskJoin)
                    }
                    _ = time::sleep(self.config.shutdown_timeout()) => {
                        handle.abort();
                        Err(WatchProcessFatalError::ShutdownTimeout)
                    }
                }
            }
            Err(e) => Err(e),
        };

        if let Err(e) = shutdown_res {
            let e_ref = Arc::new(e);
            self.status_manager.update(e_ref.clone().into());

            return Err(WatchError::ShutdownFailed(e_ref));
        }

        self.status_manager.update(WatchStatus::Shutdown);
        Ok(())
    }

    /// Waits until the watch process has stopped and returns the final
    /// status.
    ///
    /// Blocks until the process reaches a stopped state, either through
    /// graceful shutdown or termination. A stopped poller alone does not
    /// resolve this future; the process keeps running frozen.
    pub async fn until_stopped(&self) -> WatchStatus {
        let mut watch_rx = self.update_receiver();

        let status = self.status_snapshot();
        if status.is_stopped() {
            return status;
        }

        loop {
            match watch_rx.recv().await {
                Ok(watch_update) => {
                    if let WatchUpdate::Status(status) = watch_update
                        && status.is_stopped()
                    {
                        return status;
                    }
                }
                Err(RecvError::Lagged(_)) => {
                    let status = self.status_snapshot();
                    if status.is_stopped() {
                        return status;
                    }
                }
                Err(RecvError::Closed) => return self.status_snapshot(),
            }
        }
    }
}

/// Builder for configuring and starting the watch pipeline.
///
/// `WatchEngine` encapsulates the configuration, the status source, and the
/// indicator sink. The watch process is spawned when [`start`](Self::start)
/// is called, and a [`WatchController`] is returned for monitoring and
/// management.
pub struct WatchEngine {
    config: WatchConfig,
    source: Arc<dyn StatusSource>,
    sink: Box<dyn IndicatorSink>,
    status_manager: Arc<WatchStatusManager>,
    update_tx: WatchTransmitter,
}

impl WatchEngine {
    /// Creates a new watch engine with the specified configuration, status
    /// source, and indicator sink.
    pub fn new(
        config: impl Into<WatchConfig>,
        source: Arc<dyn StatusSource>,
        sink: Box<dyn IndicatorSink>,
    ) -> Self {
        let (update_tx, _) = broadcast::channel(100);

        let status_manager = WatchStatusManager::new(update_tx.clone());

        Self {
            config: config.into(),
            source,
            sink,
            status_manager,
            update_tx,
        }
    }

    /// Returns a reader interface for accessing watch status and updates.
    pub fn reader(&self) -> Arc<dyn WatchReader> {
        self.status_manager.clone()
    }

    /// Creates a new receiver for subscribing to status changes and consumed
    /// build results.
    pub fn update_receiver(&self) -> WatchReceiver {
        self.status_manager.update_receiver()
    }

    /// Returns the current watch status as a snapshot.
    pub fn status_snapshot(&self) -> WatchStatus {
        self.status_manager.status_snapshot()
    }

    /// Starts the watch process and returns a [`WatchController`] for
    /// managing it.
    ///
    /// This consumes the engine and spawns the watch task in the background.
    pub fn start(self) -> Arc<WatchController> {
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let handle = WatchProcess::spawn(
            &self.config,
            self.source,
            self.sink,
            shutdown_tx.clone(),
            self.status_manager.clone(),
            self.update_tx,
        );

        WatchController::new(&self.config, handle, shutdown_tx, self.status_manager)
    }
}
