use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    indicator::{IndicatorCommand, IndicatorSink},
    status::BuildResult,
    util::Never,
    watch::state::{WatchTransmitter, WatchUpdate},
};

use super::error::WriteTaskFatalError;

/// Consumes build results from the handoff channel and reflects them on the
/// indicator sink.
///
/// Writes green once on startup, before consuming any channel value, so the
/// lamp has a defined state before the first poll completes. Sink failures
/// are logged and otherwise ignored; the serial protocol has no read path
/// and nothing useful can be done about a failed write.
pub(crate) struct IndicatorWriteTask {
    sink: Box<dyn IndicatorSink>,
    result_rx: mpsc::Receiver<BuildResult>,
    update_tx: WatchTransmitter,
}

impl IndicatorWriteTask {
    pub fn new(
        sink: Box<dyn IndicatorSink>,
        result_rx: mpsc::Receiver<BuildResult>,
        update_tx: WatchTransmitter,
    ) -> Self {
        Self {
            sink,
            result_rx,
            update_tx,
        }
    }

    pub async fn run(mut self) -> Result<Never, WriteTaskFatalError> {
        self.write(IndicatorCommand::Green);

        loop {
            // The supervisor holds a sender for the process lifetime, so a
            // closed channel here means the pipeline is torn down around us.
            let Some(result) = self.result_rx.recv().await else {
                return Err(WriteTaskFatalError::HandoffClosed);
            };

            let command = IndicatorCommand::from(&result);
            debug!("build result {result}, setting indicator {command}");
            self.write(command);

            // Ignore no-receivers errors
            let _ = self.update_tx.send(WatchUpdate::Result(result));
        }
    }

    fn write(&mut self, command: IndicatorCommand) {
        if let Err(e) = self.sink.write_command(command) {
            warn!("indicator write failed: {e}");
        }
    }
}
