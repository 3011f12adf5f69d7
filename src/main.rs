use std::{path::Path, process::ExitCode, sync::Arc};

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buildlamp::{
    config::{SETTINGS_FILE, Settings},
    device::{self, DEVICE_DIR},
    indicator::SerialIndicator,
    status::CiStatusClient,
    watch::{WatchConfig, WatchEngine},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> buildlamp::error::Result<()> {
    let settings = Settings::from_file(Path::new(SETTINGS_FILE))?;

    let device_path = device::locate(Path::new(DEVICE_DIR))?;
    info!("using indicator device {}", device_path.display());

    let sink = SerialIndicator::open(&device_path)?;
    let source = CiStatusClient::new(&settings)?;

    let engine = WatchEngine::new(WatchConfig::default(), Arc::new(source), Box::new(sink));
    let controller = engine.start();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            controller.shutdown().await?;
        }
        status = controller.until_stopped() => {
            error!("watch stopped: {status}");
        }
    }

    // The serial handle closes when the pipeline is dropped.
    Ok(())
}
