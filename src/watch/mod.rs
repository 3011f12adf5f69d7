mod config;
mod engine;
pub(crate) mod error;
pub(crate) mod process;
mod state;

pub use config::WatchConfig;
pub use engine::{WatchController, WatchEngine};
pub use state::{WatchReader, WatchReceiver, WatchStatus, WatchUpdate};
