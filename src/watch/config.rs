use tokio::time;

/// Configuration for the watch engine.
#[derive(Clone, Debug)]
pub struct WatchConfig {
    poll_interval: time::Duration,
    settle_delay: time::Duration,
    shutdown_timeout: time::Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval: time::Duration::from_secs(60),
            settle_delay: time::Duration::from_secs(5),
            shutdown_timeout: time::Duration::from_secs(6),
        }
    }
}

impl WatchConfig {
    /// Returns the fixed pause between poll iterations.
    pub fn poll_interval(&self) -> time::Duration {
        self.poll_interval
    }

    /// Returns the delay between engine start and the first poll, giving the
    /// attached microcontroller time to come out of its reset cycle after the
    /// serial line is opened.
    pub fn settle_delay(&self) -> time::Duration {
        self.settle_delay
    }

    /// Returns the timeout duration for graceful shutdown operations.
    pub fn shutdown_timeout(&self) -> time::Duration {
        self.shutdown_timeout
    }

    /// Sets the pause between poll iterations.
    ///
    /// The poller works then sleeps, so the actual cadence is this interval
    /// plus request latency.
    ///
    /// Default: `60` seconds
    pub fn with_poll_interval(mut self, interval: time::Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the delay between engine start and the first poll.
    ///
    /// Default: `5` seconds
    pub fn with_settle_delay(mut self, delay: time::Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the timeout duration for graceful shutdown operations.
    ///
    /// Default: `6` seconds
    pub fn with_shutdown_timeout(mut self, timeout: time::Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }
}

#[derive(Debug)]
pub(crate) struct WatchControllerConfig {
    shutdown_timeout: time::Duration,
}

impl WatchControllerConfig {
    pub fn shutdown_timeout(&self) -> time::Duration {
        self.shutdown_timeout
    }
}

impl From<&WatchConfig> for WatchControllerConfig {
    fn from(value: &WatchConfig) -> Self {
        Self {
            shutdown_timeout: value.shutdown_timeout,
        }
    }
}

#[derive(Clone)]
pub(crate) struct WatchProcessConfig {
    poll_interval: time::Duration,
    settle_delay: time::Duration,
}

impl WatchProcessConfig {
    pub fn poll_interval(&self) -> time::Duration {
        self.poll_interval
    }

    pub fn settle_delay(&self) -> time::Duration {
        self.settle_delay
    }
}

impl From<&WatchConfig> for WatchProcessConfig {
    fn from(value: &WatchConfig) -> Self {
        Self {
            poll_interval: value.poll_interval,
            settle_delay: value.settle_delay,
        }
    }
}
