use std::time::Duration;

use crate::config::Validate;
use crate::defaults::DEFAULT_TICK_INTERVAL;

pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub tick_interval: Duration,
    /// Fixed seed for reproducible food placement; random when `None`.
    pub seed: Option<u64>,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.tick_interval < MIN_TICK_INTERVAL || self.tick_interval > MAX_TICK_INTERVAL {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL.as_millis(),
                MAX_TICK_INTERVAL.as_millis()
            ));
        }
        Ok(())
    }
}
