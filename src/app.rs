use std::time::Duration;

use crate::config::AppConfig;
use crate::ui::components::StatefulChildState;

/// Top-level application state for the shell.
pub struct App {
    // Config
    pub config: AppConfig,

    // State container for the stateful greeting panel. Empty for now; it is
    // threaded through rendering untouched.
    pub child_state: StatefulChildState,
}

impl App {
    pub fn new() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        tracing::debug!("config loaded, tick rate {}ms", config.tick_rate_ms);

        Self {
            config,
            child_state: StatefulChildState::default(),
        }
    }

    /// Input poll interval for the main loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.tick_rate_ms)
    }
}
