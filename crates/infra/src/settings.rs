//! Settings store backed by a loaded settings value

use async_trait::async_trait;
use leavebridge_core::SettingsService;
use leavebridge_domain::{Result, Settings};

use crate::config;

/// Serves one settings value, typically read by [`config::load`]
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsService {
    settings: Settings,
}

impl StaticSettingsService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load settings from the environment, falling back to a settings file.
    ///
    /// # Errors
    /// Returns `LeaveBridgeError::Config` when the provider variable is invalid
    /// or neither source yields settings.
    pub fn from_env_or_file() -> Result<Self> {
        config::load().map(Self::new)
    }
}

#[async_trait]
impl SettingsService for StaticSettingsService {
    async fn get_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }
}
