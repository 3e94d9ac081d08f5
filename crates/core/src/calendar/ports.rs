//! Port interfaces for calendar synchronization
//!
//! These traits define the boundaries between the sync facade and the
//! concrete calendar backends and settings store.

use async_trait::async_trait;
use leavebridge_domain::{Absence, CalendarSettings, Result, Settings};

/// Trait for calendar backends (Exchange, Google, no-op, ...)
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Create a remote entry for `absence`.
    ///
    /// Returns the provider-assigned event id, or `None` when the provider
    /// does not create entries.
    async fn add(&self, absence: &Absence, settings: &CalendarSettings) -> Result<Option<String>>;

    /// Update the remote entry `event_id` to reflect `absence`
    async fn update(
        &self,
        absence: &Absence,
        event_id: &str,
        settings: &CalendarSettings,
    ) -> Result<()>;

    /// Remove the remote entry `event_id`
    async fn delete(&self, event_id: &str, settings: &CalendarSettings) -> Result<()>;

    /// Validate connectivity and credentials for `settings`
    async fn check_calendar_sync_settings(&self, settings: &CalendarSettings) -> Result<()>;

    /// Name reported in logs
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Trait for the application settings store
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Fetch the current settings
    async fn get_settings(&self) -> Result<Settings>;
}
