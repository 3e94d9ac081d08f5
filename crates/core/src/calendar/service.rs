//! Calendar sync service - stable facade over a swappable provider

use std::sync::Arc;

use leavebridge_domain::{Absence, CalendarSettings, Result};
use tracing::{debug, info, warn};

use super::ports::{CalendarProvider, SettingsService};

/// Calendar sync service
///
/// The calendar settings are read once in [`CalendarSyncService::new`] and
/// kept for the lifetime of the service. Build a new service to pick up
/// changed settings.
pub struct CalendarSyncService {
    calendar_settings: CalendarSettings,
    provider: Arc<dyn CalendarProvider>,
}

impl CalendarSyncService {
    /// Create a new calendar sync service
    ///
    /// # Errors
    /// Propagates any failure of the settings store.
    pub async fn new(
        settings_service: &dyn SettingsService,
        provider: Arc<dyn CalendarProvider>,
    ) -> Result<Self> {
        let calendar_settings = settings_service.get_settings().await?.calendar;

        info!(
            provider = provider.name(),
            kind = %calendar_settings.provider,
            "calendar provider configured"
        );

        Ok(Self { calendar_settings, provider })
    }

    /// Settings snapshot this service was built with
    pub fn calendar_settings(&self) -> &CalendarSettings {
        &self.calendar_settings
    }

    /// Mirror `absence` into the remote calendar
    ///
    /// Returns whatever the provider returns, unmodified.
    pub async fn add_absence(&self, absence: &Absence) -> Result<Option<String>> {
        debug!(event_type = %absence.event_type, all_day = absence.all_day, "adding absence");
        self.provider.add(absence, &self.calendar_settings).await.inspect_err(|err| {
            warn!(
                provider = self.provider.name(),
                error_type = err.label(),
                error = %err,
                "adding absence failed"
            );
        })
    }

    /// Update the remote entry `event_id` to reflect `absence`
    pub async fn update(&self, absence: &Absence, event_id: &str) -> Result<()> {
        debug!(event_id, "updating absence");
        self.provider.update(absence, event_id, &self.calendar_settings).await
    }

    /// Remove the remote entry `event_id`
    pub async fn delete_absence(&self, event_id: &str) -> Result<()> {
        debug!(event_id, "deleting absence");
        self.provider.delete(event_id, &self.calendar_settings).await
    }

    /// Ask the provider to validate the configured settings
    pub async fn check_calendar_sync_settings(&self) -> Result<()> {
        self.provider.check_calendar_sync_settings(&self.calendar_settings).await.inspect_err(
            |err| {
                warn!(
                    provider = self.provider.name(),
                    error_type = err.label(),
                    error = %err,
                    "calendar sync settings rejected"
                );
            },
        )
    }
}
