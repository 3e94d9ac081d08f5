//! Calendar provider used while calendar sync is switched off

use async_trait::async_trait;
use leavebridge_core::CalendarProvider;
use leavebridge_domain::{Absence, CalendarSettings, Result};
use tracing::info;

/// Accepts every call and touches no remote calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCalendarProvider;

#[async_trait]
impl CalendarProvider for NoopCalendarProvider {
    async fn add(&self, absence: &Absence, _settings: &CalendarSettings) -> Result<Option<String>> {
        info!(
            person = %absence.person.id,
            start = %absence.start,
            end = %absence.end,
            "calendar sync disabled, absence not added"
        );
        Ok(None)
    }

    async fn update(
        &self,
        absence: &Absence,
        event_id: &str,
        _settings: &CalendarSettings,
    ) -> Result<()> {
        info!(person = %absence.person.id, event_id, "calendar sync disabled, event not updated");
        Ok(())
    }

    async fn delete(&self, event_id: &str, _settings: &CalendarSettings) -> Result<()> {
        info!(event_id, "calendar sync disabled, event not deleted");
        Ok(())
    }

    async fn check_calendar_sync_settings(&self, _settings: &CalendarSettings) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
