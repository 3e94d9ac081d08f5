use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use leavebridge_core::{CalendarProvider, SettingsService};
use leavebridge_domain::{
    Absence, AbsenceTimeConfiguration, CalendarSettings, DayLength, EventType, LeaveBridgeError,
    Period, Person, Result as DomainResult, Settings,
};

/// One recorded provider invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Add { subject: String, settings: CalendarSettings },
    Update { event_id: String, subject: String, settings: CalendarSettings },
    Delete { event_id: String, settings: CalendarSettings },
    Check { settings: CalendarSettings },
}

/// Recording mock for `CalendarProvider`.
#[derive(Clone)]
pub struct MockCalendarProvider {
    calls: Arc<Mutex<Vec<ProviderCall>>>,
    add_result: Arc<Mutex<DomainResult<Option<String>>>>,
    check_result: Arc<Mutex<DomainResult<()>>>,
}

impl Default for MockCalendarProvider {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            add_result: Arc::new(Mutex::new(Ok(None))),
            check_result: Arc::new(Mutex::new(Ok(()))),
        }
    }
}

impl MockCalendarProvider {
    pub fn returning_event_id(self, event_id: &str) -> Self {
        *self.add_result.lock().unwrap() = Ok(Some(event_id.to_string()));
        self
    }

    pub fn failing_add(self, error: LeaveBridgeError) -> Self {
        *self.add_result.lock().unwrap() = Err(error);
        self
    }

    pub fn failing_check(self, error: LeaveBridgeError) -> Self {
        *self.check_result.lock().unwrap() = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarProvider for MockCalendarProvider {
    async fn add(
        &self,
        absence: &Absence,
        settings: &CalendarSettings,
    ) -> DomainResult<Option<String>> {
        self.calls.lock().unwrap().push(ProviderCall::Add {
            subject: absence.event_subject(),
            settings: settings.clone(),
        });
        self.add_result.lock().unwrap().clone()
    }

    async fn update(
        &self,
        absence: &Absence,
        event_id: &str,
        settings: &CalendarSettings,
    ) -> DomainResult<()> {
        self.calls.lock().unwrap().push(ProviderCall::Update {
            event_id: event_id.to_string(),
            subject: absence.event_subject(),
            settings: settings.clone(),
        });
        Ok(())
    }

    async fn delete(&self, event_id: &str, settings: &CalendarSettings) -> DomainResult<()> {
        self.calls.lock().unwrap().push(ProviderCall::Delete {
            event_id: event_id.to_string(),
            settings: settings.clone(),
        });
        Ok(())
    }

    async fn check_calendar_sync_settings(&self, settings: &CalendarSettings) -> DomainResult<()> {
        self.calls.lock().unwrap().push(ProviderCall::Check { settings: settings.clone() });
        self.check_result.lock().unwrap().clone()
    }
}

/// Settings store mock that counts how often it is queried.
#[derive(Clone)]
pub struct MockSettingsService {
    settings: Arc<Mutex<DomainResult<Settings>>>,
    reads: Arc<AtomicUsize>,
}

impl MockSettingsService {
    pub fn new(settings: Settings) -> Self {
        Self { settings: Arc::new(Mutex::new(Ok(settings))), reads: Arc::default() }
    }

    pub fn failing_with(error: LeaveBridgeError) -> Self {
        Self { settings: Arc::new(Mutex::new(Err(error))), reads: Arc::default() }
    }

    /// Replace the stored settings, as an administrator would.
    pub fn replace(&self, settings: Settings) {
        *self.settings.lock().unwrap() = Ok(settings);
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsService for MockSettingsService {
    async fn get_settings(&self) -> DomainResult<Settings> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.settings.lock().unwrap().clone()
    }
}

/// A full-day absence of `person` over the given inclusive dates.
pub fn absence(person: Person, start: (i32, u32, u32), end: (i32, u32, u32)) -> Absence {
    let period = Period::new(
        NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        DayLength::Full,
    )
    .unwrap();
    Absence::new(person, period, EventType::AllowedApplication, &AbsenceTimeConfiguration::default())
        .unwrap()
}
