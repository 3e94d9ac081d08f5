//! Settings structures
//!
//! Secrets (`password`, `client_secret`, `refresh_token`) are accepted when
//! deserializing but never written back out.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CALENDAR_NAME, DEFAULT_TIMEZONE};
use crate::impl_domain_enum_conversions;

/// Application settings as provided by the settings store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub calendar: CalendarSettings,
}

impl Settings {
    pub fn calendar_settings(&self) -> &CalendarSettings {
        &self.calendar
    }
}

/// Which calendar backend absences are mirrored into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarProviderKind {
    /// Sync disabled
    #[default]
    Noop,
    Exchange,
    Google,
}

impl_domain_enum_conversions!(CalendarProviderKind {
    Noop => "noop",
    Exchange => "exchange",
    Google => "google",
});

/// Calendar sync configuration snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default)]
    pub provider: CalendarProviderKind,
    #[serde(default)]
    pub exchange: ExchangeCalendarSettings,
    #[serde(default)]
    pub google: GoogleCalendarSettings,
}

/// Exchange (EWS) connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeCalendarSettings {
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub calendar: String,
    pub timezone: String,
    pub send_invitation_active: bool,
}

impl Default for ExchangeCalendarSettings {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            calendar: DEFAULT_CALENDAR_NAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            send_invitation_active: false,
        }
    }
}

/// Google Calendar OAuth settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleCalendarSettings {
    pub client_id: Option<String>,
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    pub calendar_id: Option<String>,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
}
