//! Absence types handed to calendar providers
//!
//! An [`Absence`] is built from a [`Period`] and resolved against an
//! [`AbsenceTimeConfiguration`] into concrete start/end timestamps so that
//! providers never need to know about half-day rules.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::person::Person;
use crate::constants::{MORNING_END, MORNING_START, NOON_END, NOON_START};
use crate::errors::{LeaveBridgeError, Result};
use crate::impl_domain_enum_conversions;

/// Portion of each day covered by an absence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayLength {
    #[default]
    Full,
    Morning,
    Noon,
}

impl_domain_enum_conversions!(DayLength {
    Full => "FULL",
    Morning => "MORNING",
    Noon => "NOON",
});

/// Kind of event an absence represents in the remote calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    WaitingApplication,
    AllowedApplication,
    SickNote,
}

impl_domain_enum_conversions!(EventType {
    WaitingApplication => "WAITING_APPLICATION",
    AllowedApplication => "ALLOWED_APPLICATION",
    SickNote => "SICK_NOTE",
});

/// Inclusive date range plus day length
///
/// Always ordered: both [`Period::new`] and deserialization reject an end
/// date before the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodFields")]
pub struct Period {
    start_date: NaiveDate,
    end_date: NaiveDate,
    day_length: DayLength,
}

impl Period {
    /// # Errors
    /// Returns `InvalidInput` when `end_date` lies before `start_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, day_length: DayLength) -> Result<Self> {
        if end_date < start_date {
            return Err(LeaveBridgeError::InvalidInput(format!(
                "absence period ends ({end_date}) before it starts ({start_date})"
            )));
        }
        Ok(Self { start_date, end_date, day_length })
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub const fn day_length(&self) -> DayLength {
        self.day_length
    }
}

/// Unvalidated wire form of [`Period`]
#[derive(Deserialize)]
struct PeriodFields {
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    day_length: DayLength,
}

impl TryFrom<PeriodFields> for Period {
    type Error = LeaveBridgeError;

    fn try_from(fields: PeriodFields) -> Result<Self> {
        Self::new(fields.start_date, fields.end_date, fields.day_length)
    }
}

/// Clock times used for half-day absences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceTimeConfiguration {
    pub morning_start: NaiveTime,
    pub morning_end: NaiveTime,
    pub noon_start: NaiveTime,
    pub noon_end: NaiveTime,
}

impl Default for AbsenceTimeConfiguration {
    fn default() -> Self {
        Self {
            morning_start: MORNING_START,
            morning_end: MORNING_END,
            noon_start: NOON_START,
            noon_end: NOON_END,
        }
    }
}

/// A period of time off as mirrored into an external calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub person: Person,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub event_type: EventType,
}

impl Absence {
    /// Resolve `period` into calendar timestamps.
    ///
    /// Full days run from midnight of the first day to midnight after the last
    /// day. Half days use the configured morning/noon windows on the first and
    /// last day.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the end of the period cannot be represented.
    pub fn new(
        person: Person,
        period: Period,
        event_type: EventType,
        time_configuration: &AbsenceTimeConfiguration,
    ) -> Result<Self> {
        let (start, end) = match period.day_length {
            DayLength::Full => {
                let day_after_end = period.end_date.checked_add_days(Days::new(1)).ok_or_else(
                    || LeaveBridgeError::InvalidInput("absence end date out of range".to_string()),
                )?;
                (period.start_date.and_time(NaiveTime::MIN), day_after_end.and_time(NaiveTime::MIN))
            }
            DayLength::Morning => (
                period.start_date.and_time(time_configuration.morning_start),
                period.end_date.and_time(time_configuration.morning_end),
            ),
            DayLength::Noon => (
                period.start_date.and_time(time_configuration.noon_start),
                period.end_date.and_time(time_configuration.noon_end),
            ),
        };

        Ok(Self { person, start, end, all_day: period.day_length == DayLength::Full, event_type })
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    /// Title of the remote calendar entry.
    pub fn event_subject(&self) -> String {
        let name = self.person.nice_name();
        match self.event_type {
            EventType::WaitingApplication => format!("Leave request of {name}"),
            EventType::AllowedApplication => format!("{name} on leave"),
            EventType::SickNote => format!("{name} sick"),
        }
    }
}
