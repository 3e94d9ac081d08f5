//! Domain-level constants

use chrono::NaiveTime;

// Half-day absence windows
pub const MORNING_START: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};
pub const MORNING_END: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};
pub const NOON_START: NaiveTime = MORNING_END;
pub const NOON_END: NaiveTime = match NaiveTime::from_hms_opt(16, 0, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

// Calendar defaults
pub const DEFAULT_CALENDAR_NAME: &str = "Urlaubsverwaltung";
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";
