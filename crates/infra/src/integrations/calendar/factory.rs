//! Calendar provider factory

use std::sync::Arc;

use leavebridge_core::CalendarProvider;
use leavebridge_domain::{CalendarProviderKind, LeaveBridgeError, Result};

use super::noop::NoopCalendarProvider;

/// Create the calendar provider selected by `kind`
///
/// # Errors
/// Returns `LeaveBridgeError::Calendar` for providers this build does not ship.
pub fn create_provider(kind: CalendarProviderKind) -> Result<Arc<dyn CalendarProvider>> {
    match kind {
        CalendarProviderKind::Noop => Ok(Arc::new(NoopCalendarProvider)),
        CalendarProviderKind::Exchange | CalendarProviderKind::Google => Err(
            LeaveBridgeError::Calendar(format!("calendar provider `{kind}` is not available")),
        ),
    }
}
