//! Field checks shared by services.
//!
//! Each check records a failure in a `ValidationErrors` collection instead of
//! returning early, so callers can run every check for a request and report all
//! failures at once.

use chrono::{DateTime, Utc};

use crate::server::error::field::ValidationErrors;

/// Requires a present, non-blank string and returns it.
pub fn require_text<'a>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        None => {
            errors.add(field, "must not be null");
            None
        }
        Some(value) if value.trim().is_empty() => {
            errors.add(field, "must not be blank");
            None
        }
        Some(value) => Some(value),
    }
}

/// Rejects a present value that is blank. Absent values pass.
pub fn reject_blank(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        if value.trim().is_empty() {
            errors.add(field, "must not be blank");
        }
    }
}

/// Rejects values longer than `max` characters.
pub fn max_chars(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("must be at most {} characters", max));
    }
}

/// Rejects values that are not shaped like `local@domain.tld`.
pub fn email(errors: &mut ValidationErrors, field: &str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };

    if !valid {
        errors.add(field, "must be a well-formed email address");
    }
}

/// Checks a booking interval: both ends present, neither in the past, start before end.
///
/// # Returns
/// - `Some((start, end))` - Both ends present and consistent
/// - `None` - At least one failure recorded in `errors`
pub fn booking_range(
    errors: &mut ValidationErrors,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if start.is_none() {
        errors.add("start", "must not be null");
    }
    if end.is_none() {
        errors.add("end", "must not be null");
    }
    if let Some(start) = start {
        if start < now {
            errors.add("start", "must not be in the past");
        }
    }
    if let Some(end) = end {
        if end < now {
            errors.add("end", "must not be in the past");
        }
    }

    let (start, end) = (start?, end?);
    if start >= end {
        errors.add("start", "must be before end");
    }

    if errors.is_empty() {
        Some((start, end))
    } else {
        None
    }
}
