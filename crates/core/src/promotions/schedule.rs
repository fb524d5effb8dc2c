//! Promotion Schedules

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Optional, inclusive calendar-date window during which a promotion runs.
///
/// A missing bound leaves that side of the window open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schedule {
    /// First day the promotion runs
    pub start: Option<Date>,

    /// Last day the promotion runs
    pub end: Option<Date>,
}

impl Schedule {
    /// A window open on both sides.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A window between two days, both inclusive.
    #[must_use]
    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A window that opens on `start` and never closes.
    #[must_use]
    pub const fn starting(start: Date) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A window that is already open and closes after `end`.
    #[must_use]
    pub const fn until(end: Date) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Whether `day` falls inside the window.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start.is_none_or(|start| start <= day) && self.end.is_none_or(|end| day <= end)
    }

    /// Whether the start does not come after the end.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// Calendar date used to evaluate promotion windows at `now`.
///
/// Dates are taken in UTC, matching how stored `YYYY-MM-DD` bounds are compared.
#[must_use]
pub fn evaluation_date(now: Timestamp) -> Date {
    now.to_zoned(TimeZone::UTC).date()
}
