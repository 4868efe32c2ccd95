//! Hijri/Gregorian date conversion on a fixed month table.
//!
//! Hijri months alternate 30 and 29 days (odd months long, even months short),
//! giving a 354-day year. The two calendars are tied together by a single
//! [`ReferenceAnchor`]: every conversion counts days away from it.
//!
//! ```
//! use umm_al_qura::{CalendarKind, FixedClock, UmmAlQura};
//!
//! let clock = FixedClock::new(chrono::NaiveDate::from_ymd_opt(2025, 5, 13).unwrap());
//! let engine = UmmAlQura::with_clock(clock);
//!
//! let today = engine.today().unwrap();
//! assert_eq!(today.hijri().to_string(), "1446-11-15");
//!
//! let ramadan = engine.generate_month(1446, 9, CalendarKind::Hijri).unwrap();
//! assert_eq!(ramadan.len(), 30);
//! ```

mod age;
mod anchor;
mod calendar;
mod clock;
mod consts;
mod names;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use age::{Age, AgeReport};
pub use anchor::{Converted, ReferenceAnchor};
pub use calendar::{CalendarDay, CalendarMonth, UmmAlQura};
pub use clock::{Clock, FixedClock, FnClock, SystemClock};
pub use consts::*;
pub use names::{gregorian_month_name, hijri_month_name, weekday_name};
pub use types::{
    CalendarKind, DateParts, GregorianDate, HijriDate, Weekday, days_in_gregorian_month,
    gregorian_month_length, hijri_month_length,
};

/// Everything that can go wrong building or converting a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_IN_YEAR)]
    InvalidMonth(i32),

    #[error("Invalid day {day} for Hijri month {year}-{month:02}")]
    InvalidDay { day: i32, month: i32, year: i32 },

    #[error("Hijri year {0} outside {min}-{max}", min = MIN_EVENT_YEAR, max = MAX_EVENT_YEAR)]
    YearOutOfBounds(i32),

    #[error("Not a Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { day: i32, month: i32, year: i32 },

    /// The result lies beyond the dates `chrono` can represent.
    #[error("Date {days} days from the anchor is out of range")]
    OutOfRange { days: i64 },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Unknown calendar: {0} (expected hijri or gregorian)")]
    InvalidCalendar(String),

    #[error("Birth date {birth} is after {on}")]
    BirthAfterDate { birth: String, on: String },
}

/// Checks a Hijri date submitted for an event.
///
/// On top of the month table, the year must fall in
/// `MIN_EVENT_YEAR..=MAX_EVENT_YEAR`.
///
/// # Errors
/// Returns the first failing check: month, then day, then year.
pub fn validate_event_date(day: i32, month: i32, year: i32) -> Result<HijriDate, DateError> {
    let checked = HijriDate::new(day, month, year).and_then(|date| {
        if (MIN_EVENT_YEAR..=MAX_EVENT_YEAR).contains(&year) {
            Ok(date)
        } else {
            Err(DateError::YearOutOfBounds(year))
        }
    });

    if let Err(err) = &checked {
        tracing::debug!(day, month, year, %err, "rejected event date");
    }
    checked
}

/// `true` if [`validate_event_date`] accepts the date
pub fn is_valid_hijri_date(day: i32, month: i32, year: i32) -> bool {
    validate_event_date(day, month, year).is_ok()
}
