use crate::consts::{
    DATE_SEPARATOR, FIRST_MONTH, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_FALLBACK_DAYS, HIJRI_DAYS_IN_MONTH,
    HIJRI_FALLBACK_DAYS, MIN_DAY, MONTHS_IN_YEAR,
};
use crate::DateError;
use crate::names::weekday_name;
use crate::prelude::*;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plain `{ day, month, year }` triple used as the serde shape of both date types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub day:   i32,
    pub month: i32,
    pub year:  i32,
}

/// A Hijri date whose month is in `1..=12` and whose day fits the fixed month table.
///
/// The year is unbounded here; the narrower event window lives in
/// [`validate_event_date`](crate::validate_event_date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "DateParts", into = "DateParts")]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct HijriDate {
    // Field order matters: derived `Ord` compares year, then month, then day.
    pub(crate) year:  i32,
    pub(crate) month: u8,
    pub(crate) day:   u8,
}

impl HijriDate {
    /// Creates a new Hijri date, checking month and day against the month table
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay`.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        let month_u8 = u8::try_from(month)
            .ok()
            .filter(|m| (1..=MONTHS_IN_YEAR).contains(m))
            .ok_or(DateError::InvalidMonth(month))?;

        let max_day = hijri_month_length(month);
        let day_u8 = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=max_day).contains(d))
            .ok_or(DateError::InvalidDay { day, month, year })?;

        Ok(Self {
            year,
            month: month_u8,
            day: day_u8,
        })
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Number of days in this date's month
    pub fn days_in_month(self) -> u8 {
        hijri_month_length(i32::from(self.month))
    }
}

impl TryFrom<DateParts> for HijriDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.day, parts.month, parts.year)
    }
}

impl From<HijriDate> for DateParts {
    fn from(date: HijriDate) -> Self {
        Self {
            day:   i32::from(date.day),
            month: i32::from(date.month),
            year:  date.year,
        }
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso_parts(s)?;
        Self::new(day, month, year)
    }
}

/// A real day of the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(try_from = "DateParts", into = "DateParts")]
#[display(fmt = "{_0}")]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new Gregorian date, leap years included
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the triple does not name a real day.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        let invalid = DateError::InvalidGregorianDate { day, month, year };
        let (Ok(m), Ok(d)) = (u32::try_from(month), u32::try_from(day)) else {
            return Err(invalid);
        };
        NaiveDate::from_ymd_opt(year, m, d).map(Self).ok_or(invalid)
    }

    #[inline]
    pub fn day(self) -> u8 {
        // chrono guarantees 1..=31
        u8::try_from(self.0.day()).unwrap_or(MIN_DAY)
    }

    #[inline]
    pub fn month(self) -> u8 {
        u8::try_from(self.0.month()).unwrap_or(FIRST_MONTH)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Day of the week, Sunday first
    pub fn weekday(self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// Number of days in this date's month, leap years included
    pub fn days_in_month(self) -> u8 {
        days_in_gregorian_month(self.year(), i32::from(self.month()))
    }

    /// Wraps a `chrono` date
    #[inline]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying `chrono` date
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Moves by a signed number of calendar days.
    /// Returns `None` past the range `chrono` can represent.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.0.checked_add_days(step)
        } else {
            self.0.checked_sub_days(step)
        };
        moved.map(Self)
    }

    /// Signed number of calendar days from `earlier` to `self`
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }
}

impl TryFrom<DateParts> for GregorianDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.day, parts.month, parts.year)
    }
}

impl From<GregorianDate> for DateParts {
    fn from(date: GregorianDate) -> Self {
        Self {
            day:   i32::from(date.day()),
            month: i32::from(date.month()),
            year:  date.year(),
        }
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso_parts(s)?;
        Self::new(day, month, year)
    }
}

/// Day of the week numbered the way the calendar views expect: Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday    = 0,
    Monday    = 1,
    Tuesday   = 2,
    Wednesday = 3,
    Thursday  = 4,
    Friday    = 5,
    Saturday  = 6,
}

impl Weekday {
    /// Returns the weekday number, Sunday = 0
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Arabic display name
    pub fn name(self) -> &'static str {
        weekday_name(i32::from(self.number()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(DateError::InvalidFormat(format!("weekday {value}"))),
        }
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which calendar a request's numbers are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[display(fmt = "hijri")]
    Hijri,
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl CalendarKind {
    #[inline]
    pub const fn is_hijri(self) -> bool {
        matches!(self, Self::Hijri)
    }
}

impl From<bool> for CalendarKind {
    fn from(is_hijri: bool) -> Self {
        if is_hijri { Self::Hijri } else { Self::Gregorian }
    }
}

impl FromStr for CalendarKind {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hijri" => Ok(Self::Hijri),
            "gregorian" => Ok(Self::Gregorian),
            _ => Err(DateError::InvalidCalendar(s.to_owned())),
        }
    }
}

// Helper functions

/// Length of a Hijri month under the fixed table: 30 for odd months, 29 for even.
/// Months outside `1..=12` get 30.
pub fn hijri_month_length(month: i32) -> u8 {
    table_lookup(&HIJRI_DAYS_IN_MONTH, month).unwrap_or(HIJRI_FALLBACK_DAYS)
}

/// Length of a Gregorian month ignoring leap years (February is 28).
/// Months outside `1..=12` get 31.
pub fn gregorian_month_length(month: i32) -> u8 {
    table_lookup(&GREGORIAN_DAYS_IN_MONTH, month).unwrap_or(GREGORIAN_FALLBACK_DAYS)
}

/// Leap-correct length of a Gregorian month, as `chrono` counts it.
/// Falls back to [`gregorian_month_length`] when the month is outside `chrono`'s range.
pub fn days_in_gregorian_month(year: i32, month: i32) -> u8 {
    let Ok(m) = u32::try_from(month) else {
        return gregorian_month_length(month);
    };
    let first = NaiveDate::from_ymd_opt(year, m, 1);
    let next = if m == 12 {
        year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, m + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => u8::try_from(next.signed_duration_since(first).num_days())
            .unwrap_or_else(|_| gregorian_month_length(month)),
        _ => gregorian_month_length(month),
    }
}

fn table_lookup(table: &[u8; 13], month: i32) -> Option<u8> {
    usize::try_from(month)
        .ok()
        .filter(|&m| m >= 1)
        .and_then(|m| table.get(m).copied())
}

/// Splits `YYYY-MM-DD` into numbers. A leading `-` belongs to the year.
fn parse_iso_parts(s: &str) -> Result<(i32, i32, i32), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::InvalidFormat("empty date string".to_owned()));
    }

    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
        )));
    };

    let number = |p: &str| {
        p.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))
    };
    let year = number(*year)?;
    Ok((if negative { -year } else { year }, number(*month)?, number(*day)?))
}
