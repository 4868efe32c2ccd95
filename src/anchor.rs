use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_HIJRI_YEAR, MIN_DAY, MONTHS_IN_YEAR};
use crate::{DateError, GregorianDate, HijriDate, Weekday, hijri_month_length, prelude::*};

/// A single day known in both calendars. Every conversion is an offset from it.
///
/// Anchors are plain values: a host can load a recalibrated one from its own
/// configuration, bumping `revision` each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "r{revision}: {hijri} = {gregorian}")]
pub struct ReferenceAnchor {
    revision:  u16,
    hijri:     HijriDate,
    gregorian: GregorianDate,
}

/// A converted date together with the weekday it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Converted<D> {
    #[serde(flatten)]
    pub date:    D,
    #[serde(rename = "weekDay")]
    pub weekday: Weekday,
}

const ANCHOR_GREGORIAN_1446: NaiveDate = match NaiveDate::from_ymd_opt(2025, 5, 13) {
    Some(date) => date,
    None => panic!("anchor date out of range"),
};

impl ReferenceAnchor {
    /// 15 Dhu al-Qadah 1446 is 13 May 2025.
    pub const UMM_AL_QURA_1446: Self = Self {
        revision:  1,
        hijri:     HijriDate {
            year:  1446,
            month: 11,
            day:   15,
        },
        gregorian: GregorianDate::from_naive(ANCHOR_GREGORIAN_1446),
    };

    /// Pairs a Hijri day with the Gregorian day it is known to fall on
    pub const fn new(revision: u16, hijri: HijriDate, gregorian: GregorianDate) -> Self {
        Self {
            revision,
            hijri,
            gregorian,
        }
    }

    #[inline]
    pub const fn revision(&self) -> u16 {
        self.revision
    }

    #[inline]
    pub const fn hijri(&self) -> HijriDate {
        self.hijri
    }

    #[inline]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    /// Converts a Hijri day to Gregorian.
    ///
    /// Input is not validated: a month outside `1..=12` rolls into the neighbouring
    /// years and a day past the end of its month spills into the next month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is beyond what `chrono` can represent.
    pub fn hijri_to_gregorian(
        &self,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Converted<GregorianDate>, DateError> {
        let days_diff = hijri_day_number(day, month, year) - self.hijri_number();
        let date = self
            .gregorian
            .checked_add_days(days_diff)
            .ok_or(DateError::OutOfRange { days: days_diff })?;

        Ok(Converted {
            date,
            weekday: date.weekday(),
        })
    }

    /// Converts a real Gregorian day to Hijri.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the triple is not a real day.
    pub fn gregorian_to_hijri(
        &self,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Converted<HijriDate>, DateError> {
        self.to_hijri(GregorianDate::new(day, month, year)?)
    }

    /// Converts an already validated Gregorian date to Hijri.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` only for years that do not fit in `i32`,
    /// which `chrono` dates never reach.
    pub fn to_hijri(&self, date: GregorianDate) -> Result<Converted<HijriDate>, DateError> {
        let days_diff = date.days_since(self.gregorian);
        let number = self.hijri_number() + days_diff;
        tracing::trace!(%date, days_diff, "normalizing hijri day number");

        Ok(Converted {
            date:    hijri_from_day_number(number).ok_or(DateError::OutOfRange { days: days_diff })?,
            weekday: date.weekday(),
        })
    }

    fn hijri_number(&self) -> i64 {
        hijri_day_number(
            i32::from(self.hijri.day),
            i32::from(self.hijri.month),
            self.hijri.year,
        )
    }
}

impl Default for ReferenceAnchor {
    fn default() -> Self {
        Self::UMM_AL_QURA_1446
    }
}

/// Days elapsed in a Hijri year before the first of `month` (`1..=12`)
fn days_before_month(month: i64) -> i64 {
    (1..month)
        .map(|m| i64::from(hijri_month_length(i32::try_from(m).unwrap_or(0))))
        .sum()
}

/// Position of a Hijri day on a continuous count where 1/1/0 is day 0.
/// Months outside `1..=12` are folded into the year first.
fn hijri_day_number(day: i32, month: i32, year: i32) -> i64 {
    let months = i64::from(MONTHS_IN_YEAR);
    let index = i64::from(year) * months + i64::from(month) - 1;
    let (year, month) = (index.div_euclid(months), index.rem_euclid(months) + 1);

    year * DAYS_IN_HIJRI_YEAR + days_before_month(month) + i64::from(day) - i64::from(MIN_DAY)
}

fn hijri_from_day_number(number: i64) -> Option<HijriDate> {
    let year = i32::try_from(number.div_euclid(DAYS_IN_HIJRI_YEAR)).ok()?;
    let mut remaining = number.rem_euclid(DAYS_IN_HIJRI_YEAR);

    let mut month = 1;
    loop {
        let length = i64::from(hijri_month_length(month));
        if remaining < length {
            break;
        }
        remaining -= length;
        month += 1;
    }

    HijriDate::new(i32::try_from(remaining).ok()? + i32::from(MIN_DAY), month, year).ok()
}
