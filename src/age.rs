use serde::{Deserialize, Serialize};

use crate::consts::{LAST_MONTH, MONTHS_IN_YEAR};
use crate::{
    DateError, GregorianDate, HijriDate, UmmAlQura, clock::Clock, days_in_gregorian_month,
    hijri_month_length, prelude::*,
};

/// Elapsed whole years, months and days between two dates of one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[display(fmt = "{years}y {months}m {days}d")]
pub struct Age {
    pub years:  i32,
    pub months: i32,
    pub days:   i32,
}

/// Age in both calendars plus the raw day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeReport {
    pub hijri:      Age,
    pub gregorian:  Age,
    pub total_days: i64,
}

/// `(year, month, day)` with the month in `1..=12`
type Parts = (i32, i32, i32);

impl Age {
    /// Hijri age, borrowing Hijri month lengths from the table
    ///
    /// # Errors
    /// Returns `DateError::BirthAfterDate` if `from` is after `to`.
    pub fn between_hijri(from: HijriDate, to: HijriDate) -> Result<Self, DateError> {
        ensure_ordered(from, to)?;
        Ok(subtract(hijri_parts(from), hijri_parts(to), |_, month| {
            hijri_month_length(month)
        }))
    }

    /// Gregorian age, borrowing leap-correct month lengths
    ///
    /// # Errors
    /// Returns `DateError::BirthAfterDate` if `from` is after `to`.
    pub fn between_gregorian(from: GregorianDate, to: GregorianDate) -> Result<Self, DateError> {
        ensure_ordered(from, to)?;
        Ok(subtract(
            gregorian_parts(from),
            gregorian_parts(to),
            days_in_gregorian_month,
        ))
    }
}

impl<C> UmmAlQura<C> {
    /// Age of someone born on `birth`, measured on `on`
    ///
    /// # Errors
    /// Returns `DateError::BirthAfterDate` if `birth` is after `on`.
    pub fn age_on(&self, birth: GregorianDate, on: GregorianDate) -> Result<AgeReport, DateError> {
        ensure_ordered(birth, on)?;
        let hijri_birth = self.anchor().to_hijri(birth)?.date;
        let hijri_on = self.anchor().to_hijri(on)?.date;

        Ok(AgeReport {
            hijri:      Age::between_hijri(hijri_birth, hijri_on)?,
            gregorian:  Age::between_gregorian(birth, on)?,
            total_days: on.days_since(birth),
        })
    }
}

impl<C: Clock> UmmAlQura<C> {
    /// Age of someone born on `birth`, measured today
    ///
    /// # Errors
    /// Returns `DateError::BirthAfterDate` for a birth date in the future.
    pub fn age(&self, birth: GregorianDate) -> Result<AgeReport, DateError> {
        self.age_on(birth, GregorianDate::from_naive(self.clock().today()))
    }
}

fn ensure_ordered<D: PartialOrd + std::fmt::Display>(birth: D, on: D) -> Result<(), DateError> {
    if birth > on {
        return Err(DateError::BirthAfterDate {
            birth: birth.to_string(),
            on:    on.to_string(),
        });
    }
    Ok(())
}

fn hijri_parts(date: HijriDate) -> Parts {
    (date.year(), i32::from(date.month()), i32::from(date.day()))
}

fn gregorian_parts(date: GregorianDate) -> Parts {
    (date.year(), i32::from(date.month()), i32::from(date.day()))
}

/// Field-wise `to - from`. A day shortfall borrows the months preceding `to`'s
/// month, one at a time; a month shortfall borrows a year.
fn subtract(from: Parts, to: Parts, month_length: impl Fn(i32, i32) -> u8) -> Age {
    let months_in_year = i32::from(MONTHS_IN_YEAR);
    let mut years = to.0 - from.0;
    let mut months = to.1 - from.1;
    let mut days = to.2 - from.2;

    let (mut borrow_year, mut borrow_month) = (to.0, to.1);
    while days < 0 {
        if borrow_month == 1 {
            borrow_year -= 1;
            borrow_month = i32::from(LAST_MONTH);
        } else {
            borrow_month -= 1;
        }
        days += i32::from(month_length(borrow_year, borrow_month));
        months -= 1;
    }

    while months < 0 {
        years -= 1;
        months += months_in_year;
    }

    Age {
        years,
        months,
        days,
    }
}
