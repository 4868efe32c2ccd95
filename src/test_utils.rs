//! Fixture constructors for unit tests.

use chrono::NaiveDate;

use crate::{FixedClock, GregorianDate, HijriDate, UmmAlQura};

pub fn hijri(day: i32, month: i32, year: i32) -> HijriDate {
    HijriDate::new(day, month, year).expect("valid hijri fixture")
}

pub fn gregorian(day: i32, month: i32, year: i32) -> GregorianDate {
    GregorianDate::new(day, month, year).expect("valid gregorian fixture")
}

/// Engine on the default anchor whose clock is pinned to `year-month-day`
pub fn engine_at(year: i32, month: u32, day: u32) -> UmmAlQura<FixedClock> {
    let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid clock fixture");
    UmmAlQura::with_clock(FixedClock::new(today))
}
