use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::consts::MONTHS_IN_YEAR;
use crate::{
    CalendarKind, Converted, DateError, GregorianDate, HijriDate, ReferenceAnchor, Weekday,
    days_in_gregorian_month, gregorian_month_name, hijri_month_length, hijri_month_name,
};

/// One absolute day seen from both calendars, with its display labels.
///
/// Only built from a conversion, so both sides always name the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "CalendarDayRecord")]
pub struct CalendarDay {
    hijri:     HijriDate,
    gregorian: GregorianDate,
}

/// Flat wire shape of a [`CalendarDay`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDayRecord {
    hijri_day:            u8,
    hijri_month:          u8,
    hijri_year:           i32,
    gregorian_day:        u8,
    gregorian_month:      u8,
    gregorian_year:       i32,
    hijri_month_name:     &'static str,
    gregorian_month_name: &'static str,
    week_day:             Weekday,
    week_day_name:        &'static str,
}

impl From<CalendarDay> for CalendarDayRecord {
    fn from(day: CalendarDay) -> Self {
        Self {
            hijri_day:            day.hijri.day(),
            hijri_month:          day.hijri.month(),
            hijri_year:           day.hijri.year(),
            gregorian_day:        day.gregorian.day(),
            gregorian_month:      day.gregorian.month(),
            gregorian_year:       day.gregorian.year(),
            hijri_month_name:     day.hijri_month_name(),
            gregorian_month_name: day.gregorian_month_name(),
            week_day:             day.weekday(),
            week_day_name:        day.weekday_name(),
        }
    }
}

impl CalendarDay {
    const fn pair(hijri: HijriDate, gregorian: GregorianDate) -> Self {
        Self { hijri, gregorian }
    }

    #[inline]
    pub const fn hijri(&self) -> HijriDate {
        self.hijri
    }

    #[inline]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday()
    }

    pub fn hijri_month_name(&self) -> &'static str {
        hijri_month_name(i32::from(self.hijri.month()))
    }

    pub fn gregorian_month_name(&self) -> &'static str {
        gregorian_month_name(i32::from(self.gregorian.month()))
    }

    pub fn weekday_name(&self) -> &'static str {
        self.weekday().name()
    }
}

/// Every day of one month of either calendar, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    calendar:             CalendarKind,
    hijri_month:          u8,
    hijri_year:           i32,
    hijri_month_name:     &'static str,
    gregorian_month:      u8,
    gregorian_year:       i32,
    gregorian_month_name: &'static str,
    dates:                Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Labels come from the first day. For the requested calendar that is the
    /// requested month; for the other calendar it is only an approximation.
    fn from_days(calendar: CalendarKind, dates: Vec<CalendarDay>) -> Option<Self> {
        let first = *dates.first()?;
        Some(Self {
            calendar,
            hijri_month: first.hijri.month(),
            hijri_year: first.hijri.year(),
            hijri_month_name: first.hijri_month_name(),
            gregorian_month: first.gregorian.month(),
            gregorian_year: first.gregorian.year(),
            gregorian_month_name: first.gregorian_month_name(),
            dates,
        })
    }

    /// Calendar the month was requested in
    pub const fn calendar(&self) -> CalendarKind {
        self.calendar
    }

    pub const fn hijri_month(&self) -> u8 {
        self.hijri_month
    }

    pub const fn hijri_year(&self) -> i32 {
        self.hijri_year
    }

    pub const fn hijri_month_name(&self) -> &'static str {
        self.hijri_month_name
    }

    pub const fn gregorian_month(&self) -> u8 {
        self.gregorian_month
    }

    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }

    pub const fn gregorian_month_name(&self) -> &'static str {
        self.gregorian_month_name
    }

    pub fn dates(&self) -> &[CalendarDay] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl IntoIterator for CalendarMonth {
    type Item = CalendarDay;
    type IntoIter = std::vec::IntoIter<CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

/// The conversion engine: an immutable anchor plus a clock for "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UmmAlQura<C = SystemClock> {
    anchor: ReferenceAnchor,
    clock:  C,
}

impl UmmAlQura<SystemClock> {
    /// Default anchor, local wall clock
    pub const fn system() -> Self {
        Self::new(ReferenceAnchor::UMM_AL_QURA_1446, SystemClock)
    }
}

impl<C: Default> Default for UmmAlQura<C> {
    fn default() -> Self {
        Self {
            anchor: ReferenceAnchor::default(),
            clock:  C::default(),
        }
    }
}

impl<C> UmmAlQura<C> {
    pub const fn new(anchor: ReferenceAnchor, clock: C) -> Self {
        Self { anchor, clock }
    }

    /// Default anchor with the given clock
    pub const fn with_clock(clock: C) -> Self {
        Self::new(ReferenceAnchor::UMM_AL_QURA_1446, clock)
    }

    pub const fn anchor(&self) -> &ReferenceAnchor {
        &self.anchor
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// See [`ReferenceAnchor::hijri_to_gregorian`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the result is not representable.
    pub fn hijri_to_gregorian(
        &self,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Converted<GregorianDate>, DateError> {
        self.anchor.hijri_to_gregorian(day, month, year)
    }

    /// See [`ReferenceAnchor::gregorian_to_hijri`].
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the triple is not a real day.
    pub fn gregorian_to_hijri(
        &self,
        day: i32,
        month: i32,
        year: i32,
    ) -> Result<Converted<HijriDate>, DateError> {
        self.anchor.gregorian_to_hijri(day, month, year)
    }

    /// Full record for a Gregorian day
    ///
    /// # Errors
    /// Propagates conversion errors.
    pub fn day_of_gregorian(&self, date: GregorianDate) -> Result<CalendarDay, DateError> {
        let hijri = self.anchor.to_hijri(date)?;
        Ok(CalendarDay::pair(hijri.date, date))
    }

    /// Full record for a Hijri day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` when the Gregorian side is not representable.
    pub fn day_of_hijri(&self, date: HijriDate) -> Result<CalendarDay, DateError> {
        let gregorian = self.anchor.hijri_to_gregorian(
            i32::from(date.day()),
            i32::from(date.month()),
            date.year(),
        )?;
        Ok(CalendarDay::pair(date, gregorian.date))
    }

    /// Converts a date given in `from` and returns both sides.
    ///
    /// Hijri input must fit the month table; Gregorian input must be a real day.
    ///
    /// # Errors
    /// Returns the validation error of the source calendar, or a conversion error.
    pub fn convert(
        &self,
        year: i32,
        month: i32,
        day: i32,
        from: CalendarKind,
    ) -> Result<CalendarDay, DateError> {
        match from {
            CalendarKind::Hijri => self.day_of_hijri(HijriDate::new(day, month, year)?),
            CalendarKind::Gregorian => self.day_of_gregorian(GregorianDate::new(day, month, year)?),
        }
    }

    /// Every day of `month` in the chosen calendar.
    ///
    /// Hijri months follow the fixed table; Gregorian months use the
    /// leap-correct length.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside `1..=12`, or a
    /// conversion error for years beyond `chrono`'s range.
    pub fn generate_month(
        &self,
        year: i32,
        month: i32,
        calendar: impl Into<CalendarKind>,
    ) -> Result<CalendarMonth, DateError> {
        let calendar = calendar.into();
        if !(1..=i32::from(MONTHS_IN_YEAR)).contains(&month) {
            tracing::debug!(year, month, %calendar, "rejecting month outside table");
            return Err(DateError::InvalidMonth(month));
        }

        let length = match calendar {
            CalendarKind::Hijri => hijri_month_length(month),
            CalendarKind::Gregorian => days_in_gregorian_month(year, month),
        };
        tracing::debug!(year, month, %calendar, length, "generating month");

        let dates = (1..=i32::from(length))
            .map(|day| self.convert(year, month, day, calendar))
            .collect::<Result<Vec<_>, _>>()?;

        CalendarMonth::from_days(calendar, dates).ok_or(DateError::InvalidMonth(month))
    }
}

impl<C: Clock> UmmAlQura<C> {
    /// Today's date in both calendars, as reported by the clock
    ///
    /// # Errors
    /// Propagates conversion errors; with a real clock there are none.
    pub fn today(&self) -> Result<CalendarDay, DateError> {
        let date = GregorianDate::from_naive(self.clock.today());
        tracing::debug!(%date, "read clock");
        self.day_of_gregorian(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{engine_at, gregorian, hijri};

    #[test]
    fn test_today_at_anchor() {
        let engine = engine_at(2025, 5, 13);
        let today = engine.today().unwrap();

        assert_eq!(today.hijri(), hijri(15, 11, 1446));
        assert_eq!(today.gregorian(), gregorian(13, 5, 2025));
        assert_eq!(today.weekday(), Weekday::Tuesday);
        assert_eq!(today.hijri_month_name(), "ذو القعدة");
        assert_eq!(today.gregorian_month_name(), "مايو");
        assert_eq!(today.weekday_name(), "الثلاثاء");
    }

    #[test]
    fn test_today_follows_clock() {
        let engine = engine_at(2025, 3, 1);
        let today = engine.today().unwrap();
        assert_eq!(today.hijri(), hijri(1, 9, 1446));
        assert_eq!(today.weekday(), Weekday::Saturday);
        assert_eq!(today.hijri_month_name(), "رمضان");
    }

    #[test]
    fn test_generate_hijri_month_lengths() {
        let engine = engine_at(2025, 5, 13);
        for month in 1..=12 {
            let generated = engine.generate_month(1446, month, true).unwrap();
            assert_eq!(
                generated.len(),
                usize::from(hijri_month_length(month)),
                "Hijri month {month}"
            );
            assert_eq!(generated.hijri_month(), u8::try_from(month).unwrap());
            assert_eq!(generated.hijri_year(), 1446);
            assert_eq!(generated.calendar(), CalendarKind::Hijri);
        }
    }

    #[test]
    fn test_generate_ramadan_1446() {
        let engine = engine_at(2025, 5, 13);
        let ramadan = engine.generate_month(1446, 9, CalendarKind::Hijri).unwrap();

        assert_eq!(ramadan.len(), 30);
        assert_eq!(ramadan.hijri_month_name(), "رمضان");
        assert_eq!(ramadan.gregorian_month(), 3);
        assert_eq!(ramadan.gregorian_year(), 2025);
        assert_eq!(ramadan.gregorian_month_name(), "مارس");

        let first = ramadan.dates()[0];
        assert_eq!(first.gregorian(), gregorian(1, 3, 2025));
        let last = ramadan.dates()[29];
        assert_eq!(last.hijri(), hijri(30, 9, 1446));
        assert_eq!(last.gregorian(), gregorian(30, 3, 2025));
    }

    #[test]
    fn test_generate_gregorian_leap_february() {
        let engine = engine_at(2025, 5, 13);
        let february = engine.generate_month(2024, 2, CalendarKind::Gregorian).unwrap();

        assert_eq!(february.len(), 29);
        assert_eq!(february.gregorian_month(), 2);
        assert_eq!(february.gregorian_month_name(), "فبراير");
        assert_eq!(february.dates()[0].weekday(), Weekday::Thursday);
        assert_eq!(february.dates()[28].gregorian(), gregorian(29, 2, 2024));

        let february = engine.generate_month(2025, 2, false).unwrap();
        assert_eq!(february.len(), 28);
    }

    #[test]
    fn test_generate_gregorian_month_borrows_first_hijri_label() {
        let engine = engine_at(2025, 5, 13);
        let january = engine.generate_month(2025, 1, false).unwrap();

        // 1 January 2025 is 1 Rajab 1446
        assert_eq!(january.hijri_month(), 7);
        assert_eq!(january.hijri_year(), 1446);
        assert_eq!(january.hijri_month_name(), "رجب");
        // the month spans into Shaban
        assert_eq!(january.dates()[30].hijri().month(), 8);
    }

    #[test]
    fn test_generated_days_are_consecutive() {
        let engine = engine_at(2025, 5, 13);
        for calendar in [CalendarKind::Hijri, CalendarKind::Gregorian] {
            let year = if calendar.is_hijri() { 1446 } else { 2025 };
            let month = engine.generate_month(year, 12, calendar).unwrap();
            for pair in month.dates().windows(2) {
                assert_eq!(pair[1].gregorian().days_since(pair[0].gregorian()), 1);
            }
        }
    }

    #[test]
    fn test_generate_month_rejects_bad_month() {
        let engine = engine_at(2025, 5, 13);
        assert!(matches!(
            engine.generate_month(1446, 13, true),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            engine.generate_month(2025, 0, false),
            Err(DateError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_convert_both_directions() {
        let engine = engine_at(2025, 5, 13);

        let from_hijri = engine.convert(1447, 1, 1, CalendarKind::Hijri).unwrap();
        assert_eq!(from_hijri.gregorian(), gregorian(27, 6, 2025));
        assert_eq!(from_hijri.weekday(), Weekday::Friday);

        let from_gregorian = engine.convert(2025, 6, 27, CalendarKind::Gregorian).unwrap();
        assert_eq!(from_gregorian, from_hijri);
    }

    #[test]
    fn test_convert_validates_source_calendar() {
        let engine = engine_at(2025, 5, 13);
        assert!(matches!(
            engine.convert(1446, 2, 30, CalendarKind::Hijri),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            engine.convert(2025, 2, 29, CalendarKind::Gregorian),
            Err(DateError::InvalidGregorianDate { .. })
        ));
    }

    #[test]
    fn test_engine_conversions_delegate_to_anchor() {
        let engine = UmmAlQura::with_clock(crate::FixedClock::new(gregorian(1, 1, 2020).naive()));
        assert_eq!(engine.anchor(), &ReferenceAnchor::UMM_AL_QURA_1446);
        let g = engine.hijri_to_gregorian(15, 11, 1446).unwrap();
        assert_eq!(g.date, gregorian(13, 5, 2025));
        let h = engine.gregorian_to_hijri(13, 5, 2025).unwrap();
        assert_eq!(h.date, hijri(15, 11, 1446));
    }

    #[test]
    fn test_calendar_day_serializes_flat() {
        let engine = engine_at(2025, 5, 13);
        let today = engine.today().unwrap();
        let json = serde_json::to_value(today).unwrap();

        assert_eq!(json["hijriDay"], 15);
        assert_eq!(json["hijriMonth"], 11);
        assert_eq!(json["hijriYear"], 1446);
        assert_eq!(json["gregorianDay"], 13);
        assert_eq!(json["gregorianMonth"], 5);
        assert_eq!(json["gregorianYear"], 2025);
        assert_eq!(json["hijriMonthName"], "ذو القعدة");
        assert_eq!(json["gregorianMonthName"], "مايو");
        assert_eq!(json["weekDay"], 2);
        assert_eq!(json["weekDayName"], "الثلاثاء");
    }

    #[test]
    fn test_calendar_month_serializes_dates() {
        let engine = engine_at(2025, 5, 13);
        let month = engine.generate_month(1446, 2, true).unwrap();
        let json = serde_json::to_value(&month).unwrap();

        assert_eq!(json["calendar"], "hijri");
        assert_eq!(json["hijriMonth"], 2);
        assert_eq!(json["dates"].as_array().unwrap().len(), 29);
        assert_eq!(json["dates"][0]["hijriDay"], 1);
    }

    #[test]
    fn test_month_into_iter() {
        let engine = engine_at(2025, 5, 13);
        let days: Vec<u8> = engine
            .generate_month(1446, 1, true)
            .unwrap()
            .into_iter()
            .map(|d| d.hijri().day())
            .collect();
        assert_eq!(days, (1..=30).collect::<Vec<u8>>());
    }
}
