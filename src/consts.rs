/// Number of months in both calendars
pub const MONTHS_IN_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Muharram / January
pub const FIRST_MONTH: u8 = 1;
/// Month number for Dhu al-Hijjah / December
pub const LAST_MONTH: u8 = 12;

/// Length of a Hijri year under the alternating table (6 * 30 + 6 * 29)
pub const DAYS_IN_HIJRI_YEAR: i64 = 354;

/// Length returned for a Hijri month outside the table
pub(crate) const HIJRI_FALLBACK_DAYS: u8 = 30;
/// Length returned for a Gregorian month outside the table
pub(crate) const GREGORIAN_FALLBACK_DAYS: u8 = 31;

/// Days in each Hijri month (index 0 is unused, months are 1-indexed).
/// Odd months have 30 days, even months 29. This is a fixed approximation,
/// not the observed Umm Al-Qura calendar.
pub const HIJRI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    30, // Muharram
    29, // Safar
    30, // Rabi al-Awwal
    29, // Rabi al-Akhir
    30, // Jumada al-Ula
    29, // Jumada al-Akhirah
    30, // Rajab
    29, // Shaban
    30, // Ramadan
    29, // Shawwal
    30, // Dhu al-Qadah
    29, // Dhu al-Hijjah
];

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed).
/// February shows 28 days (non-leap year default).
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Lowest Hijri year accepted for event dates (inclusive)
pub const MIN_EVENT_YEAR: i32 = 1400;
/// Highest Hijri year accepted for event dates (inclusive)
pub const MAX_EVENT_YEAR: i32 = 1500;

/// Hijri month names, index 0 = Muharram
pub(crate) const HIJRI_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Gregorian month names, index 0 = January
pub(crate) const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Weekday names, index 0 = Sunday
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "الأحد",
    "الإثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
