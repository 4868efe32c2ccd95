//! Arabic display labels. Out-of-range indices yield `""`.

use crate::consts::{GREGORIAN_MONTH_NAMES, HIJRI_MONTH_NAMES, WEEKDAY_NAMES};

/// Name of Hijri month `1..=12`
pub fn hijri_month_name(month: i32) -> &'static str {
    one_based(&HIJRI_MONTH_NAMES, month)
}

/// Name of Gregorian month `1..=12`
pub fn gregorian_month_name(month: i32) -> &'static str {
    one_based(&GREGORIAN_MONTH_NAMES, month)
}

/// Name of weekday `0..=6`, Sunday first
pub fn weekday_name(weekday: i32) -> &'static str {
    usize::try_from(weekday)
        .ok()
        .and_then(|i| WEEKDAY_NAMES.get(i))
        .copied()
        .unwrap_or_default()
}

fn one_based(table: &[&'static str], index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or_default()
}
