//! Common utilities for `seasoncal-season` and `seasoncal-temp`.
//!
//! Everything here works on a fixed non-leap year: February always has 28 days and the last
//! day-of-year is 365.
pub mod clap_helper;
pub mod convert;
pub mod date;
pub mod error;
pub mod logging;
pub mod parser;
pub mod season;

pub use date::{DayMonth, DayOfYear};
pub use error::{Error, Result};
pub use season::{Classification, Season, classify};

/// Days in each month of a non-leap year, January first.
pub const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian months in English.
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// [`GREGORIAN_MONTHS`] abbreviations to 3 letters.
pub const GREGORIAN_MONTHS_ABB: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Zero based index of a 1 based month, `None` when not in 1..=12.
fn month_index(month: i32) -> Option<usize> {
    match month {
        1..=12 => Some(month as usize - 1),
        _ => None,
    }
}

/// English name of the month (1..=12) or an empty string for anything else.
pub fn month_name(month: i32) -> &'static str {
    month_index(month).map_or("", |i| GREGORIAN_MONTHS[i])
}

/// Three letter form of [`month_name`], empty outside 1..=12.
pub fn month_name_abb(month: i32) -> &'static str {
    month_index(month).map_or("", |i| GREGORIAN_MONTHS_ABB[i])
}

/// How many days the month (1..=12) has in a non-leap year.
pub fn days_in_month(month: i32) -> Option<u8> {
    month_index(month).map(|i| MONTH_LENGTHS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(8), "August");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
        assert_eq!(month_name(-1), "");
        assert_eq!(month_name(i32::MIN), "");
        assert_eq!(month_name(i32::MAX), "");
        assert_eq!(month_name_abb(13), "");
    }

    #[test]
    fn test_abbreviations_are_prefixes() {
        for (full, abb) in GREGORIAN_MONTHS.iter().zip(GREGORIAN_MONTHS_ABB) {
            assert!(full.starts_with(abb), "{abb} is not a prefix of {full}");
        }
    }

    #[test]
    fn test_month_lengths_make_a_year() {
        let total: u16 = MONTH_LENGTHS.iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
        assert_eq!(days_in_month(2), Some(28));
        assert_eq!(days_in_month(0), None);
    }
}
