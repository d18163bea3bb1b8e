//! Holds the non-leap day-of-year type and the glue for date structs that can be classified.

use jiff::{Zoned, civil};

use crate::{
    MONTH_LENGTHS, days_in_month,
    error::{Error, Result},
    season::{Classification, classify},
};

/// Ordinal day in a non-leap year (1..=365) where January 1 is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

impl DayOfYear {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(365);

    /// Wrap a raw ordinal if in 1..=365.
    pub fn new(day_of_year: u16) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&day_of_year) {
            return Err(Error::InvalidDayOfYear {
                day_of_year: day_of_year.into(),
            });
        }
        Ok(Self(day_of_year))
    }

    /// Count the days from January 1 up to and including the given date.
    ///
    /// Month is 1..=12 and day must fit that month in [`MONTH_LENGTHS`] (so February 29 fails).
    pub fn from_day_month(day: i32, month: i32) -> Result<Self> {
        let max_day = days_in_month(month).ok_or(Error::InvalidMonth { month })?;
        if !(1..=i32::from(max_day)).contains(&day) {
            return Err(Error::InvalidDay {
                day,
                month,
                max_day,
            });
        }

        // full months strictly before this one
        let prior_days: u16 = MONTH_LENGTHS[..month as usize - 1]
            .iter()
            .copied()
            .map(u16::from)
            .sum();
        Ok(Self(prior_days + day as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Return the `(month, day)` that lands on this ordinal.
    pub fn month_day(self) -> (u8, u8) {
        let mut rest = self.0;
        for (i, &len) in MONTH_LENGTHS.iter().enumerate() {
            let len = u16::from(len);
            if rest <= len {
                return (i as u8 + 1, rest as u8);
            }
            rest -= len;
        }
        unreachable!("day of year is always in 1..=365")
    }
}

impl std::fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DayOfYear> for u16 {
    fn from(value: DayOfYear) -> Self {
        value.0
    }
}

impl TryFrom<u16> for DayOfYear {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

/// Anything that can tell what day of what month it is.
///
/// Implementors get [`Self::to_day_of_year`] and [`Self::classify`] for free. Values are not checked
/// here so a leap day coming from a real calendar is rejected by the provided methods.
pub trait DayMonth {
    /// Day of the month (1..=31).
    fn day(&self) -> i32;

    /// Month of the year (1..=12).
    fn month(&self) -> i32;

    fn to_day_of_year(&self) -> Result<DayOfYear> {
        DayOfYear::from_day_month(self.day(), self.month())
    }

    fn classify(&self) -> Result<Classification> {
        classify(self.day(), self.month())
    }
}

/// A `(day, month)` pair in that order.
impl DayMonth for (i32, i32) {
    fn day(&self) -> i32 {
        self.0
    }

    fn month(&self) -> i32 {
        self.1
    }
}

impl DayMonth for civil::Date {
    fn day(&self) -> i32 {
        civil::Date::day(*self).into()
    }

    fn month(&self) -> i32 {
        civil::Date::month(*self).into()
    }
}

impl DayMonth for Zoned {
    fn day(&self) -> i32 {
        Zoned::day(self).into()
    }

    fn month(&self) -> i32 {
        Zoned::month(self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn test_new_bounds() {
        assert_eq!(DayOfYear::new(1).unwrap().get(), 1);
        assert_eq!(DayOfYear::new(365).unwrap().get(), 365);
        assert_eq!(
            DayOfYear::new(0).unwrap_err(),
            Error::InvalidDayOfYear { day_of_year: 0 }
        );
        assert_eq!(
            DayOfYear::new(366).unwrap_err(),
            Error::InvalidDayOfYear { day_of_year: 366 }
        );
    }

    #[test]
    fn test_from_day_month() {
        assert_eq!(DayOfYear::from_day_month(1, 1).unwrap().get(), 1);
        assert_eq!(DayOfYear::from_day_month(28, 2).unwrap().get(), 59);
        assert_eq!(DayOfYear::from_day_month(1, 3).unwrap().get(), 60);
        assert_eq!(DayOfYear::from_day_month(14, 8).unwrap().get(), 226);
        assert_eq!(DayOfYear::from_day_month(31, 12).unwrap().get(), 365);
    }

    #[test]
    fn test_from_day_month_invalid() {
        assert_eq!(
            DayOfYear::from_day_month(1, 0).unwrap_err(),
            Error::InvalidMonth { month: 0 }
        );
        assert_eq!(
            DayOfYear::from_day_month(1, 13).unwrap_err(),
            Error::InvalidMonth { month: 13 }
        );
        assert_eq!(
            DayOfYear::from_day_month(29, 2).unwrap_err(),
            Error::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            }
        );
        assert_eq!(
            DayOfYear::from_day_month(0, 5).unwrap_err(),
            Error::InvalidDay {
                day: 0,
                month: 5,
                max_day: 31
            }
        );
        assert_eq!(
            DayOfYear::from_day_month(31, 4).unwrap_err(),
            Error::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30
            }
        );
    }

    #[test]
    fn test_month_day_inverse() {
        assert_eq!(DayOfYear::new(1).unwrap().month_day(), (1, 1));
        assert_eq!(DayOfYear::new(59).unwrap().month_day(), (2, 28));
        assert_eq!(DayOfYear::new(60).unwrap().month_day(), (3, 1));
        assert_eq!(DayOfYear::new(226).unwrap().month_day(), (8, 14));
        assert_eq!(DayOfYear::new(365).unwrap().month_day(), (12, 31));
    }

    #[test]
    fn test_day_month_impls() {
        assert_eq!((14_i32, 8_i32).to_day_of_year().unwrap().get(), 226);
        assert_eq!(date(2025, 8, 14).to_day_of_year().unwrap().get(), 226);
        // leap years are not considered, only the month table
        assert_eq!(date(2024, 12, 31).to_day_of_year().unwrap().get(), 365);
        assert!(date(2024, 2, 29).to_day_of_year().is_err());

        let zoned = date(2025, 1, 1)
            .at(12, 0, 0, 0)
            .to_zoned(jiff::tz::TimeZone::UTC)
            .unwrap();
        assert_eq!(zoned.to_day_of_year().unwrap(), DayOfYear::MIN);
    }
}
