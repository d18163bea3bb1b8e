//! Holds the error type of this crate.

/// The default result of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors given by the day-of-year and season functions.
///
/// Every variant is a caller error (invalid input); no computation is attempted once one is
/// detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Month is not in 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: i32 },
    /// Day is not in the range of the given month.
    #[error("invalid day: {day} for month {month} (must be 1..={max_day})")]
    InvalidDay { day: i32, month: i32, max_day: u8 },
    /// Day-of-year is not in 1..=365.
    #[error("invalid day of year: {day_of_year} (must be 1..=365)")]
    InvalidDayOfYear { day_of_year: i64 },
}

impl Error {
    /// Whether this is rejected input rather than a failed computation (as of now, all of them).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidMonth { .. } | Error::InvalidDay { .. } | Error::InvalidDayOfYear { .. }
        )
    }
}
