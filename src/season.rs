//! Holds the season labels and the day-of-year classification.
//!
//! The ranges are fixed and do not follow any hemisphere:
//!
//! | day of year | season |
//! |-------------|--------|
//! | 1..=79      | Summer |
//! | 80..=171    | Autumn |
//! | 172..=262   | Winter |
//! | 263..=365   | Spring |

use std::fmt::{self, Display};

use crate::{
    date::DayOfYear,
    days_in_month,
    error::{Error, Result},
};

/// One of the four labels a day of the year can get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

/// Exclusive upper bounds checked in order, first match wins. Anything past the last is
/// [`Season::Spring`].
// Do NOT reorder or "fix" these, the labels are kept exactly as they were given.
const SEASON_TABLE: [(u16, Season); 3] = [
    (80, Season::Summer),
    (172, Season::Autumn),
    (263, Season::Winter),
];

impl Season {
    /// In the order they appear in a year.
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Spring,
    ];

    /// Which season the given day falls in.
    pub fn of(day_of_year: DayOfYear) -> Self {
        let day = day_of_year.get();
        SEASON_TABLE
            .iter()
            .find(|(end, _)| day < *end)
            .map_or(Season::Spring, |(_, season)| *season)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

/// The result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub day_of_year: DayOfYear,
    pub season: Season,
}

impl From<DayOfYear> for Classification {
    fn from(day_of_year: DayOfYear) -> Self {
        Self {
            day_of_year,
            season: Season::of(day_of_year),
        }
    }
}

/// Find the day-of-year of a `day` in `month` (1..=12) and the season it falls in.
///
/// Fails with an invalid input error instead of guessing if the date does not exist in a non-leap
/// year.
pub fn classify(day: i32, month: i32) -> Result<Classification> {
    let classification = Classification::from(DayOfYear::from_day_month(day, month)?);
    tracing::trace!(
        day,
        month,
        day_of_year = classification.day_of_year.get(),
        season = %classification.season,
        "classified"
    );
    Ok(classification)
}

/// First and last day-of-year of the month (1..=12).
pub fn month_span(month: i32) -> Result<(DayOfYear, DayOfYear)> {
    let last_day = days_in_month(month).ok_or(Error::InvalidMonth { month })?;
    Ok((
        DayOfYear::from_day_month(1, month)?,
        DayOfYear::from_day_month(last_day.into(), month)?,
    ))
}

/// Seasons that at least one day of the month (1..=12) falls in, in order of appearance.
pub fn seasons_in_month(month: i32) -> Result<Vec<Season>> {
    let (first, last) = month_span(month)?;
    let mut seasons = Vec::with_capacity(2);
    for day in first.get()..=last.get() {
        // cannot fail, the range comes from valid ordinals
        let season = Season::of(DayOfYear::new(day)?);
        if seasons.last() != Some(&season) {
            seasons.push(season);
        }
    }
    Ok(seasons)
}
