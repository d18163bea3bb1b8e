//! An additional helper module for working with terminal strings.

use colored::{ColoredString, Colorize};
use seasoncal::{Classification, Season, month_name};

/// Calculate the "width" so it corresponds to columns in terminal (escape codes are ignored).
pub fn ansi_width(s: &str) -> usize {
    ansi_width::ansi_width(s)
}

/// Append spaces to the end to fit the width, longer values are left alone.
pub fn pad_end(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(ansi_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// Prepend spaces to fit the width, longer values are left alone.
pub fn pad_start(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(ansi_width(s));
    format!("{}{}", " ".repeat(padding), s)
}

/// The label of the season in its own color (subject to [`colored::control`]).
pub fn season_label(season: Season) -> ColoredString {
    let label = season.label();
    match season {
        Season::Summer => label.yellow(),
        Season::Autumn => label.red(),
        Season::Winter => label.blue(),
        Season::Spring => label.green(),
    }
}

/// One line describing a classified date.
pub fn describe(day: i32, month: i32, classification: &Classification) -> String {
    format!(
        "{} {}: day {} of the year, {}",
        month_name(month),
        day,
        classification.day_of_year,
        season_label(classification.season),
    )
}
