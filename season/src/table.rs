//! Lays out the month table of `--table`.
//!
//! ```text
//! Month         Days  Seasons
//! January       1-31  Summer
//! February     32-59  Summer
//! March        60-90  Summer, Autumn
//! ```

use seasoncal::{
    Result,
    season::{month_span, seasons_in_month},
};

use crate::string::{ansi_width, pad_end, pad_start, season_label};

const GAP: &str = "  ";
const HEADER: [&str; 3] = ["Month", "Days", "Seasons"];

/// One month of the table, already formatted.
struct Row {
    name: &'static str,
    days: String,
    seasons: String,
}

fn rows(abbreviate: bool) -> Result<Vec<Row>> {
    (1..=12)
        .map(|month| -> Result<Row> {
            let (first, last) = month_span(month)?;
            let seasons = seasons_in_month(month)?
                .into_iter()
                .map(|i| season_label(i).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Ok(Row {
                name: if abbreviate {
                    seasoncal::month_name_abb(month)
                } else {
                    seasoncal::month_name(month)
                },
                days: format!("{first}-{last}"),
                seasons,
            })
        })
        .collect()
}

/// Lines of the table, with abbreviated month names if the full table is wider than `width`.
pub fn render(width: usize) -> Result<Vec<String>> {
    let full = rows(false)?;
    let full_width = table_width(&full);
    let rows = if full_width > width {
        tracing::debug!(width, full_width, "abbreviating month names");
        rows(true)?
    } else {
        full
    };

    let name_width = column_width(HEADER[0], rows.iter().map(|i| i.name));
    let days_width = column_width(HEADER[1], rows.iter().map(|i| i.days.as_str()));

    let line = |name: &str, days: &str, seasons: &str| {
        [pad_end(name, name_width), pad_start(days, days_width), seasons.to_owned()].join(GAP)
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(line(HEADER[0], HEADER[1], HEADER[2]));
    lines.extend(rows.iter().map(|i| line(i.name, &i.days, &i.seasons)));
    Ok(lines)
}

/// Print [`render`] for the width of the terminal (80 if unknown).
pub fn print() -> Result<()> {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or(80) as usize;
    for line in render(width)? {
        println!("{}", line);
    }
    Ok(())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(ansi_width).fold(ansi_width(header), usize::max)
}

fn table_width(rows: &[Row]) -> usize {
    column_width(HEADER[0], rows.iter().map(|i| i.name))
        + column_width(HEADER[1], rows.iter().map(|i| i.days.as_str()))
        + column_width(HEADER[2], rows.iter().map(|i| i.seasons.as_str()))
        + GAP.len() * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_render(width: usize) -> Vec<String> {
        colored::control::set_override(false);
        render(width).unwrap()
    }

    #[test]
    fn test_render_full() {
        let lines = plain_render(80);
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month         Days  Seasons");
        assert_eq!(lines[1], "January       1-31  Summer");
        assert_eq!(lines[3], "March        60-90  Summer, Autumn");
        assert_eq!(lines[9], "September  244-273  Winter, Spring");
        assert_eq!(lines[12], "December   335-365  Spring");
    }

    #[test]
    fn test_render_narrow_abbreviates() {
        let lines = plain_render(20);
        assert_eq!(lines[0], "Month     Days  Seasons");
        assert_eq!(lines[8], "Aug    213-243  Winter");
    }
}
