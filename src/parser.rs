//! Holds date parsers for arguments and input lines.

use jelal::{IYear, UMonth, UMonthDay};
use jiff::{Zoned, fmt::strtime::BrokenDownTime};

use crate::GREGORIAN_MONTHS;

/// Parse free-form dates (`"yesterday"`, `"2025-08-14"`, `"next friday"`) relative to `now`.
///
/// The timezone of `now` is kept on the result.
pub fn parse_datetime(s: &str, now: &Zoned) -> Result<Zoned, jiff::Error> {
    let tz = now.time_zone().clone();
    let parsed = parse_datetime::parse_datetime_at_date(now.clone(), s.trim())
        .or_else(|e| {
            tracing::debug!(input = s, error = %e, "relative parse failed, trying absolute");
            parse_datetime::parse_datetime(s.trim())
        })
        .map_err(|e| jiff::Error::from_args(format_args!("{}", e)))?;
    Ok(parsed.with_time_zone(tz))
}

/// Parse a Jalali date in "%Y/%m/%d" format.
pub fn parse_ymd_jalali(s: &str) -> Result<jelal::Date, jiff::Error> {
    let tm = BrokenDownTime::parse("%Y/%m/%d", s.trim())?;
    let missing = || jiff::Error::from_args(format_args!("expected a full %Y/%m/%d date"));
    let (y, m, d) = (
        tm.year().ok_or_else(missing)?,
        tm.month().ok_or_else(missing)?,
        tm.day().ok_or_else(missing)?,
    );
    Ok(jelal::Date::from((y as IYear, m as UMonth, d as UMonthDay)))
}

/// Index of the only entry starting with `key` regardless of ASCII casing.
///
/// An entry equal to the key is taken even if it is the prefix of another one.
fn unique_prefix_position(list: &[&str], key: &str) -> Option<usize> {
    if key.is_empty() {
        return None;
    }
    if let Some(i) = list.iter().position(|i| i.eq_ignore_ascii_case(key)) {
        return Some(i);
    }

    let mut found = None;
    for (i, value) in list.iter().enumerate() {
        let is_prefix = value
            .get(..key.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(key));
        if is_prefix {
            if found.is_some() {
                return None; // ambiguous ("ma", "ju")
            }
            found = Some(i);
        }
    }
    found
}

/// Parse from 1..=12 or a unique prefix of an English month name ("aug", "AUGUST").
pub fn parse_month(s: &str) -> Result<u8, &'static str> {
    let s = s.trim();
    if let Ok(month) = s.parse::<u8>() {
        return match month {
            1..=12 => Ok(month),
            _ => Err("month is from 1 to 12 when given as a number"),
        };
    }

    unique_prefix_position(&GREGORIAN_MONTHS, s)
        .map(|i| i as u8 + 1) // month is 1 based but index is 0 based
        .ok_or("invalid month name (\"august\", \"aug\" or number where January is 1, up to 12)")
}

/// Parse from 1..=31, whether the month has that day is left to the caller.
pub fn parse_day(s: &str) -> Result<u8, &'static str> {
    match s.trim().parse::<u8>() {
        Ok(day @ 1..=31) => Ok(day),
        Ok(_) => Err("day is from 1 to 31"),
        Err(_) => Err("day must be a number"),
    }
}

/// Parse a `DAY MONTH`, `DAY/MONTH` or `DAY-MONTH` line into `(day, month)`.
///
/// `/` and `-` only separate when they are the single separator of a lone word, so a sign or a
/// doubled separator ("-5 8", "14--8") leaves a field that fails to parse.
pub fn parse_day_month(s: &str) -> Result<(u8, u8), &'static str> {
    const EXPECTED: &str = "expected exactly a day and a month (\"14 8\", \"14/8\" or \"14 aug\")";

    let fields: Vec<&str> = s.split_whitespace().collect();
    let (day, month) = match fields.as_slice() {
        [day, month] => (*day, *month),
        [single] => single.split_once(['/', '-']).ok_or(EXPECTED)?,
        _ => return Err(EXPECTED),
    };

    Ok((parse_day(day)?, parse_month(month)?))
}
