use std::{convert::Infallible, path::PathBuf, str::FromStr};

use clap::{
    Arg, ArgAction, ArgGroup, ArgMatches, Command, CommandFactory, FromArgMatches, command,
    error::ErrorKind,
};
use jiff::{Zoned, civil, tz::TimeZone};

use seasoncal::{
    clap_helper::{CommandFactoryExt, StaticMap},
    parser::{parse_datetime, parse_day, parse_month, parse_ymd_jalali},
};

#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const PARSER_DEFAULT: &'static str = "auto";

    pub const PARSER_MAP: StaticMap<&'static Self> = StaticMap(&[
        (Self::PARSER_DEFAULT, &Self::Auto),
        ("always", &Self::Always),
        ("never", &Self::Never),
    ]);

    /// Make `colored` follow this mode for the rest of the program.
    pub fn apply(&self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => colored::control::unset_override(),
        }
    }
}

/// Provides lines each having a `DAY MONTH` to classify.
#[derive(Debug, Clone, PartialEq)]
pub enum Reader {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, PartialEq)]
pub enum When {
    /// Today in the configured timezone, resolved as late as possible.
    Today,
    /// A day and a month given as positionals.
    Given { day: u8, month: u8 },
    /// A full date from `--date` or `--jalali-date` (year is ignored).
    Date(civil::Date),
    /// One date per line of a file or STDIN.
    Reader(Reader),
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub when: When,
    pub timezone: TimeZone,
    pub color: ColorMode,
    /// Print the month table instead of a single date.
    pub table: bool,
    pub debug: bool,
}

impl Args {
    pub const DEBUG_LONG: &str = "debug";
    pub const UTC_LONG: &str = "utc";
    pub const DATE_LONG: &str = "date";
    pub const JALALI_DATE_LONG: &str = "jalali-date";
    pub const FILE_LONG: &str = "file";
    pub const TABLE_LONG: &str = "table";
    pub const COLOR_LONG: &str = "color";
    pub const DAY_ID: &str = "day";
    pub const MONTH_ID: &str = "month";

    pub const DATE_SETTERS_GROUP: &str = "whens";
    pub const DATE_SETTERS_ARGS: &[&str] = &[
        Self::DATE_LONG,
        Self::JALALI_DATE_LONG,
        Self::FILE_LONG,
        Self::DAY_ID,
    ];

    pub fn groups() -> [ArgGroup; 1] {
        [ArgGroup::new(Self::DATE_SETTERS_GROUP)
            .multiple(false)
            .args(Self::DATE_SETTERS_ARGS)]
    }

    pub fn args() -> [Arg; 9] {
        [
            Arg::new(Self::DEBUG_LONG)
                .long(Self::DEBUG_LONG)
                .help("enable debug logs in STDERR (`RUST_LOG` takes precedence)")
                .action(ArgAction::SetTrue),
            Arg::new(Self::UTC_LONG)
                .long(Self::UTC_LONG)
                .short('u')
                .visible_alias("universal")
                .help("as if timezone is Coordinated Universal Time (UTC) when resolving dates")
                .action(ArgAction::SetTrue),
            Arg::new(Self::DATE_LONG)
                .long(Self::DATE_LONG)
                .short('d')
                .value_name("STRING")
                .overrides_with(Self::DATE_LONG)
                .help("classify the given date (\"2025-08-14\", \"yesterday\", \"next friday\")"),
            Arg::new(Self::JALALI_DATE_LONG)
                .long(Self::JALALI_DATE_LONG)
                .short('J')
                .value_name("%Y/%m/%d")
                .help("classify the Gregorian day of the given Jalali date"),
            Arg::new(Self::FILE_LONG)
                .long(Self::FILE_LONG)
                .short('f')
                .help("read a file or STDIN for `DAY MONTH` lines (use '-' for STDIN)")
                .value_parser(|s: &str| -> Result<Reader, Infallible> {
                    Ok(if s == "-" {
                        Reader::Stdin
                    } else {
                        Reader::File(PathBuf::from_str(s)?)
                    })
                }),
            Arg::new(Self::TABLE_LONG)
                .long(Self::TABLE_LONG)
                .short('t')
                .conflicts_with(Self::DATE_SETTERS_GROUP)
                .help("print every month with its days of the year and seasons")
                .action(ArgAction::SetTrue),
            Arg::new(Self::COLOR_LONG)
                .long(Self::COLOR_LONG)
                .overrides_with(Self::COLOR_LONG)
                .num_args(0..=1) // if not given don't push the default
                .default_missing_value(ColorMode::PARSER_DEFAULT)
                .value_parser(ColorMode::PARSER_MAP)
                .ignore_case(true)
                .help("set coloring behavior"),
            Arg::new(Self::DAY_ID)
                .value_name("DAY")
                .requires(Self::MONTH_ID)
                .value_parser(parse_day)
                .help("day of the month (1..=31)"),
            Arg::new(Self::MONTH_ID)
                .value_name("MONTH")
                .value_parser(parse_month)
                .help("month as a number (1..=12) or name (\"august\", \"aug\")"),
        ]
    }
}

impl CommandFactory for Args {
    fn command() -> Command {
        command!(/* with version, about and author */)
            .about("Print the day of the year of a date and the season it falls in")
            .after_help(
                "Days are counted on a non-leap year so February 29 is rejected.\n\
                 Seasons: Summer until day 79, Autumn until 171, Winter until 262, Spring after.",
            )
            .args(Self::args())
            .groups(Self::groups())
    }

    fn command_for_update() -> Command {
        Self::command()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            when: When::Today,
            timezone: TimeZone::system(),
            color: ColorMode::Auto,
            table: false,
            debug: false,
        }
    }
}

impl FromArgMatches for Args {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut v = Self::default();
        v.update_from_arg_matches(matches)?;
        Ok(v)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        if matches.get_flag(Self::UTC_LONG) {
            self.timezone = TimeZone::UTC;
        }

        self.debug = self.debug || matches.get_flag(Self::DEBUG_LONG);
        self.table = self.table || matches.get_flag(Self::TABLE_LONG);

        if let Some(&color) = matches.get_one::<&ColorMode>(Self::COLOR_LONG) {
            self.color = color.clone();
        }

        // DATE_SETTERS_ARGS (the group lets one through at most)
        if let Some(v) = matches.get_one::<String>(Self::DATE_LONG) {
            let now = Zoned::now().with_time_zone(self.timezone.clone());
            self.when = match parse_datetime(v, &now) {
                Ok(v) => When::Date(v.date()),
                Err(e) => return Err(Self::error(ErrorKind::InvalidValue, e)),
            };
        } else if let Some(v) = matches.get_one::<String>(Self::JALALI_DATE_LONG) {
            self.when = match parse_ymd_jalali(v).and_then(|i| i.try_into()) {
                Ok(v) => When::Date(v),
                Err(e) => return Err(Self::error(ErrorKind::InvalidValue, e)),
            };
        } else if let Some(v) = matches.get_one::<Reader>(Self::FILE_LONG) {
            self.when = When::Reader(v.clone());
        } else if let (Some(&day), Some(&month)) = (
            matches.get_one::<u8>(Self::DAY_ID),
            matches.get_one::<u8>(Self::MONTH_ID),
        ) {
            self.when = When::Given { day, month };
        }

        Ok(())
    }
}
