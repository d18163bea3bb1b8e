use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, command};

use seasoncal::{clap_helper::StaticMap, convert::TemperatureUnit};

#[derive(Debug, PartialEq)]
pub struct Args {
    pub celsius: f64,
    /// Units to print in the order given.
    pub units: &'static [TemperatureUnit],
    pub debug: bool,
}

impl Args {
    pub const DEBUG_LONG: &str = "debug";
    pub const TO_LONG: &str = "to";
    pub const TO_DEFAULT: &str = "all";
    pub const TO_PAIRS: StaticMap<&'static [TemperatureUnit]> = StaticMap(&[
        (
            Self::TO_DEFAULT,
            &[TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin],
        ),
        ("fahrenheit", &[TemperatureUnit::Fahrenheit]),
        ("kelvin", &[TemperatureUnit::Kelvin]),
    ]);
    pub const CELSIUS_ID: &str = "celsius";

    pub fn args() -> [Arg; 3] {
        [
            Arg::new(Self::DEBUG_LONG)
                .long(Self::DEBUG_LONG)
                .help("enable debug logs in STDERR (`RUST_LOG` takes precedence)")
                .action(ArgAction::SetTrue),
            Arg::new(Self::TO_LONG)
                .long(Self::TO_LONG)
                .short('t')
                .value_name("UNIT")
                .overrides_with(Self::TO_LONG)
                .ignore_case(true)
                .value_parser(Self::TO_PAIRS)
                .help(format!(
                    "unit to convert to [default UNIT: {}]",
                    Self::TO_DEFAULT
                )),
            Arg::new(Self::CELSIUS_ID)
                .value_name("CELSIUS")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(|s: &str| -> Result<f64, String> {
                    let v: f64 = s.trim().parse().map_err(|_| format!("`{s}` is not a number"))?;
                    if v.is_finite() {
                        Ok(v)
                    } else {
                        Err("temperature must be a finite number".to_string())
                    }
                })
                .help("temperature in degrees Celsius"),
        ]
    }
}

impl CommandFactory for Args {
    fn command() -> Command {
        command!(/* with version, about and author */)
            .about("Convert a temperature from Celsius to Fahrenheit and Kelvin")
            .args(Self::args())
    }

    fn command_for_update() -> Command {
        Self::command()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            celsius: 0.0,
            units: Self::TO_PAIRS.get(Self::TO_DEFAULT).copied().unwrap_or(&[]),
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
        self.debug = self.debug || matches.get_flag(Self::DEBUG_LONG);

        if let Some(&units) = matches.get_one::<&'static [TemperatureUnit]>(Self::TO_LONG) {
            self.units = units;
        }

        if let Some(&celsius) = matches.get_one::<f64>(Self::CELSIUS_ID) {
            self.celsius = celsius;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_call(no_0_args: &[&str]) -> Result<Args, clap::Error> {
        let matches = Args::command()
            .no_binary_name(true)
            .try_get_matches_from(no_0_args)?;
        Args::from_arg_matches(&matches)
    }

    fn call(no_0_args: &[&str]) -> Args {
        try_call(no_0_args).unwrap()
    }

    #[test]
    fn test_cli_default_units() {
        assert_eq!(
            call(&["21.5"]),
            Args {
                celsius: 21.5,
                units: &[TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin],
                debug: false,
            }
        );
    }

    #[test]
    fn test_cli_negative() {
        assert_eq!(call(&["-40"]).celsius, -40.0);
        assert_eq!(call(&["--to", "kelvin", "-273.15"]).celsius, -273.15);
    }

    #[test]
    fn test_cli_to() {
        assert_eq!(
            call(&["--to", "Kelvin", "0"]).units,
            &[TemperatureUnit::Kelvin]
        );
        assert_eq!(
            call(&["-t", "kelvin", "-t", "fahrenheit", "0"]).units,
            &[TemperatureUnit::Fahrenheit]
        );
    }

    #[test]
    fn test_cli_invalid() {
        assert!(try_call(&[]).is_err());
        assert!(try_call(&["warm"]).is_err());
        assert!(try_call(&["inf"]).is_err());
        assert!(try_call(&["--to", "rankine", "0"]).is_err());
    }
}
