//! Holds a `temp` program converting a temperature in Celsius to other units.

use seasoncal::{
    clap_helper::Parse,
    convert::{Celsius, TemperatureUnit},
    logging,
};

mod arg_parser;

use arg_parser::Args;

fn main() {
    let config = Args::parse();

    logging::init(config.debug);
    tracing::debug!(celsius = config.celsius, units = ?config.units, "converting");

    for line in describe(Celsius(config.celsius), config.units) {
        println!("{}", line);
    }
}

/// One line per unit, like `20 °C to fahrenheit is 68 °F`.
fn describe(celsius: Celsius, units: &[TemperatureUnit]) -> Vec<String> {
    units
        .iter()
        .map(|unit| {
            format!(
                "{} {} to {} is {} {}",
                celsius.0,
                TemperatureUnit::Celsius.symbol(),
                unit,
                round(celsius.to(*unit)),
                unit.symbol(),
            )
        })
        .collect()
}

/// Drop floating point noise (`293.15000000000003`) from printed values.
///
/// Values too large to scale are already past any fractional noise and kept as is.
fn round(v: f64) -> f64 {
    let scaled = v * 1e6;
    if scaled.is_finite() {
        scaled.round() / 1e6
    } else {
        v
    }
}
