//! Holds the shared `tracing` setup of the binaries.

use tracing_subscriber::EnvFilter;

/// Every crate target of this workspace that should receive log output.
const CRATE_TARGETS: &[&str] = &["seasoncal", "seasoncal_season", "seasoncal_temp"];

/// Start logging to STDERR.
///
/// Without `debug` only warnings are shown, with it everything up to `debug`. `RUST_LOG` overrides
/// both if set.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
