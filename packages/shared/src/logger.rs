//! Logger setup shared by Heya binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `bin_name` and its library crate log at
/// `default_level` and everything else at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // A second initialization (e.g. from tests) is ignored
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logger initialized for {}", bin_name);
    }
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("warn,{crate_name}={default_level},tower_http={default_level}")
}
