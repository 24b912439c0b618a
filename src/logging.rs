//! Diagnostic logging for the planner binaries.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once.
//!
//! - **WARN**: unknown exclusions, fallback to the built-in catalog
//! - **INFO**: catalog loading, solve start/end
//! - **DEBUG**: eligibility filtering, per-item quantities
//! - **TRACE**: solver progress every few hundred iterations

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the verbosity.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init(verbosity: u8) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
