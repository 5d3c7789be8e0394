//! Diagnostic logging through `tracing`.
//!
//! User-facing output goes through `ui::messages`; this is the developer
//! side. `RUST_LOG` wins over the `-v` count when it is set.
//!
//! - `warn`: default, recoverable oddities in the roster text
//! - `info`: pipeline counts (`-v`)
//! - `debug`: per-entry merge and classification decisions (`-vv`)
//! - `trace`: per-line parsing and grouping (`-vvv`)

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Default filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "crewsheet=warn",
        1 => "crewsheet=info",
        2 => "crewsheet=debug",
        _ => "crewsheet=trace",
    }
}

/// Install the global subscriber writing compact lines to stderr.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn init_logging(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}
