//! Logging configuration and initialization
//!
//! The library only emits `tracing` events; whoever installs the subscriber
//! decides where they go. The binary installs a global `fmt` subscriber here,
//! tests install a scoped one with `tracing::subscriber::with_default`.

use tracing::{debug, trace};

/// Env-filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber for the binary.
///
/// `RUST_LOG` is not consulted; the verbosity flag alone selects the level.
pub fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(log_level(verbose))
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(verbose >= 3)
        .with_line_number(verbose >= 3)
        .init();

    debug!("mlproject started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
