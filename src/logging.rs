//! Diagnostic logging setup
//!
//! Logs go to stderr through `tracing`; stdout carries only the status lines
//! and documents the commands produce. `RUST_LOG` overrides the level chosen
//! by `-v`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,skillpack=info",
        2 => "info,skillpack=debug",
        _ => "trace",
    }
}

/// Install the global subscriber; `quiet` disables logging entirely
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
