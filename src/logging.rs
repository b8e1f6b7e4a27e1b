//! Diagnostic logging to stderr via `tracing`.
//!
//! Silent apart from warnings unless `-d` is given; `RUST_LOG` wins over the flag.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-d` repeat count.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,deepl_cli=debug",
        _ => "warn,deepl_cli=trace",
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
