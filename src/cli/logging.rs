//! Logging initialization

use std::io::IsTerminal;

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence. Otherwise `--debug` selects `debug` for this
/// crate and everything else stays at `warn`, so normal command output on
/// stdout is not interleaved with log lines.
pub fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,hobbylist=debug" } else { "warn" };

    let result = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
