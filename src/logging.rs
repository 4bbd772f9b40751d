//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber. `RUST_LOG` is honoured; the crate's own
/// default level is `info`, or `debug` when `verbose` is set.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let directive = format!("nba_compare={level}");

    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
