//! Log output for the numeral binary.
//!
//! Events go to stderr. The filter comes from `NUMERAL_LOG` (any
//! `EnvFilter` directive), falling back to `warn`, or `debug` when verbose.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "NUMERAL_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "numeral=debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "numeral=debug");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
    }
}
