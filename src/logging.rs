//! Tracing setup
//!
//! Logs go to stderr so they never interleave with tables or CSV written to
//! stdout. `RUST_LOG` overrides the default directive.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Directive used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "gastos=warn";

/// Directive used with `--verbose`
pub const VERBOSE_DIRECTIVE: &str = "gastos=debug";

/// Initializes the global tracing subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let directive = if verbose {
            VERBOSE_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

        // try_init: a test harness may already have installed a subscriber
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
