//! Log output initialisation for the command-line binary

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use env_logger::Env;

/// Filter applied when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global logger
///
/// `RUST_LOG` takes precedence over the default filter. Returns `false` if a
/// logger was already installed.
pub fn init(quiet: bool) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(quiet)))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
}
