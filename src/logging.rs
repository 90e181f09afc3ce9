/// Tracing setup
///
/// Console output on stderr, filtered by `RUST_LOG` when set.
///
///   RUST_LOG=aa_questions_lib=debug aa-questions users   # one line per round trip

use crate::error::{QuestionsError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `debug` lowers the default level from `warn` to `debug`; an explicit
/// `RUST_LOG` always wins.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| QuestionsError::Config(format!("tracing already initialized: {}", err)))
}
