use tracing_subscriber::EnvFilter;

use crate::consts::LOG_ENV;

/// Install the stderr subscriber. `CODECLOCK_LOG` overrides the level picked by `--debug`.
pub(crate) fn init(debug: bool) {
    let default = if debug { "codeclock=debug" } else { "codeclock=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
