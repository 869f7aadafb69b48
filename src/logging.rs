use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CONTEST_GRAPHS_LOG";

/// Installs the stderr subscriber. `--quiet` wins over `--verbose`; without
/// either flag the level comes from `CONTEST_GRAPHS_LOG`, else `warn`.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
