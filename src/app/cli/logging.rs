use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "SCENARIST_LOG";

/// Install the stderr subscriber. `--verbose` wins over `SCENARIST_LOG`.
pub(super) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scenarist=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
