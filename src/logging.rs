//! Tracing setup.

/// Initializes the global tracing subscriber. `verbose` selects `debug`
/// over `info` as the default filter, overridable via `RUST_LOG`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();
}
