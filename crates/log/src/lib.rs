use tracing_subscriber::{prelude::*, EnvFilter, Registry};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber has already been set.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let subscriber = Registry::default();

    let fmt_filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_filter(fmt_filter_layer);

    subscriber.with(fmt_layer).try_init()
}

/// Like [`try_init`], but leaves an existing global subscriber in place.
pub fn init() {
    if try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
