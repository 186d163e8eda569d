use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Drop output; used while a full-screen UI owns the terminal.
    Discard,
}

/// Installs the global subscriber. `--log` wins over `RUST_LOG`, which wins
/// over [`DEFAULT_FILTER`]. Calling it twice is harmless.
pub fn init(filter: Option<&str>, target: LogTarget) {
    let filter = match filter {
        Some(f) => EnvFilter::try_new(f).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
}
