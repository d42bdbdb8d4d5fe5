/// All domain errors for Callwatch.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum CallwatchError {
    #[error(
        "Invalid call spec: '{spec}'\n\n  \
         Expected 'save:<id>' or 'get:<id>' with a numeric id.\n  \
         Examples: save:1  get:42"
    )]
    InvalidCallSpec { spec: String },

    #[error(
        "Unknown backend '{name}'\n\n  \
         Available backends: {available}\n  \
         Pick one with --backend, or set default_backend in callwatch.toml."
    )]
    UnknownBackend { name: String, available: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Call log error: {detail}")]
    LogError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CallwatchError>;
