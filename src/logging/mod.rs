//! Log forwarding for weatherkit
//!
//! Debug and error messages go to the `tracing` facade under the fixed
//! target [`TAG`]. Whatever subscriber the host installs decides where they
//! end up; [`init`] installs a stderr `fmt` subscriber for the CLI.

use crate::config::LoggingConfig;
use std::error::Error;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Target attached to every forwarded record
pub const TAG: &str = "weatherkit";

/// Renders an error followed by each of its sources, separated by `": "`
pub struct ErrorChain<'a>(pub &'a (dyn Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

/// Forwards a debug message. A missing message is logged as empty.
pub fn log_debug<'a>(message: impl Into<Option<&'a str>>) {
    let message = message.into().unwrap_or_default();
    tracing::debug!(target: TAG, "{}", message);
}

/// Forwards an error message with optional error detail
///
/// The detail is attached as the `error` field, including its source chain.
pub fn log_error<'a>(message: impl Into<Option<&'a str>>, error: Option<&(dyn Error + 'static)>) {
    let message = message.into().unwrap_or_default();
    match error {
        Some(err) => tracing::error!(target: TAG, error = %ErrorChain(err), "{}", message),
        None => tracing::error!(target: TAG, "{}", message),
    }
}

/// Filter built from `config.level`, which may hold plain level names or
/// `EnvFilter` directives such as `info,weatherkit=debug`
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::new(config.level.to_ascii_lowercase())
}

/// Install a stderr subscriber for the configured level
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `false` when a
/// global subscriber was already installed, in which case nothing changes.
pub fn init(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter(config));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
