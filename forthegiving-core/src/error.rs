/// Structured error types for forthegiving-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The server binary can still use `anyhow` for convenience, but library
/// consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for forthegiving-core operations
#[derive(Error, Debug)]
pub enum GivingError {
    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Environment variable holds a value that cannot be parsed
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type alias for forthegiving-core operations
pub type Result<T> = std::result::Result<T, GivingError>;

impl GivingError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an invalid environment variable error
    pub fn invalid_env(var: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEnv {
            var,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
