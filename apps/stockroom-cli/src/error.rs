//! # CLI Error Type
//!
//! Fatal errors for the command loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  CoreError / ValidationError ──► printed, loop continues                │
//! │                                                                         │
//! │  ConfigError ──┐                                                        │
//! │                ├──► CliError ──► main prints "Error: …", exit(1)        │
//! │  io::Error ────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Environment configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::InvalidValue("STOCKROOM_STRICT".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for STOCKROOM_STRICT"
        );
    }
}
