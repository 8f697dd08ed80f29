// ===============================
// src/error.rs
// ===============================
use thiserror::Error;

/// Error taxonomy for the CLI. `Exchange` carries the raw response body of a
/// non-2xx reply; the body is printed verbatim and never interpreted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("exchange error: {0}")]
    Exchange(String),
}

impl CliError {
    /// Process exit code. Usage errors follow clap's convention (2);
    /// exchange replies never map to an exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) => 2,
            CliError::Exchange(_) => 0,
            _ => 1,
        }
    }
}
