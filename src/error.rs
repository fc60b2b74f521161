//! Error types for loglens.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A numeric variable held a value that does not parse as its type.
    #[error("{var}={value:?} is not a valid {expected}")]
    Coercion {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("env file error: {0}")]
    EnvFile(String),

    #[error("logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
