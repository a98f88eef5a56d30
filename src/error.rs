//! Error types for the interactive session.
//!
//! Distribution parameter errors live next to the distributions in
//! [`crate::distributions::DistributionError`].

use crate::distributions::DistributionError;

/// Failure to read a numeric parameter from the input stream.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input ended before the value was supplied.
    #[error("expected a number for {field}, reached end of input")]
    UnexpectedEof {
        /// The parameter being read.
        field: &'static str,
    },

    /// The next token is not a floating-point number.
    #[error("expected a number for {field}, got {token:?}")]
    InvalidNumber {
        /// The parameter being read.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Missing or malformed parameter.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Parameters rejected by a checked constructor (strict mode only).
    #[error(transparent)]
    Domain(#[from] DistributionError),

    /// Writing prompts or results failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
