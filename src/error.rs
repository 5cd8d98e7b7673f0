//! Error handling for currency table generation.
//!
//! Every error is fatal: the generator stops at the first one and the
//! binary reports it on stderr with a non-zero exit status.

use crate::models::Field;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Line {line}: missing field '{field}'")]
    MissingField { line: usize, field: Field },

    #[error("Line {line}: value '{value}' for field '{field}' is not a valid integer")]
    InvalidNumber {
        line: usize,
        field: Field,
        value: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Generated output is out of date: {path}")]
    StaleOutput { path: PathBuf },
}

impl CurrencyError {
    /// Line number the error refers to, if it came from the input data
    pub fn line(&self) -> Option<usize> {
        match self {
            CurrencyError::MissingField { line, .. }
            | CurrencyError::InvalidNumber { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurrencyError>;
