//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Process exit codes reported to the shell.
pub const SUCCESS: i32 = 0;
pub const ERR_DUPLICATE: i32 = 1;
pub const ERR_BAD_INPUT: i32 = 2;
pub const ERR_IO: i32 = 3;
pub const ERR_UNKNOWN: i32 = 9;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("File error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date '{0}': --date must be in YYYY-MM-DD format")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Entry for {0} already exists. Use --force to add another anyway")]
    DuplicateEntry(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shell exit code for each failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DuplicateEntry(_) => ERR_DUPLICATE,
            AppError::InvalidDate(_) => ERR_BAD_INPUT,
            AppError::Io(_) => ERR_IO,
            AppError::Config(_) | AppError::Other(_) => ERR_UNKNOWN,
        }
    }
}
