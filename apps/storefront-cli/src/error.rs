//! # CLI Error Type
//!
//! Unified error type for the terminal application.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront CLI                     │
//! │                                                                         │
//! │  Order line typo ─── ValidationError ──► "Invalid input..." (continue) │
//! │                                                                         │
//! │  Checkout failure ── CoreError ──► CliError ──► message (continue)     │
//! │                                                                         │
//! │  Catalog unreadable ─ CliError::Catalog* ──► exit(1)                   │
//! │  Terminal broken ──── CliError::Io ────────► exit(1)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog file could not be read.
    #[error("Could not read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog file is not a valid catalog.
    #[error("Could not parse catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A business rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Machine-readable error codes, used in log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    Validation,
    InsufficientStock,
    Catalog,
    Io,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::Catalog => "CATALOG_ERROR",
            ErrorCode::Io => "IO_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::CatalogRead { .. } | CliError::CatalogParse { .. } => ErrorCode::Catalog,
            CliError::Core(CoreError::ProductNotFound(_)) => ErrorCode::NotFound,
            CliError::Core(CoreError::InsufficientStock { .. }) => ErrorCode::InsufficientStock,
            CliError::Core(
                CoreError::StockNotTracked { .. }
                | CoreError::AmountOverflow { .. }
                | CoreError::Validation(_),
            ) => ErrorCode::Validation,
            CliError::Io(_) => ErrorCode::Io,
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(err.into())
    }
}
