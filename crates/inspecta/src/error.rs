//! Error types for inspecta operations.

use crate::domain::RecordId;
use std::io;
use thiserror::Error;

/// The error type for inspecta operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Update/delete target does not exist.
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// Pagination parameters that cannot describe a page.
    ///
    /// The upstream contract left zero `page`/`pageSize` undefined; we
    /// reject them instead of clamping.
    #[error("Invalid query: {reason} (page={page}, pageSize={page_size})")]
    InvalidQuery {
        /// What was wrong with the parameters
        reason: &'static str,
        /// Requested page
        page: usize,
        /// Requested page size
        page_size: usize,
    },
}

/// A specialized Result type for inspecta operations.
pub type Result<T> = std::result::Result<T, Error>;
