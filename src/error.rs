//! Error types for stockroom
//!
//! Data access returns these explicitly instead of sentinel values; the
//! HTTP layer decides which outcomes become which status codes.

use thiserror::Error;

use crate::types::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),
}

impl Error {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Error::SourceUnavailable(msg.into())
    }
}
