// src/source.rs

//! The seam between glyph/image storage and the compositor.
//!
//! A [`Source`] hands out fixed-height [`Grid`]s by key and exposes the
//! [`Config`] those grids were authored against. The compositor consumes
//! sources only through this trait; the JSON-backed implementations live in
//! [`crate::font`] and [`crate::gallery`].

use thiserror::Error;

use crate::config::Config;
use crate::grid::Grid;

/// Keyed supplier of glyph or image grids.
pub trait Source {
    /// Lookup key: `char` for fonts, `str` for galleries.
    type Key: ?Sized;

    /// Composition metadata for every grid this source produces.
    fn config(&self) -> &Config;

    /// Returns the grid stored under `key`.
    ///
    /// # Errors
    /// [`SourceError::NotFound`] if the key has no entry.
    fn lookup(&self, key: &Self::Key) -> Result<Grid, SourceError>;
}

/// Failures raised while loading a source document or resolving a key.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested key has no entry in the source.
    #[error("no entry for {0:?}")]
    NotFound(String),
    /// The document has the wrong extension or does not match the schema.
    #[error("malformed document: {0}")]
    Format(String),
    /// The document could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Format(err.to_string())
    }
}
