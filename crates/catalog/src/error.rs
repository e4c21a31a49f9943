//! Error types for the catalog crate.
//!
//! Every fallible catalog operation returns [`Result<T>`], so callers can
//! match on the variant that matters to them and bubble the rest up with `?`.

use thiserror::Error;

/// Errors that can occur while working with a [`Library`](crate::Library)
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A content-type filter was neither `Movie` nor `Series`
    #[error("Wrong content type, expected Movie or Series, got {value:?}")]
    InvalidContentType { value: String },

    /// Random playback was requested but there is nothing to play
    #[error("Cannot generate playback: the library is empty")]
    EmptyLibrary,

    /// The output sink rejected a play line
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
