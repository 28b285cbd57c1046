//! Error types for the mediatype crate.

use std::io;
use thiserror::Error;

/// The main error type for the mediatype crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller passed an already-decomposed value that breaks a rule
    /// (bad type, subtype, suffix, tree or a duplicate parameter), or an
    /// empty string to [`MediaType::from_mime`](crate::MediaType::from_mime).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text that claims to be a media type is not one.
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for mediatype operations.
pub type Result<T> = std::result::Result<T, Error>;
