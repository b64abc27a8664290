use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a portfolio directory.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to read directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons the lightbox refuses an `open` request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LightboxError {
    #[error("Cannot open the lightbox with an empty image list")]
    Empty,

    #[error("Start index {index} is out of range for {len} images")]
    StartOutOfRange { index: usize, len: usize },
}

/// Invalid passcode gate configuration.
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Passcode hash must be 64 hex characters: {0}")]
    InvalidHash(#[from] hex::FromHexError),

    #[error("Passcode hash must be a SHA-256 digest ({0} bytes given)")]
    WrongLength(usize),
}
