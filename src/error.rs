// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Decode(String),
    Move(MoveError),
}

/// Specific error types for file move failures.
/// The queue is never mutated when one of these is returned; the item
/// stays current so the user can retry or file it elsewhere.
#[derive(Debug, Clone)]
pub enum MoveError {
    /// The destination directory no longer exists (or is not a directory)
    DestinationMissing(PathBuf),

    /// A file with the same name already exists at the destination
    AlreadyExists(PathBuf),

    /// The move itself failed (permissions, disk full, ...)
    Io(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::DestinationMissing(path) => {
                write!(f, "Destination folder is missing: {}", path.display())
            }
            MoveError::AlreadyExists(path) => {
                write!(f, "A file already exists at {}", path.display())
            }
            MoveError::Io(msg) => write!(f, "Move failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Move(e) => write!(f, "{}", e),
        }
    }
}

impl From<MoveError> for Error {
    fn from(err: MoveError) -> Self {
        Error::Move(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
