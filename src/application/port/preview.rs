// SPDX-License-Identifier: MPL-2.0
//! Preview rendering port definition.
//!
//! This module defines the [`PreviewRenderer`] trait for turning a media
//! file path into a displayable, height-bounded bitmap. Infrastructure
//! adapters implement this trait with concrete decoders.

use crate::media::ImageData;
use std::fmt;
use std::path::Path;

/// Errors that can occur while rendering a preview.
///
/// All of these are recoverable: the item stays in the queue and the UI
/// shows "preview unavailable" instead of an image.
#[derive(Debug, Clone)]
pub enum PreviewError {
    /// The file extension is not in the supported media set.
    UnsupportedFormat,

    /// The media data is corrupted or cannot be decoded.
    Decode(String),

    /// The file could not be read (I/O error).
    Io(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::UnsupportedFormat => write!(f, "Unsupported media format"),
            PreviewError::Decode(msg) => write!(f, "Cannot decode media: {msg}"),
            PreviewError::Io(msg) => write!(f, "Cannot read media: {msg}"),
        }
    }
}

impl std::error::Error for PreviewError {}

impl From<crate::error::Error> for PreviewError {
    fn from(err: crate::error::Error) -> Self {
        match err {
            crate::error::Error::Io(msg) => PreviewError::Io(msg),
            crate::error::Error::Svg(msg) | crate::error::Error::Decode(msg) => {
                PreviewError::Decode(msg)
            }
            crate::error::Error::Move(e) => PreviewError::Io(e.to_string()),
        }
    }
}

/// Port for rendering media previews.
///
/// Implementations dispatch on the media kind (still image vs video) rather
/// than branching on file suffixes at call sites: images are fully decoded,
/// videos contribute only their first frame.
pub trait PreviewRenderer {
    /// Renders the file at `path` as a preview no taller than `max_height`
    /// pixels, preserving aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns a [`PreviewError`] if the file is unreadable, unsupported, or
    /// corrupt. Callers treat this as "no preview", never as fatal.
    fn render(&self, path: &Path, max_height: u32) -> Result<ImageData, PreviewError>;
}
