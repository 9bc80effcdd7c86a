// SPDX-License-Identifier: MPL-2.0
//! Unified media handling for images and videos.
//!
//! This module provides media type detection plus the decoders used to turn
//! a file path into a displayable preview.

pub mod image;
pub mod video;

use std::path::Path;

// Re-export commonly used types
pub use extensions::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use image::{load_image, ImageData};

/// Represents different types of media formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "svg", "heic"];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

    /// All supported extensions (images + videos)
    #[must_use]
    pub fn all_supported_extensions() -> Vec<&'static str> {
        IMAGE_EXTENSIONS
            .iter()
            .chain(VIDEO_EXTENSIONS.iter())
            .copied()
            .collect()
    }
}

/// Determines the media type of a path from its extension, case-insensitively.
///
/// Returns `None` for unsupported formats.
#[must_use]
pub fn detect_media_type(path: &Path) -> Option<MediaType> {
    let extension = path.extension()?.to_str()?.to_lowercase();

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaType::Video)
    } else {
        None
    }
}

/// Checks if a file has a supported media extension (images or videos).
#[must_use]
pub fn is_supported_media(path: &Path) -> bool {
    detect_media_type(path).is_some()
}
