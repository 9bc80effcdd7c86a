// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed preview renderer.

use crate::application::port::{PreviewError, PreviewRenderer};
use crate::media::{self, ImageData, MediaType};
use std::path::Path;

/// [`PreviewRenderer`] that decodes media straight from disk.
///
/// Still images are fully decoded (raster, SVG or HEIC); videos contribute
/// only their first frame. The result is bounded to the requested height.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaPreviewRenderer;

impl PreviewRenderer for MediaPreviewRenderer {
    fn render(&self, path: &Path, max_height: u32) -> Result<ImageData, PreviewError> {
        let media_type =
            media::detect_media_type(path).ok_or(PreviewError::UnsupportedFormat)?;

        let data = match media_type {
            MediaType::Image => media::image::load_image(path)?,
            MediaType::Video => media::video::decode_first_frame(path)?,
        };

        Ok(data.scaled_to_height(max_height))
    }
}
