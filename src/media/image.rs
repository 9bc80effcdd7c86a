// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, BMP, SVG, HEIC).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes for downscaling support.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a copy of this image bounded to `max_height`, preserving the
    /// aspect ratio. Images already within the bound are returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the internal RGBA bytes are invalid (should never happen
    /// as bytes are validated at construction).
    #[must_use]
    pub fn scaled_to_height(&self, max_height: u32) -> Self {
        if self.height <= max_height || self.height == 0 {
            return self.clone();
        }

        let scale = max_height as f32 / self.height as f32;
        let new_width = ((self.width as f32 * scale).round() as u32).max(1);

        let img = image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .expect("RGBA bytes should be valid");
        let resized = image_rs::imageops::resize(
            &img,
            new_width,
            max_height,
            image_rs::imageops::FilterType::Triangle,
        );

        Self::from_rgba(new_width, max_height, resized.into_vec())
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, BMP) as well as SVG and HEIC.
/// SVG files are rasterized using resvg. HEIC files carry an HEVC-encoded
/// still and are decoded through the FFmpeg path shared with video
/// thumbnails, which performs its decoder registration on first use.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image data is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
    } else if extension.eq_ignore_ascii_case("heic") {
        crate::media::video::decode_first_frame(path)
    } else {
        let img_bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;

        let img = image_rs::load_from_memory(&img_bytes)?;

        let (width, height) = img.dimensions();

        let rgba_img = img.to_rgba8();
        let pixels = rgba_img.into_vec();

        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}
