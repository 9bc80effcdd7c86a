// SPDX-License-Identifier: MPL-2.0
//! First-frame extraction for video files and HEVC stills.
//!
//! Videos are never played back in this tool; the preview shows only the
//! first decoded frame. HEIC images share this path because their payload
//! is an HEVC still image that FFmpeg demuxes the same way.

use crate::error::{Error, Result};
use crate::media::ImageData;
use std::path::Path;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// This function is safe to call multiple times - initialization will only
/// happen once thanks to `std::sync::Once`. It sets the FFmpeg log level
/// to ERROR to suppress container warnings during probing.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Decode(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decode the first frame of a video (or HEVC still) file.
///
/// Opens the file, finds the best video stream, decodes the first frame,
/// and converts it to RGBA format for display.
pub fn decode_first_frame<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| Error::Decode(format!("Failed to open media file: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| Error::Decode("No video stream found".to_string()))?;
    let video_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| Error::Decode(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| Error::Decode(format!("Failed to create video decoder: {e}")))?;

    // Validate dimensions before creating scaler
    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(Error::Decode(format!(
            "Invalid video dimensions: {width}x{height} (possibly unsupported format)"
        )));
    }

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| Error::Decode(format!("Failed to create scaler: {e}")))?;

    let mut rgba_frame = ffmpeg_next::frame::Video::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() == video_stream_index {
            decoder
                .send_packet(&packet)
                .map_err(|e| Error::Decode(format!("Failed to send packet: {e}")))?;

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgba_frame)
                    .map_err(|e| Error::Decode(format!("Failed to scale frame: {e}")))?;
                break;
            }
        }
    }

    if rgba_frame.data(0).is_empty() {
        return Err(Error::Decode("Could not decode first frame".to_string()));
    }

    let width = rgba_frame.width();
    let height = rgba_frame.height();
    let data = rgba_frame.data(0);
    let stride = rgba_frame.stride(0);

    // Copy frame data (handle stride)
    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y * stride as u32) as usize;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    Ok(ImageData::from_rgba(width, height, rgba_bytes))
}
