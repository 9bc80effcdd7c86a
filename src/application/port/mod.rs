// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`dialog`]: Picking a directory from the local filesystem
//! - [`preview`]: Rendering a media file as a bounded-height preview
//!
//! # Design Notes
//!
//! - Methods are synchronous blocking calls; all operations run on the
//!   single control thread in response to user events
//! - A preview failure is recoverable: it surfaces as "preview unavailable"
//!   and never unseats the current queue item

pub mod dialog;
pub mod preview;

// Re-export main types for convenience
pub use dialog::DirectoryPicker;
pub use preview::{PreviewError, PreviewRenderer};
