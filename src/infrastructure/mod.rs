// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.
//!
//! - [`dialog`]: native directory chooser over `rfd`
//! - [`preview`]: filesystem-backed preview renderer over the media decoders

pub mod dialog;
pub mod preview;

pub use dialog::RfdDirectoryPicker;
pub use preview::MediaPreviewRenderer;
