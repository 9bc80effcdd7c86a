// SPDX-License-Identifier: MPL-2.0
//! Native directory chooser adapter.

use crate::application::port::DirectoryPicker;
use std::path::PathBuf;

/// [`DirectoryPicker`] backed by the platform file dialog.
///
/// The dialog blocks the control thread until dismissed, which matches the
/// synchronous event model of the rest of the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdDirectoryPicker;

impl DirectoryPicker for RfdDirectoryPicker {
    fn pick_directory(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .pick_folder()
    }
}
