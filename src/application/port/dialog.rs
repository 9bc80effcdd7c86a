// SPDX-License-Identifier: MPL-2.0
//! Directory picking port definition.

use std::path::PathBuf;

/// Port for asking the user to pick a single directory.
///
/// Implementations block until the user chooses a directory or cancels;
/// `None` means the dialog was cancelled.
pub trait DirectoryPicker {
    /// Opens a directory chooser with the given dialog title.
    fn pick_directory(&self, title: &str) -> Option<PathBuf>;
}
