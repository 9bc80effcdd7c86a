// SPDX-License-Identifier: MPL-2.0
//! Media queue module for managing the list of files awaiting triage.
//!
//! The queue owns the discovered media paths and the cursor pointing at the
//! item currently on screen. Navigation clamps at the ends rather than
//! wrapping, and removal (after a successful move) repairs the cursor so the
//! view falls through to the next item in sequence.

use crate::media;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Direction for cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Next,
    Previous,
}

/// How the cursor was repaired after removing the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The queue is now empty; there is no current item.
    Empty,
    /// The removed item was last, so the cursor stepped back to the new last item.
    SteppedBack,
    /// The cursor index is unchanged and now addresses the former next item.
    Advanced,
}

/// Ordered list of media files with a cursor for one-at-a-time browsing.
///
/// Invariant: `cursor < items.len()` whenever the queue is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQueue {
    items: Vec<PathBuf>,
    cursor: usize,
}

impl MediaQueue {
    /// Creates a new empty MediaQueue.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    /// Discards the previous contents and fills the queue by recursively
    /// walking `root`, keeping every file with a supported media extension.
    ///
    /// Files are appended in discovery order; no sorting is applied, so the
    /// queue order is the walk order for the filesystem snapshot. A missing
    /// or non-directory `root` leaves the queue empty rather than erroring.
    pub fn load(&mut self, root: &Path) {
        self.items.clear();
        self.cursor = 0;

        if !root.is_dir() {
            eprintln!("Not a directory, loading nothing: {}", root.display());
            return;
        }

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && media::is_supported_media(entry.path()) {
                self.items.push(entry.path().to_path_buf());
            }
        }
    }

    /// Returns the path under the cursor, or `None` when the queue is empty.
    pub fn current(&self) -> Option<&Path> {
        self.items.get(self.cursor).map(|p| p.as_path())
    }

    /// Moves the cursor one step in `direction`.
    ///
    /// Returns `true` if the cursor moved. Calls at the boundary are silent
    /// no-ops returning `false`; the cursor never leaves `[0, len - 1]`.
    pub fn advance(&mut self, direction: NavigationDirection) -> bool {
        match direction {
            NavigationDirection::Next => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            NavigationDirection::Previous => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Removes the item under the cursor and repairs the cursor.
    ///
    /// Returns `None` when the queue is empty (nothing removed). Otherwise
    /// the subsequent items shift down one index and the outcome reports how
    /// the cursor was repaired:
    /// - queue emptied -> [`RemovalOutcome::Empty`]
    /// - removed item was last -> cursor decremented, [`RemovalOutcome::SteppedBack`]
    /// - otherwise -> cursor unchanged, now at the former next item,
    ///   [`RemovalOutcome::Advanced`]
    pub fn remove_current(&mut self) -> Option<RemovalOutcome> {
        if self.items.is_empty() {
            return None;
        }

        self.items.remove(self.cursor);

        if self.items.is_empty() {
            self.cursor = 0;
            Some(RemovalOutcome::Empty)
        } else if self.cursor == self.items.len() {
            self.cursor -= 1;
            Some(RemovalOutcome::SteppedBack)
        } else {
            Some(RemovalOutcome::Advanced)
        }
    }

    /// Returns the cursor index if the queue is non-empty.
    pub fn cursor(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Returns the total number of queued media files.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if the cursor is on the first item.
    pub fn is_at_first(&self) -> bool {
        !self.items.is_empty() && self.cursor == 0
    }

    /// Checks if the cursor is on the last item.
    pub fn is_at_last(&self) -> bool {
        !self.items.is_empty() && self.cursor == self.items.len() - 1
    }
}

impl Default for MediaQueue {
    fn default() -> Self {
        Self::new()
    }
}
