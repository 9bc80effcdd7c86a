// SPDX-License-Identifier: MPL-2.0
//! Registry of destination folders a media item can be filed into.
//!
//! Destinations keep their registration order as the stable storage index
//! used for routing; a separately maintained display order (case-insensitive
//! by folder name) drives the button layout. Keeping the two apart means a
//! re-sorted display can never silently retarget a button.

use std::fs;
use std::path::{Path, PathBuf};

/// One position in the sorted, user-facing destination layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    /// Index into the registration-ordered destination list.
    pub storage_index: usize,
    /// Folder name shown on the button.
    pub label: String,
}

/// Set of registered destination folders with a derived display ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationRegistry {
    destinations: Vec<PathBuf>,
    display_order: Vec<DisplayEntry>,
}

impl DestinationRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `directory` as a destination.
    ///
    /// If `directory` contains at least one immediate subdirectory, each of
    /// those subdirectories is registered instead of the directory itself
    /// (one level of expansion, not recursive) - picking a sorting root with
    /// category folders registers all categories in one action. Paths
    /// already present are skipped with a diagnostic. A non-directory input
    /// is a logged no-op.
    ///
    /// Returns the number of destinations actually added.
    pub fn register(&mut self, directory: &Path) -> usize {
        if !directory.is_dir() {
            eprintln!(
                "Not a directory, skipping registration: {}",
                directory.display()
            );
            return 0;
        }

        let subdirectories = immediate_subdirectories(directory);
        let candidates = if subdirectories.is_empty() {
            vec![directory.to_path_buf()]
        } else {
            subdirectories
        };

        let mut added = 0;
        for candidate in candidates {
            if self.is_registered(&candidate) {
                eprintln!("{} already loaded", candidate.display());
            } else {
                self.destinations.push(candidate);
                added += 1;
            }
        }

        if added > 0 {
            self.rebuild_display_order();
        }
        added
    }

    /// Maps a position in the displayed button order back to the stable
    /// storage index used for routing.
    pub fn route_index_for_display(&self, display_position: usize) -> Option<usize> {
        self.display_order
            .get(display_position)
            .map(|entry| entry.storage_index)
    }

    /// Returns the destination path for a display position.
    pub fn path_for_display(&self, display_position: usize) -> Option<&Path> {
        self.route_index_for_display(display_position)
            .and_then(|index| self.path(index))
    }

    /// Returns the destination path at a storage index.
    pub fn path(&self, storage_index: usize) -> Option<&Path> {
        self.destinations.get(storage_index).map(|p| p.as_path())
    }

    /// Returns the display entries in their sorted order.
    pub fn display_entries(&self) -> &[DisplayEntry] {
        &self.display_order
    }

    /// Returns the number of registered destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Checks if no destinations are registered.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Removes all destinations and the derived display order.
    pub fn clear(&mut self) {
        self.destinations.clear();
        self.display_order.clear();
    }

    /// Checks membership by canonical path equality, so `dir` and `dir/.`
    /// count as the same destination. Falls back to lexical comparison when
    /// a path cannot be canonicalized (e.g. it vanished since registration).
    fn is_registered(&self, candidate: &Path) -> bool {
        let canonical_candidate = fs::canonicalize(candidate).ok();

        self.destinations.iter().any(|registered| {
            match (&canonical_candidate, fs::canonicalize(registered).ok()) {
                (Some(a), Some(b)) => a == &b,
                _ => registered == candidate,
            }
        })
    }

    /// Recomputes the display order: case-insensitive alphabetical by folder
    /// name, each entry remembering its registration index.
    fn rebuild_display_order(&mut self) {
        self.display_order = self
            .destinations
            .iter()
            .enumerate()
            .map(|(storage_index, path)| DisplayEntry {
                storage_index,
                label: folder_label(path),
            })
            .collect();
        self.display_order
            .sort_by_key(|entry| entry.label.to_lowercase());
    }
}

/// Lists the immediate subdirectories of `directory`, ignoring entries that
/// cannot be read.
fn immediate_subdirectories(directory: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(directory) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect()
}

/// Button label for a destination: its final path component.
fn folder_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_registry_is_empty() {
        let registry = DestinationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.display_entries().is_empty());
    }

    #[test]
    fn registering_a_leaf_directory_registers_itself() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let leaf = temp_dir.path().join("holidays");
        fs::create_dir(&leaf).expect("failed to create leaf dir");

        let mut registry = DestinationRegistry::new();
        assert_eq!(registry.register(&leaf), 1);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.path(0), Some(leaf.as_path()));
    }

    #[test]
    fn registering_a_parent_expands_immediate_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["A", "B", "C"] {
            fs::create_dir(temp_dir.path().join(name)).expect("failed to create subdir");
        }

        let mut registry = DestinationRegistry::new();
        assert_eq!(registry.register(temp_dir.path()), 3);

        assert_eq!(registry.len(), 3);
        let labels: Vec<&str> = registry
            .display_entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        // The parent itself is not registered
        assert!(!registry
            .display_entries()
            .iter()
            .any(|e| registry.path(e.storage_index) == Some(temp_dir.path())));
    }

    #[test]
    fn expansion_is_one_level_only() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("outer").join("inner");
        fs::create_dir_all(&nested).expect("failed to create nested dirs");

        let mut registry = DestinationRegistry::new();
        registry.register(temp_dir.path());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.path(0), Some(temp_dir.path().join("outer").as_path()));
    }

    #[test]
    fn duplicate_registration_is_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let leaf = temp_dir.path().join("dup");
        fs::create_dir(&leaf).expect("failed to create leaf dir");

        let mut registry = DestinationRegistry::new();
        assert_eq!(registry.register(&leaf), 1);
        assert_eq!(registry.register(&leaf), 0);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicates_are_detected_by_canonical_equality() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let leaf = temp_dir.path().join("photos");
        fs::create_dir(&leaf).expect("failed to create leaf dir");

        let mut registry = DestinationRegistry::new();
        registry.register(&leaf);

        // Same directory through a redundant ./ hop
        let aliased = temp_dir.path().join(".").join("photos");
        assert_eq!(registry.register(&aliased), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registering_the_same_parent_twice_adds_nothing_new() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("A")).expect("failed to create subdir");
        fs::create_dir(temp_dir.path().join("B")).expect("failed to create subdir");

        let mut registry = DestinationRegistry::new();
        assert_eq!(registry.register(temp_dir.path()), 2);
        assert_eq!(registry.register(temp_dir.path()), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn registering_a_missing_path_is_a_noop() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let mut registry = DestinationRegistry::new();
        assert_eq!(registry.register(&temp_dir.path().join("missing")), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn display_order_is_case_insensitive_and_routing_stays_stable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let zeta = temp_dir.path().join("Zeta");
        let alpha = temp_dir.path().join("alpha");
        fs::create_dir(&zeta).expect("failed to create Zeta");
        fs::create_dir(&alpha).expect("failed to create alpha");

        let mut registry = DestinationRegistry::new();
        // Registration order: Zeta first, alpha second
        registry.register(&zeta);
        registry.register(&alpha);

        let labels: Vec<&str> = registry
            .display_entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["alpha", "Zeta"]);

        // Display position 0 ("alpha") routes to storage index 1
        assert_eq!(registry.route_index_for_display(0), Some(1));
        assert_eq!(registry.path_for_display(0), Some(alpha.as_path()));
        assert_eq!(registry.route_index_for_display(1), Some(0));
        assert_eq!(registry.path_for_display(1), Some(zeta.as_path()));
    }

    #[test]
    fn route_index_out_of_range_returns_none() {
        let registry = DestinationRegistry::new();
        assert_eq!(registry.route_index_for_display(0), None);
        assert_eq!(registry.path_for_display(5), None);
    }

    #[test]
    fn clear_empties_destinations_and_display_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let leaf = temp_dir.path().join("sorted");
        fs::create_dir(&leaf).expect("failed to create leaf dir");

        let mut registry = DestinationRegistry::new();
        registry.register(&leaf);
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.display_entries().is_empty());
        assert_eq!(registry.route_index_for_display(0), None);
    }
}
