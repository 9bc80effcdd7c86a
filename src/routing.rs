// SPDX-License-Identifier: MPL-2.0
//! The fusion point between the media queue and the destination registry:
//! moving the current item into a destination folder.
//!
//! The move happens before the queue is touched. Only a move that actually
//! completed removes the item; any failure leaves the queue and cursor
//! exactly as they were, so a failed move never loses track of a file.

use crate::destinations::DestinationRegistry;
use crate::error::{MoveError, Result};
use crate::media_queue::{MediaQueue, RemovalOutcome};
use std::fs;
use std::path::{Path, PathBuf};

/// Moves the current queue item into the destination shown at
/// `display_position` and removes it from the queue.
///
/// An empty queue or an unresolvable display position is a logged no-op
/// (`Ok(None)`). On success the queue's removal outcome is returned so the
/// caller can refresh the view accordingly.
///
/// # Errors
///
/// Returns [`crate::error::Error::Move`] when the filesystem move fails; the
/// queue is left untouched and the item remains current.
pub fn move_current_to(
    queue: &mut MediaQueue,
    registry: &DestinationRegistry,
    display_position: usize,
) -> Result<Option<RemovalOutcome>> {
    let Some(source) = queue.current().map(Path::to_path_buf) else {
        eprintln!("Move requested with an empty queue");
        return Ok(None);
    };

    let Some(destination) = registry.path_for_display(display_position) else {
        eprintln!("Move requested for unknown destination position {display_position}");
        return Ok(None);
    };

    move_into_directory(&source, destination)?;

    // The move completed; removal cannot be None here since current() was Some.
    Ok(queue.remove_current())
}

/// Moves `source` into the directory `destination_dir`, keeping its file name.
///
/// Tries an atomic `rename` first and falls back to copy + remove-source when
/// rename fails, which makes the move safe across filesystem boundaries.
/// An existing file at the target is refused, never overwritten.
///
/// Returns the path of the moved file inside the destination.
pub fn move_into_directory(
    source: &Path,
    destination_dir: &Path,
) -> std::result::Result<PathBuf, MoveError> {
    if !destination_dir.is_dir() {
        return Err(MoveError::DestinationMissing(destination_dir.to_path_buf()));
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| MoveError::Io(format!("Source has no file name: {}", source.display())))?;
    let target = destination_dir.join(file_name);

    if target.exists() {
        return Err(MoveError::AlreadyExists(target));
    }

    if fs::rename(source, &target).is_ok() {
        return Ok(target);
    }

    // Rename failed (commonly a cross-device move); copy then remove the source.
    if let Err(e) = fs::copy(source, &target) {
        // Don't leave a partial file behind at the destination.
        let _ = fs::remove_file(&target);
        return Err(MoveError::Io(format!(
            "Copy failed {} -> {}: {e}",
            source.display(),
            target.display()
        )));
    }

    fs::remove_file(source).map_err(|e| {
        MoveError::Io(format!(
            "Failed to remove original file {}: {e}",
            source.display()
        ))
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake media data")
            .expect("failed to write test file");
        path
    }

    fn loaded_queue(root: &Path) -> MediaQueue {
        let mut queue = MediaQueue::new();
        queue.load(root);
        queue
    }

    #[test]
    fn move_into_directory_relocates_the_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = create_test_file(temp_dir.path(), "a.jpg");
        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");

        let moved = move_into_directory(&source, &dest).expect("move should succeed");

        assert_eq!(moved, dest.join("a.jpg"));
        assert!(moved.exists());
        assert!(!source.exists());
        assert_eq!(
            fs::read(&moved).expect("failed to read moved file"),
            b"fake media data"
        );
    }

    #[test]
    fn move_into_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = create_test_file(temp_dir.path(), "a.jpg");

        let result = move_into_directory(&source, &temp_dir.path().join("gone"));
        assert!(matches!(result, Err(MoveError::DestinationMissing(_))));
        assert!(source.exists());
    }

    #[test]
    fn move_onto_existing_file_is_refused() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = create_test_file(temp_dir.path(), "a.jpg");
        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");
        create_test_file(&dest, "a.jpg");

        let result = move_into_directory(&source, &dest);
        assert!(matches!(result, Err(MoveError::AlreadyExists(_))));
        assert!(source.exists());
    }

    #[test]
    fn successful_move_removes_current_and_keeps_cursor() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let media_root = temp_dir.path().join("inbox");
        fs::create_dir(&media_root).expect("failed to create inbox");
        create_test_file(&media_root, "a.jpg");
        create_test_file(&media_root, "b.jpg");

        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");

        let mut queue = loaded_queue(&media_root);
        let first = queue.current().expect("queue should be loaded").to_path_buf();
        let first_name = first.file_name().unwrap().to_os_string();

        let mut registry = DestinationRegistry::new();
        registry.register(&dest);

        let outcome =
            move_current_to(&mut queue, &registry, 0).expect("move should succeed");
        assert_eq!(outcome, Some(RemovalOutcome::Advanced));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.cursor(), Some(0));
        assert!(dest.join(&first_name).exists());
        assert!(!first.exists());
    }

    #[test]
    fn move_failure_leaves_queue_untouched() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let media_root = temp_dir.path().join("inbox");
        fs::create_dir(&media_root).expect("failed to create inbox");
        create_test_file(&media_root, "a.jpg");
        create_test_file(&media_root, "b.jpg");

        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");

        let mut queue = loaded_queue(&media_root);
        let mut registry = DestinationRegistry::new();
        registry.register(&dest);

        // Destination becomes invalid after registration
        fs::remove_dir(&dest).expect("failed to remove dest dir");

        let result = move_current_to(&mut queue, &registry, 0);
        assert!(matches!(
            result,
            Err(Error::Move(MoveError::DestinationMissing(_)))
        ));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.cursor(), Some(0));
    }

    #[test]
    fn move_with_empty_queue_is_a_noop() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");

        let mut queue = MediaQueue::new();
        let mut registry = DestinationRegistry::new();
        registry.register(&dest);

        let outcome = move_current_to(&mut queue, &registry, 0).expect("noop should be ok");
        assert_eq!(outcome, None);
    }

    #[test]
    fn move_with_unknown_display_position_is_a_noop() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let media_root = temp_dir.path().join("inbox");
        fs::create_dir(&media_root).expect("failed to create inbox");
        create_test_file(&media_root, "a.jpg");

        let mut queue = loaded_queue(&media_root);
        let registry = DestinationRegistry::new();

        let outcome = move_current_to(&mut queue, &registry, 0).expect("noop should be ok");
        assert_eq!(outcome, None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn moving_the_last_item_steps_the_cursor_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let media_root = temp_dir.path().join("inbox");
        fs::create_dir(&media_root).expect("failed to create inbox");
        create_test_file(&media_root, "a.jpg");
        create_test_file(&media_root, "b.jpg");

        let dest = temp_dir.path().join("sorted");
        fs::create_dir(&dest).expect("failed to create dest dir");

        let mut queue = loaded_queue(&media_root);
        queue.advance(crate::media_queue::NavigationDirection::Next);

        let mut registry = DestinationRegistry::new();
        registry.register(&dest);

        let outcome =
            move_current_to(&mut queue, &registry, 0).expect("move should succeed");
        assert_eq!(outcome, Some(RemovalOutcome::SteppedBack));
        assert_eq!(queue.cursor(), Some(0));
    }
}
