// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for media queue operations.
//!
//! Measures the performance of:
//! - Loading (recursive scan + extension filter)
//! - Navigation (next/previous over a large queue)
//! - Removal with cursor repair

use criterion::{criterion_group, criterion_main, Criterion};
use iced_sift::media_queue::{MediaQueue, NavigationDirection};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

const FILE_COUNT: usize = 500;

/// Builds a directory tree with `FILE_COUNT` media files spread over a few
/// subdirectories, plus some unsupported noise.
fn populate_media_tree() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");

    for i in 0..FILE_COUNT {
        let subdir = temp_dir.path().join(format!("batch{}", i % 5));
        fs::create_dir_all(&subdir).expect("failed to create subdir");
        fs::write(subdir.join(format!("img{i}.jpg")), b"fake media data")
            .expect("failed to write media file");
    }
    fs::write(temp_dir.path().join("readme.txt"), b"not media")
        .expect("failed to write noise file");

    temp_dir
}

/// Benchmark directory loading performance.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_queue");

    let temp_dir = populate_media_tree();

    group.bench_function("load", |b| {
        b.iter(|| {
            let mut queue = MediaQueue::new();
            queue.load(temp_dir.path());
            black_box(&queue);
        });
    });

    group.finish();
}

/// Benchmark navigation across the whole queue and back.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_queue");

    let temp_dir = populate_media_tree();
    let mut queue = MediaQueue::new();
    queue.load(temp_dir.path());

    group.bench_function("navigate_full_sweep", |b| {
        b.iter(|| {
            while queue.advance(NavigationDirection::Next) {}
            while queue.advance(NavigationDirection::Previous) {}
            black_box(queue.cursor());
        });
    });

    group.finish();
}

/// Benchmark draining a queue through remove_current.
fn bench_remove_current(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_queue");

    let temp_dir = populate_media_tree();
    let loaded = {
        let mut queue = MediaQueue::new();
        queue.load(temp_dir.path());
        queue
    };

    group.bench_function("drain_via_remove_current", |b| {
        b.iter(|| {
            let mut queue = loaded.clone();
            while queue.remove_current().is_some() {}
            black_box(queue.is_empty());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_navigate, bench_remove_current);
criterion_main!(benches);
