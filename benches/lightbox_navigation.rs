// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for lightbox navigation and load bookkeeping.
//!
//! Measures the performance of:
//! - Stepping through a large sequence (next/previous + load cycle start)
//! - Committing results, including a burst of stale ones
//! - Replacing the photo sequence while open

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use futures_util::FutureExt;
use photo_lightbox::actions::Hooks;
use photo_lightbox::lightbox::{Message, State};
use photo_lightbox::media::{ImageData, ImageLoader, LoadFuture};
use photo_lightbox::photo::{PhotoDescriptor, PhotoSequence};
use std::hint::black_box;
use std::sync::Arc;

/// Loader that never resolves; benchmarks feed results by hand.
#[derive(Debug)]
struct IdleLoader;

impl ImageLoader for IdleLoader {
    fn load(&self, _image_url: &str) -> LoadFuture {
        futures_util::future::pending().boxed()
    }
}

fn photos(count: usize) -> PhotoSequence {
    (0..count)
        .map(|i| PhotoDescriptor::new(format!("https://example.com/{i:05}.jpg")))
        .collect()
}

fn lightbox(count: usize) -> State {
    State::new(photos(count), Hooks::new(), Arc::new(IdleLoader))
}

/// Walks forward to the end and back to the start.
fn bench_step_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    for count in [10usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("walk", count), &count, |b, &count| {
            b.iter(|| {
                let mut lightbox = lightbox(count);
                let _ = lightbox.open(0);
                for _ in 0..count {
                    let _ = lightbox.next();
                }
                for _ in 0..count {
                    let _ = lightbox.prev();
                }
                black_box(lightbox.current_index());
            });
        });
    }

    group.finish();
}

/// Rapid navigation followed by every result arriving newest-first.
fn bench_stale_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");
    let image = ImageData::from_rgba(2, 2, vec![255; 16]);

    group.bench_function("discard_stale_results", |b| {
        b.iter(|| {
            let mut lightbox = lightbox(100);
            let _ = lightbox.open(0);
            let mut tokens = vec![lightbox.load_token()];
            for _ in 0..99 {
                let _ = lightbox.next();
                tokens.push(lightbox.load_token());
            }
            for token in tokens.into_iter().rev() {
                lightbox.handle_message(Message::ImageLoaded {
                    token,
                    result: Ok(image.clone()),
                });
            }
            black_box(lightbox.displayed().map(|d| d.index));
        });
    });

    group.finish();
}

fn bench_set_photos(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");
    let long = photos(5_000);
    let short = photos(10);

    group.bench_function("set_photos_while_open", |b| {
        let mut lightbox = lightbox(5_000);
        let _ = lightbox.open(4_999);
        b.iter(|| {
            let _ = lightbox.set_photos(short.clone());
            let _ = lightbox.set_photos(long.clone());
            black_box(lightbox.current_index());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_step_through,
    bench_stale_results,
    bench_set_photos
);
criterion_main!(benches);
