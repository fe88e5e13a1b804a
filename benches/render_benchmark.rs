//! Rendering performance benchmarks.
//!
//! Measures cursor movement plus render on large lists, cold layout
//! (after a width change) and warm layout (cache hit).
//!
//! Run with: cargo bench --bench render_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use wraplist::state::{ListState, PickerState};
use wraplist::view::{ColorConfig, ListStyles, TuiApp};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn sample_items(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("item {i}"),
            1 => format!("item {i} with a description long enough to wrap on narrow screens"),
            2 => format!("item {i}\twith\ttabs"),
            _ => format!("item {i} \x1b[31mcolored\x1b[0m text"),
        })
        .collect()
}

fn bench_move_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_and_render");

    for &size in &SIZES {
        let mut list = ListState::with_items(sample_items(size), 80, 40);
        // Warm the layout cache.
        let _ = list.render();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                list.move_by(7);
                if list.cursor().get() + 1 == list.len() {
                    list.top();
                }
                black_box(list.render().ok());
            });
        });
    }

    group.finish();
}

fn bench_cold_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_layout");

    for &size in &SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || ListState::with_items(sample_items(size), 80, 40),
                |mut list| {
                    list.bottom();
                    black_box(list.render().ok());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_widget_frame(c: &mut Criterion) {
    let mut list = ListState::new();
    list.add_items(sample_items(10_000));
    let terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
    let mut app = TuiApp::with_terminal(
        terminal,
        PickerState::new(list),
        ListStyles::with_color_config(ColorConfig::new(true)),
    )
    .unwrap();
    let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);

    c.bench_function("widget_frame_10k", |b| {
        b.iter(|| {
            app.handle_key(down);
            app.draw().unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_move_and_render,
    bench_cold_layout,
    bench_widget_frame
);
criterion_main!(benches);
