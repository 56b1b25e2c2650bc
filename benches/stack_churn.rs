// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast stack churn.
//!
//! Measures the cost of:
//! - Rendering a large batch behind a small overflow window
//! - Draining the whole stack through the one-at-a-time removal queue
//! - Hover storms over a stack with many blocked removals

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use toast_stack::config::{Config, EXIT_ANIMATION_MS};
use toast_stack::notifications::{FlashMessage, ToastInput, ToastStack, ToastState};

fn stack(limit: usize, count: usize) -> ToastStack {
    let mut stack = ToastStack::new(Config {
        limit,
        ..Config::default()
    });
    stack.attach((0..count).map(|i| FlashMessage::notice(format!("toast {i}"))));
    stack
}

/// Runs the stack until every toast has been removed.
fn drain(stack: &mut ToastStack) {
    while !stack.is_empty() {
        stack.advance_by(EXIT_ANIMATION_MS);
        let finished: Vec<_> = stack
            .toasts()
            .filter(|t| t.state() == ToastState::Removing)
            .map(|t| t.id())
            .collect();
        for id in finished {
            stack.handle_input(id, ToastInput::ExitAnimationFinished);
        }
    }
}

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_churn");

    for count in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("attach", count), &count, |b, &count| {
            b.iter(|| black_box(stack(5, count)));
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_churn");

    for count in [10usize, 100] {
        group.bench_with_input(BenchmarkId::new("drain", count), &count, |b, &count| {
            b.iter(|| {
                let mut stack = stack(5, count);
                drain(&mut stack);
                black_box(stack.journal().len());
            });
        });
    }

    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_churn");

    group.bench_function("hover_blocked_queue", |b| {
        let mut base = stack(0, 200);
        base.advance_by(200);
        let first = base.ids()[0];

        b.iter(|| {
            base.handle_input(first, ToastInput::PointerEnter);
            base.advance_by(50);
            base.handle_input(first, ToastInput::PointerLeave);
            black_box(base.coordinator().active());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_attach, bench_drain, bench_hover);
criterion_main!(benches);
