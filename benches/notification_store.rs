// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification store and service.
//!
//! Measures the performance of:
//! - Appending and removing with subscribed surfaces attached
//! - Firing a batch of expired toast timers

use bookshelf::ui::notifications::{
    FocusTracker, InlineSlot, ModalSurface, Service, Severity, Store, ToastList,
    TOAST_DISMISS_DELAY,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Store with the three surfaces subscribed, as in the application.
fn wired_store() -> (Service, ToastList, InlineSlot, ModalSurface) {
    let store = Store::new();
    let focus = FocusTracker::new();
    let toasts = ToastList::new(&store);
    let inline = InlineSlot::new(&store, "bench");
    let modal = ModalSurface::new(&store, &focus);
    (Service::new(store), toasts, inline, modal)
}

/// Benchmark add + remove cycles on logs of growing size.
fn bench_add_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");

    for existing in [0usize, 16, 128] {
        group.bench_with_input(
            BenchmarkId::new("add_remove", existing),
            &existing,
            |b, &existing| {
                let (service, _toasts, _inline, _modal) = wired_store();
                for i in 0..existing {
                    service.show_inline(format!("pending {i}"), Severity::Warning, "bench");
                }

                b.iter(|| {
                    let id = service.show_toast("saved", Severity::Success, None);
                    service.clear_notification(black_box(id));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark expiring a batch of toasts in one tick.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_service");

    group.bench_function("tick_expires_64_toasts", |b| {
        b.iter_batched(
            || {
                let (service, toasts, inline, modal) = wired_store();
                for i in 0..64 {
                    service.show_toast(format!("toast {i}"), Severity::Success, None);
                }
                (service, toasts, inline, modal)
            },
            |(service, _toasts, _inline, _modal)| {
                let later = Instant::now() + TOAST_DISMISS_DELAY + Duration::from_millis(1);
                black_box(service.tick(later))
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_add_remove, bench_tick);
criterion_main!(benches);
