// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use tabnav::reconcile::{drain_changes, ActiveSectionTracker, LocationHistory, NavigationReconciler};
use tabnav::render::tab_bar_plain;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Groups in this file: `reconcile.drain`, `reconcile.view`
// - Case IDs: `small`, `medium`, `large`.
fn benches_reconcile(c: &mut Criterion) {
    let cases = fixtures::cases();

    let mut group = c.benchmark_group("reconcile.drain");
    for case in &cases {
        group.throughput(Throughput::Elements(case.paths.len() as u64));
        group.bench_function(case.id, |b| {
            b.iter_batched(
                || {
                    let tracker = ActiveSectionTracker::new();
                    let reconciler =
                        NavigationReconciler::new(case.config.clone(), tracker.reader());
                    (tracker, reconciler, LocationHistory::new(fixtures::BASE_PATH))
                },
                |(tracker, mut reconciler, mut history)| {
                    let mut passes = 0usize;
                    for path in &case.paths {
                        history.push(path.as_str());
                        passes += drain_changes(&mut history, &mut reconciler, &tracker)
                            .expect("fixture has no redirect loops");
                    }
                    black_box(passes)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("reconcile.view");
    for case in &cases {
        let tracker = ActiveSectionTracker::new();
        let mut reconciler = NavigationReconciler::new(case.config.clone(), tracker.reader());
        let mut history = LocationHistory::new(fixtures::BASE_PATH);
        drain_changes(&mut history, &mut reconciler, &tracker).expect("mount settles");

        group.throughput(Throughput::Elements(case.config.items.len() as u64));
        group.bench_function(case.id, |b| {
            b.iter(|| black_box(tab_bar_plain(&reconciler.view()).len()))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_reconcile
}
criterion_main!(benches);
