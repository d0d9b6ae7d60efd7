// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use tabnav::route::{follow_redirects, resolve, Decision};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Groups in this file: `route.resolve`, `route.follow_redirects`
// - Case IDs: `small`, `medium`, `large`.
fn checksum_decision(decision: &Decision) -> u64 {
    match decision {
        Decision::NoAction => 1,
        Decision::RedirectToAlias { target } => 2u64.wrapping_mul(131) + target.len() as u64,
        Decision::RedirectToBase { target } => 3u64.wrapping_mul(131) + target.len() as u64,
    }
}

fn benches_resolve(c: &mut Criterion) {
    let cases = fixtures::cases();

    let mut group = c.benchmark_group("route.resolve");
    for case in &cases {
        group.throughput(Throughput::Elements(case.paths.len() as u64));
        group.bench_function(case.id, |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for path in &case.paths {
                    let decision = resolve(
                        black_box(path),
                        &case.config.base_path,
                        case.config.items.as_slice(),
                        &case.config.hidden,
                    );
                    acc = acc.wrapping_mul(31).wrapping_add(checksum_decision(&decision));
                }
                black_box(acc)
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("route.follow_redirects");
    for case in &cases {
        group.throughput(Throughput::Elements(case.paths.len() as u64));
        group.bench_function(case.id, |b| {
            b.iter(|| {
                let mut hops = 0usize;
                for path in &case.paths {
                    let chain = follow_redirects(
                        black_box(path),
                        &case.config.base_path,
                        case.config.items.as_slice(),
                        &case.config.hidden,
                    )
                    .expect("fixture has no redirect loops");
                    hops += chain.len();
                }
                black_box(hops)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_resolve
}
criterion_main!(benches);
