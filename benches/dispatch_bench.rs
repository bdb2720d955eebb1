//! Criterion benchmarks for u-dispatch.
//!
//! Uses seeded synthetic batches to compare the three report sorters
//! on shuffled and already-sorted input, and to measure a full drain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_dispatch::dispatch::{DispatchConfig, DispatchEngine};
use u_dispatch::emergency::EmergencyHandler;
use u_dispatch::ordering::ReportOrder;
use u_dispatch::queue::load_batch;
use u_dispatch::sorting::{SortAlgorithm, SortEngine};
use u_dispatch::workload::WorkloadConfig;

// ===========================================================================
// Report sorting
// ===========================================================================

fn bench_sort_shuffled(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_shuffled");
    group.sample_size(20);

    for &n in &[100usize, 1_000, 10_000] {
        let calls = WorkloadConfig::default().with_seed(42).calls(n);
        for alg in SortAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.as_str(), n), &calls, |b, calls| {
                b.iter(|| {
                    let outcome = SortEngine::sort(black_box(calls), alg, &ReportOrder);
                    black_box(outcome)
                })
            });
        }
    }
    group.finish();
}

// Already-sorted input is quicksort's O(n^2) case.
fn bench_sort_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_presorted");
    group.sample_size(10);

    for &n in &[100usize, 1_000] {
        let calls = WorkloadConfig::default().with_seed(7).calls(n);
        let sorted = SortEngine::sort(&calls, SortAlgorithm::Baseline, &ReportOrder).records;
        for alg in SortAlgorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.as_str(), n), &sorted, |b, calls| {
                b.iter(|| {
                    let outcome = SortEngine::sort(black_box(calls), alg, &ReportOrder);
                    black_box(outcome)
                })
            });
        }
    }
    group.finish();
}

// ===========================================================================
// Dispatch
// ===========================================================================

fn bench_dispatch_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_drain");
    group.sample_size(20);

    for &n in &[1_000usize, 10_000] {
        let calls = WorkloadConfig::default()
            .with_seed(42)
            .with_max_subtask_depth(0)
            .calls(n);
        let config = DispatchConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &calls, |b, calls| {
            b.iter(|| {
                let queue = load_batch(calls.clone()).unwrap();
                let run = DispatchEngine::run(queue, &mut EmergencyHandler, &config).unwrap();
                black_box(run)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort_shuffled,
    bench_sort_presorted,
    bench_dispatch_drain
);
criterion_main!(benches);
