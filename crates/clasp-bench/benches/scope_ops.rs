//! Criterion micro-benchmarks for scope entry/exit and pool cycling.

use clasp::{with_bound, with_scope};
use clasp_bench::bench_pool;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: paired-action scope against hand-paired calls.
fn bench_scope_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_overhead");

    group.bench_function("hand_paired", |b| {
        let counter = std::cell::Cell::new(0u64);
        b.iter(|| {
            counter.set(counter.get() + 1);
            black_box(counter.get());
            counter.set(counter.get() + 1);
        });
    });

    group.bench_function("with_scope", |b| {
        let counter = std::cell::Cell::new(0u64);
        b.iter(|| {
            with_scope(
                || counter.set(counter.get() + 1),
                || counter.set(counter.get() + 1),
                || black_box(counter.get()),
            );
        });
    });

    group.finish();
}

/// Benchmark: one acquire/write/release cycle through a bound scope.
fn bench_pool_cycle(c: &mut Criterion) {
    let mut pool = bench_pool();

    c.bench_function("pool_cycle", |b| {
        b.iter(|| {
            let block = pool.acquire().unwrap();
            let released = std::cell::Cell::new(false);
            with_bound(
                block,
                |block| {
                    pool.release(block).unwrap();
                    released.set(true);
                },
                |block| {
                    block[0] = 42;
                    black_box(block[0]);
                },
            );
            black_box(released.get());
        });
    });
}

/// Benchmark: teardown of eight nested scopes.
fn bench_nested_teardown(c: &mut Criterion) {
    fn nest(depth: usize, counter: &std::cell::Cell<u64>) {
        if depth == 0 {
            return;
        }
        with_scope(
            || (),
            || counter.set(counter.get() + 1),
            || nest(depth - 1, counter),
        );
    }

    c.bench_function("nested_teardown_8", |b| {
        let counter = std::cell::Cell::new(0u64);
        b.iter(|| {
            nest(8, &counter);
            black_box(counter.get());
        });
    });
}

criterion_group!(
    benches,
    bench_scope_overhead,
    bench_pool_cycle,
    bench_nested_teardown
);
criterion_main!(benches);
