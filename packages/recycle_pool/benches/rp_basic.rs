//! Basic benchmarks for the `recycle_pool` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycle_pool::RecyclePool;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

const BUFFER_CAPACITY: usize = 4096;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("rp_basic");

    group.bench_function("build_empty", |b| {
        b.iter(|| {
            let pool: RecyclePool<Vec<u8>> =
                RecyclePool::builder(|| Vec::with_capacity(BUFFER_CAPACITY))
                    .initial_allocation(0)
                    .build();

            drop(black_box(pool));
        });
    });

    group.bench_function("build_batch_of_40", |b| {
        b.iter(|| {
            let pool: RecyclePool<Vec<u8>> =
                RecyclePool::builder(|| Vec::with_capacity(BUFFER_CAPACITY)).build();

            drop(black_box(pool));
        });
    });

    group.bench_function("get_free_round_trip", |b| {
        let mut pool = RecyclePool::builder(|| Vec::with_capacity(BUFFER_CAPACITY))
            .initialize(|buffer: &mut Vec<u8>, _: &()| buffer.clear())
            .initial_allocation(1)
            .build();

        b.iter(|| {
            let element = pool.get(black_box(&()));
            pool.free(black_box(element));
        });
    });

    group.bench_function("free_scan_depth_100", |b| {
        let mut pool = RecyclePool::builder(|| Vec::with_capacity(BUFFER_CAPACITY))
            .initialize(|buffer: &mut Vec<u8>, _: &()| buffer.clear())
            .initial_allocation(101)
            .build();

        // 100 elements stay on the free list; the round-tripping element is
        // scanned past all of them on every free.
        b.iter(|| {
            let element = pool.get(black_box(&()));
            pool.free(black_box(element));
        });
    });

    group.finish();
}
