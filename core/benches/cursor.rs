//! Benchmarks for cursor and synthesized iteration vs native iteration
//!
//! Run with: `cargo bench --bench cursor`

use std::collections::VecDeque;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use iterable_core::{Iter, Iterable, algo};

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [16, 256, 4096] {
        let vec: Vec<u64> = (0..size).collect();
        let deque: VecDeque<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("slice::Iter", size), &vec, |b, vec| {
            b.iter(|| black_box(vec.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("Iter<Vec>", size), &vec, |b, vec| {
            b.iter(|| black_box(Iter::new(vec).sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("Cursor<Vec>", size), &vec, |b, vec| {
            b.iter(|| {
                let (mut cursor, end) = (vec.begin(), vec.end());
                let mut total = 0u64;
                while cursor != end {
                    total += *cursor;
                    cursor += 1;
                }
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_deque::Iter", size), &deque, |b, deque| {
            b.iter(|| black_box(VecDeque::iter(deque).sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("Iter<VecDeque>", size), &deque, |b, deque| {
            b.iter(|| black_box(Iter::new(deque).sum::<u64>()));
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_unstable");

    for size in [64, 1024] {
        let mut seed = 0x9e37_79b9_u32;
        let input: Vec<u32> = (0..size)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                seed
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("slice", size), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                vec.sort_unstable();
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("algo<Vec>", size), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                let len = vec.len();
                algo::sort_unstable(vec.begin_mut(), len);
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("algo<VecDeque>", size), &input, |b, input| {
            b.iter(|| {
                let mut deque: VecDeque<u32> = input.iter().copied().collect();
                let len = deque.len();
                algo::sort_unstable(deque.begin_mut(), len);
                black_box(deque);
            });
        });
    }

    group.finish();
}

fn bench_lower_bound(c: &mut Criterion) {
    let deque: VecDeque<u32> = (0..4096).map(|x| x * 2).collect();

    c.bench_function("lower_bound<VecDeque>_4096", |b| {
        b.iter(|| black_box(algo::lower_bound(deque.begin(), deque.end(), black_box(&3001)).position()));
    });

    c.bench_function("partition_point<VecDeque>_4096", |b| {
        b.iter(|| black_box(deque.partition_point(|&x| x < black_box(3001))));
    });
}

criterion_group!(benches, bench_sum, bench_sort, bench_lower_bound);
criterion_main!(benches);
