//! Benchmarks for the generational arena

use arbor_core::alloc::{Arena, IndexSlot};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone, Debug, Default)]
struct NodeData {
    parent: Option<IndexSlot>,
    children: Vec<IndexSlot>,
    enabled: bool,
}

fn bench_arena_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_push");

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut arena = Arena::new();
                for _ in 0..size {
                    arena.push(black_box(NodeData::default()));
                }
                arena
            });
        });
    }

    group.finish();
}

fn bench_arena_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_access");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        let mut arena = Arena::new();
        let slots: Vec<IndexSlot> = (0..size).map(|_| arena.push(NodeData::default())).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut enabled = 0usize;
                for &slot in &slots {
                    if arena.get(black_box(slot)).enabled {
                        enabled += 1;
                    }
                }
                black_box(enabled)
            });
        });
    }

    group.finish();
}

fn bench_arena_remove_and_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena_remove_and_reuse");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut arena = Arena::new();
                    let slots: Vec<IndexSlot> =
                        (0..size).map(|_| arena.push(NodeData::default())).collect();
                    (arena, slots)
                },
                |(mut arena, slots)| {
                    for slot in slots {
                        arena.remove(black_box(slot));
                    }
                    for _ in 0..size {
                        arena.push(NodeData::default());
                    }
                    black_box(arena)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_arena_push,
    bench_arena_access,
    bench_arena_remove_and_reuse
);
criterion_main!(benches);
