// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parterre_dcel::{Dcel, Vertex};
use parterre_rbtree::{RbTree, TreeOrder};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Key(u64);

impl TreeOrder for Key {
    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Distinct odd keys in a scrambled order. The multiplier spreads sequential
/// indices without overflowing, so the keys stay unique; keeping them all odd
/// lets the search bench probe guaranteed misses with even values.
fn gen_distinct_keys(count: usize) -> Vec<Key> {
    (0..count as u64)
        .map(|i| Key((i.wrapping_mul(0x9E37_79B9) << 1) | 1))
        .collect()
}

fn gen_random_vertices(count: usize, extent: f64) -> Vec<Vertex> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Vertex::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ));
    }
    out
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree_insert");
    for &n in &[1024usize, 4096, 16384] {
        let keys = gen_distinct_keys(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("scrambled_n{}", n), |b| {
            b.iter_batched(
                RbTree::new,
                |mut tree| {
                    for &k in &keys {
                        tree.insert(k).unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let n = 4096;
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("ascending_n4096", |b| {
        b.iter_batched(
            RbTree::new,
            |mut tree| {
                for i in 0..n as u64 {
                    tree.insert(Key(i)).unwrap();
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree_search");
    let keys = gen_distinct_keys(16384);
    let mut tree = RbTree::new();
    for &k in &keys {
        tree.insert(k).unwrap();
    }
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("hits", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for k in &keys {
                found += usize::from(tree.contains(k));
            }
            black_box(found);
        })
    });
    group.bench_function("misses", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for k in &keys {
                // Stored keys are all odd; clearing the low bit never hits.
                found += usize::from(tree.contains(&Key(k.0 ^ 1)));
            }
            black_box(found);
        })
    });
    group.finish();
}

fn bench_remove_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree_teardown");
    let keys = gen_distinct_keys(4096);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("remove_all", |b| {
        b.iter_batched(
            || {
                let mut tree = RbTree::new();
                for &k in &keys {
                    tree.insert(k).unwrap();
                }
                tree
            },
            |mut tree| {
                for k in &keys {
                    black_box(tree.remove(k));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("drain_sorted", |b| {
        b.iter_batched(
            || {
                let mut tree = RbTree::new();
                for &k in &keys {
                    tree.insert(k).unwrap();
                }
                tree
            },
            |tree| {
                let mut last = 0u64;
                for k in tree {
                    last = k.0;
                }
                black_box(last);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_dcel_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dcel");
    // Half the inserts are repeats of the first half.
    let mut vertices = gen_random_vertices(2048, 2000.0);
    let repeats = vertices.clone();
    vertices.extend(repeats);
    group.throughput(Throughput::Elements(vertices.len() as u64));
    group.bench_function("insert_vertex_half_duplicates", |b| {
        b.iter_batched(
            Dcel::new,
            |mut dcel| {
                for &v in &vertices {
                    let _ = dcel.insert_vertex(v).unwrap();
                }
                black_box(dcel.vertex_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_btreeset_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("btreeset_baseline");
    let keys = gen_distinct_keys(4096);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("insert_then_iterate", |b| {
        b.iter_batched(
            BTreeSet::new,
            |mut set| {
                for &k in &keys {
                    set.insert(k);
                }
                let mut last = 0u64;
                for k in set {
                    last = k.0;
                }
                black_box(last);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_search,
    bench_remove_and_drain,
    bench_dcel_dedup,
    bench_btreeset_baseline,
);
criterion_main!(benches);
