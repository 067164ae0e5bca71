// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use withers_anchor::{AnchorIndex, AnchorIndexGeneric, Grid, Tolerance, resolve};

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

fn gen_anchors(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn gen_clustered_anchors(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64(), rng.next_f64());
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new((cx + dx).clamp(0.0, 1.0), (cy + dy).clamp(0.0, 1.0)));
        }
    }
    out
}

fn gen_taps(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let taps = gen_taps(256);
    let tol = Tolerance::DEFAULT;
    let mut group = c.benchmark_group("resolve");
    for &n in &[16usize, 64, 256, 1024] {
        let anchors = gen_anchors(n);
        group.throughput(Throughput::Elements(taps.len() as u64));

        group.bench_function(format!("slice_n{n}"), |b| {
            b.iter(|| {
                let hits = taps
                    .iter()
                    .filter(|&&q| resolve(q, &anchors, tol).is_some())
                    .count();
                black_box(hits);
            });
        });

        let flat: AnchorIndex<usize> = anchors.iter().copied().zip(0..).collect();
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter(|| {
                let hits = taps
                    .iter()
                    .filter(|&&q| flat.nearest(q, tol).is_some())
                    .count();
                black_box(hits);
            });
        });

        let mut grid = AnchorIndex::<usize>::with_uniform_grid(0.1);
        for (i, a) in anchors.iter().enumerate() {
            grid.push(*a, i);
        }
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| {
                let hits = taps
                    .iter()
                    .filter(|&&q| grid.nearest(q, tol).is_some())
                    .count();
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let taps = gen_taps(256);
    let anchors = gen_clustered_anchors(16, 32, 0.05);
    let tol = Tolerance::new(0.1);
    let mut group = c.benchmark_group("clustered");
    group.throughput(Throughput::Elements(taps.len() as u64));

    let flat: AnchorIndex<usize> = anchors.iter().copied().zip(0..).collect();
    group.bench_function("flatvec_within", |b| {
        b.iter(|| {
            let hits: usize = taps.iter().map(|&q| flat.within(q, tol).len()).sum();
            black_box(hits);
        });
    });

    let grid: AnchorIndexGeneric<usize, Grid> = anchors.iter().copied().zip(0..).collect();
    group.bench_function("grid_within", |b| {
        b.iter(|| {
            let hits: usize = taps.iter().map(|&q| grid.within(q, tol).len()).sum();
            black_box(hits);
        });
    });
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let anchors = gen_anchors(1024);
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    group.bench_function("flatvec_push_1024", |b| {
        b.iter_batched(
            AnchorIndex::<usize>::new,
            |mut idx| {
                for (i, a) in anchors.iter().copied().enumerate() {
                    let _ = idx.push(a, i);
                }
                black_box(idx.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("grid_push_1024", |b| {
        b.iter_batched(
            || AnchorIndex::<usize>::with_uniform_grid(0.1),
            |mut idx| {
                for (i, a) in anchors.iter().copied().enumerate() {
                    let _ = idx.push(a, i);
                }
                black_box(idx.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_clustered, bench_build);
criterion_main!(benches);
