// Copyright 2025 the Withers Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size};
use withers_fit::{DisplayTransform, EdgePolicy, ScaleMode};
use withers_surface::{AnatomicalEntity, InteractionSurface, SurfaceConfig, TouchEvent};

fn entities(n: u32) -> Vec<AnatomicalEntity> {
    (0..n)
        .map(|i| {
            let f = f64::from(i);
            AnatomicalEntity::new(i, "m", (f * 0.618_034) % 1.0, (f * 0.414_214) % 1.0)
        })
        .collect()
}

fn taps(n: u32, view: Size) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let f = f64::from(i);
            Point::new((f * 37.0) % view.width, (f * 53.0) % view.height)
        })
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let image = Size::new(1200.0, 900.0);
    let view = Size::new(390.0, 844.0);
    let points = taps(512, view);
    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Elements(points.len() as u64));
    for (name, mode) in [
        ("fit_center", ScaleMode::FitCenter),
        ("center_crop", ScaleMode::CenterCrop),
        (
            "matrix",
            ScaleMode::Matrix(
                Affine::rotate(0.2)
                    .then_scale(0.4)
                    .then_translate((20.0, 60.0).into()),
            ),
        ),
    ] {
        group.bench_function(format!("compute_{name}"), |b| {
            b.iter(|| black_box(DisplayTransform::compute(image, view, mode)));
        });
        let Some(t) = DisplayTransform::compute(image, view, mode) else {
            continue;
        };
        group.bench_function(format!("screen_to_normalized_{name}"), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&p| t.screen_to_normalized(p, EdgePolicy::Reject).is_some())
                    .count();
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let view = Size::new(500.0, 400.0);
    let points = taps(256, view);
    let mut group = c.benchmark_group("surface");
    group.throughput(Throughput::Elements(points.len() as u64));
    for &n in &[24u32, 200] {
        let mut surface: InteractionSurface = InteractionSurface::new(SurfaceConfig::default());
        surface.set_image(Some(Size::new(1000.0, 800.0)));
        surface.set_view_size(view);
        surface.bind(entities(n), |e| {
            black_box(e.id);
        });
        group.bench_function(format!("tap_n{n}"), |b| {
            let mut t = Duration::ZERO;
            b.iter(|| {
                for &p in &points {
                    t += Duration::from_millis(16);
                    surface.handle_touch(TouchEvent::down(p, t));
                    black_box(surface.handle_touch(TouchEvent::up(p, t)));
                    surface.advance(t);
                    black_box(surface.take_damage());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transform, bench_gestures);
criterion_main!(benches);
