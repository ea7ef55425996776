//! Benchmark fuer den Preview-Hotpath pro Drag-Frame.
//!
//! Misst die Kosten, die bei jeder Pointer-Bewegung anfallen:
//! - Modell-Auswertung ueber 250 Stuetzstellen (einzeln und zusammengesetzt)
//! - Frame-Aufbau der Blit-Pipeline bei aktivem Hintergrund-Cache

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use kurvenfit::{BlitSurface, CombineOp, CurveKind, ModelExpr, PlotShape, PREVIEW_SAMPLES};
use std::hint::black_box;

/// Misst: Auswerten eines Modells ueber das Preview-Fenster.
fn bench_preview_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_sampling");

    let exprs = [
        ("gauss", ModelExpr::leaf(CurveKind::Gaussian)),
        (
            "gauss_plus_line",
            ModelExpr::combine(
                CombineOp::Add,
                ModelExpr::leaf(CurveKind::Gaussian),
                ModelExpr::leaf(CurveKind::Line),
            ),
        ),
        (
            "nested_three_terms",
            ModelExpr::combine(
                CombineOp::Add,
                ModelExpr::combine(
                    CombineOp::Mul,
                    ModelExpr::leaf(CurveKind::Line),
                    ModelExpr::leaf(CurveKind::Gaussian),
                ),
                ModelExpr::leaf(CurveKind::Sine),
            ),
        ),
    ];

    for (name, expr) in exprs {
        let params: Vec<f64> = (0..expr.param_count())
            .map(|i| 1.0 + 0.1 * i as f64)
            .collect();
        group.bench_with_input(BenchmarkId::new("eval_250", name), &expr, |b, expr| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..PREVIEW_SAMPLES {
                    let x = -5.0 + 0.08 * i as f64;
                    sum += expr.eval(black_box(x), black_box(&params));
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Misst: Frame-Aufbau mit gecachtem Hintergrund vs. Voll-Redraw.
fn bench_blit_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit_frame");

    for &background_points in &[100usize, 1_000, 10_000] {
        let static_layer = vec![PlotShape::Points {
            points: (0..background_points)
                .map(|i| Vec2::new((i % 100) as f32, (i / 100) as f32))
                .collect(),
            radius: 3.0,
            color: [0.4, 0.4, 0.4, 1.0],
        }];
        let curve = PlotShape::solid_polyline(
            (0..PREVIEW_SAMPLES)
                .map(|i| Vec2::new(i as f32, (i as f32 * 0.1).sin()))
                .collect(),
            1.5,
            [0.2, 0.4, 0.9, 1.0],
        );

        let mut cached = BlitSurface::new();
        cached.enable(static_layer.clone());
        let artist = cached.add_dynamic();
        cached.set_shape(artist, curve.clone());
        cached.draw();

        group.bench_with_input(
            BenchmarkId::new("cached_background", background_points),
            &(),
            |b, _| {
                b.iter(|| {
                    cached.set_shape(artist, black_box(curve.clone()));
                    black_box(cached.draw().len())
                })
            },
        );

        let mut uncached = BlitSurface::new();
        uncached.enable(static_layer.clone());
        uncached.disable();
        let artist = uncached.add_dynamic();
        uncached.set_shape(artist, curve.clone());

        group.bench_with_input(
            BenchmarkId::new("full_redraw", background_points),
            &(),
            |b, _| {
                b.iter(|| {
                    uncached.set_shape(artist, black_box(curve.clone()));
                    black_box(uncached.draw().len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_preview_sampling, bench_blit_frame);
criterion_main!(benches);
