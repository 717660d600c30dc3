use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fx_core::{PathBuilder, PathOutline, Vec2};

fn wavy_outline(cycles: usize) -> PathOutline {
    let width = 1200.0 / cycles as f32;
    let mut builder = PathBuilder::new().move_to(0.0, 60.0);
    for i in 0..cycles {
        let x = i as f32 * width;
        builder = builder.cubic_to(
            Vec2::new(x + width * 0.25, 45.0),
            Vec2::new(x + width * 0.4, 12.0),
            Vec2::new(x + width * 0.5, 12.0),
        );
    }
    builder.line_to(1200.0, 120.0).line_to(0.0, 120.0).close().build()
}

fn bench_svg_path_64_cubics(c: &mut Criterion) {
    let outline = wavy_outline(64);
    c.bench_function("svg_path_64_cubics", |b| {
        b.iter(|| black_box(outline.to_svg_path()));
    });
}

fn bench_cubic_sample_1000(c: &mut Criterion) {
    let outline = wavy_outline(1);
    c.bench_function("cubic_sample_1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(outline.point_at(1, i as f32 / 1000.0));
            }
        });
    });
}

fn bench_bounds(c: &mut Criterion) {
    let outline = wavy_outline(64);
    c.bench_function("bounds_64_cubics", |b| {
        b.iter(|| black_box(outline.bounds()));
    });
}

criterion_group!(benches, bench_svg_path_64_cubics, bench_cubic_sample_1000, bench_bounds);
criterion_main!(benches);
