use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fx_refraction::{build, FilterGraphCache, LensStyle, RefractionConfig};

fn bench_build_graph(c: &mut Criterion) {
    let config = RefractionConfig::default();
    c.bench_function("build_filter_graph", |b| {
        b.iter(|| black_box(build(black_box(&config))));
    });
}

fn bench_graph_to_svg(c: &mut Criterion) {
    let graph = build(&RefractionConfig::default());
    c.bench_function("filter_graph_to_svg", |b| {
        b.iter(|| black_box(graph.to_svg()));
    });
}

fn bench_cached_graph(c: &mut Criterion) {
    let config = RefractionConfig::default();
    let mut cache = FilterGraphCache::new();
    c.bench_function("cached_filter_graph", |b| {
        b.iter(|| black_box(cache.graph(&config).primitives.len()));
    });
}

fn bench_lens_style(c: &mut Criterion) {
    let config = RefractionConfig::default();
    c.bench_function("lens_style_from_config", |b| {
        b.iter(|| black_box(LensStyle::from_config(black_box(&config))));
    });
}

criterion_group!(
    benches,
    bench_build_graph,
    bench_graph_to_svg,
    bench_cached_graph,
    bench_lens_style
);
criterion_main!(benches);
