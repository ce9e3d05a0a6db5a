use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_site::{ContentCatalog, ProjectRenderer};

fn bench_render(c: &mut Criterion) {
    let catalog = ContentCatalog::builtin().expect("built-in catalog");
    let renderer = ProjectRenderer::default();
    let simple = catalog.lookup(1).expect("project 1");
    let rich = catalog.lookup(5).expect("project 5");

    c.bench_function("render_overlay", |b| {
        b.iter(|| renderer.render_overlay(black_box(simple)))
    });

    c.bench_function("render_panel", |b| {
        b.iter(|| renderer.render_panel(black_box(rich)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
