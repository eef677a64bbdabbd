use anatomap::render::{BucketMemo, HeadlessRenderer, render_body, render_body_memoized};
use anatomap::{AssetLibrary, DiagnosticsMode, RenderConfig, UserEntry};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

fn assets() -> AssetLibrary {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/assets/body.json");
    let text = std::fs::read_to_string(path).expect("fixture");
    AssetLibrary::from_json_str(&text).expect("assets parse")
}

fn entries() -> Vec<UserEntry> {
    let slugs = [
        "chest", "biceps", "deltoids", "abs", "obliques", "forearm", "quadriceps", "calves",
    ];
    let mut out = Vec::new();
    for (i, slug) in slugs.iter().enumerate() {
        let progress = (i as f64 * 27.0) - 100.0;
        out.push(UserEntry::new(format!("{slug}-left")).with_progress(progress));
        out.push(UserEntry::new(format!("{slug}-right")).with_intensity((i % 2) as i64 + 1));
    }
    out
}

fn config() -> RenderConfig {
    RenderConfig::default().with_diagnostics(DiagnosticsMode::Off)
}

fn bench_render_body(c: &mut Criterion) {
    let assets = assets();
    let entries = entries();
    let config = config();
    c.bench_function("render_body", |b| {
        b.iter(|| render_body(black_box(&assets), black_box(&entries), &config).unwrap())
    });
}

fn bench_render_body_memoized(c: &mut Criterion) {
    let assets = assets();
    let entries: Arc<[UserEntry]> = entries().into();
    let config = config();
    let mut memo = BucketMemo::new();
    c.bench_function("render_body_memoized", |b| {
        b.iter(|| {
            render_body_memoized(&mut memo, black_box(&assets), &entries, &config).unwrap();
        })
    });
}

fn bench_render_svg_sync(c: &mut Criterion) {
    let renderer = HeadlessRenderer::new(assets()).with_config(config());
    c.bench_function("render_svg_sync", |b| {
        b.iter_batched(
            entries,
            |entries| renderer.render_svg_sync(&entries).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_render_body,
    bench_render_body_memoized,
    bench_render_svg_sync
);
criterion_main!(benches);
