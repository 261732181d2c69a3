use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ean13render::{encode, render, BarcodeRenderer, RenderConfig};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box("4006381333931")).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let seq = encode("4006381333931").unwrap();
    let cfg = RenderConfig {
        scale: 4.0,
        height: 120.0,
        ..Default::default()
    };
    c.bench_function("render_scale4", |b| {
        b.iter(|| render(black_box(&seq), black_box(&cfg)).unwrap())
    });
}

fn bench_prepared_vs_cold(c: &mut Criterion) {
    let cfg = RenderConfig {
        scale: 2.0,
        height: 60.0,
        ..Default::default()
    };
    let mut cold = BarcodeRenderer::with_config(cfg);
    cold.set_barcode("5901234123457");
    let mut prepared = cold.clone();
    prepared.prepare().unwrap();

    c.bench_function("barcode_image_cold", |b| {
        b.iter(|| cold.barcode_image().unwrap())
    });
    c.bench_function("barcode_image_prepared", |b| {
        b.iter(|| prepared.barcode_image().unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_render, bench_prepared_vs_cold);
criterion_main!(benches);
