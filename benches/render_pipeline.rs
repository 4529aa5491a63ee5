use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_time_explorer::core::data::fractal_params::FractalParams;
use escape_time_explorer::core::data::surface::SurfaceSize;
use escape_time_explorer::core::palettes::palette::Palette;
use escape_time_explorer::{FractalVariant, PaletteKind, ViewportState, render};
use std::sync::Arc;

fn bench_render(c: &mut Criterion) {
    let surface = SurfaceSize::new(320, 240).expect("valid surface");
    let palette = Arc::new(Palette::generate(PaletteKind::Resonant, 256).expect("valid palette"));
    let mut group = c.benchmark_group("render_320x240");

    for &variant in FractalVariant::ALL {
        for subsample in [1, 4] {
            let params = FractalParams::new(variant, 200, subsample).expect("valid params");
            let viewport =
                ViewportState::new(variant.default_center(), 1.0, surface).expect("valid viewport");

            group.bench_with_input(
                BenchmarkId::new(variant.key(), format!("subsample_{subsample}")),
                &params,
                |b, params| {
                    b.iter(|| render(black_box(&viewport), params, Arc::clone(&palette)));
                },
            );
        }
    }

    group.finish();
}

fn bench_palette_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_256");

    for &kind in PaletteKind::ALL {
        group.bench_function(kind.key(), |b| {
            b.iter(|| Palette::generate(black_box(kind), 256));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_palette_generation);
criterion_main!(benches);
