use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frostpaint::brands::BrandMatcher;
use frostpaint::color::{variants, ColorNamer, Rgb};
use frostpaint::image_data::WallImage;
use frostpaint::preview::{PreviewCompositor, PreviewOptions};
use frostpaint::sampler::RegionSampler;
use image::{Rgba, RgbaImage};

fn gradient(width: u32, height: u32) -> WallImage {
    WallImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    }))
}

fn bench_hex_to_rgb(c: &mut Criterion) {
    c.bench_function("hex_to_rgb", |b| {
        b.iter(|| Rgb::from_hex(black_box("#FF5733")))
    });
}

fn bench_color_name(c: &mut Criterion) {
    let namer = ColorNamer::default();
    let color = Rgb::new(0xff, 0x57, 0x33);
    c.bench_function("color_name", |b| b.iter(|| namer.name(black_box(color))));
}

fn bench_variants(c: &mut Criterion) {
    let namer = ColorNamer::default();
    let color = Rgb::new(0x33, 0x66, 0xff);
    c.bench_function("variants", |b| {
        b.iter(|| variants(&namer, black_box(color), true))
    });
}

fn bench_brand_matches(c: &mut Criterion) {
    let matcher = BrandMatcher::default();
    let color = Rgb::new(0x33, 0x66, 0xff);
    c.bench_function("brand_matches", |b| {
        b.iter(|| matcher.matches(black_box(color)))
    });
}

fn bench_region_sample(c: &mut Criterion) {
    let image = gradient(1024, 768);
    let sampler = RegionSampler::default();
    c.bench_function("region_sample_1024x768", |b| {
        b.iter(|| sampler.sample(black_box(&image), 6))
    });
}

fn bench_preview_render(c: &mut Criterion) {
    let image = gradient(320, 240);
    let compositor = PreviewCompositor::default();
    let options = PreviewOptions {
        shadow_tracking: true,
        ..Default::default()
    };
    c.bench_function("preview_render_320x240", |b| {
        b.iter(|| compositor.render(black_box(&image), Rgb::new(0, 150, 136), &options))
    });
}

criterion_group!(
    benches,
    bench_hex_to_rgb,
    bench_color_name,
    bench_variants,
    bench_brand_matches,
    bench_region_sample,
    bench_preview_render,
);
criterion_main!(benches);
