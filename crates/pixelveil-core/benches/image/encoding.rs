use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use pixelveil_core::media::image::{embed_image, embed_text};

pub fn image_encoding(c: &mut Criterion) {
    let carrier = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let secret = RgbImage::from_fn(256, 256, |x, y| Rgb([y as u8, x as u8, 128]));

    c.bench_function("Text Encoding", |b| {
        b.iter(|| embed_text(&carrier, "Hello World").expect("Cannot hide secret message"))
    });
    c.bench_function("Image Encoding", |b| {
        b.iter(|| embed_image(&carrier, &secret).expect("Cannot hide secret image"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
