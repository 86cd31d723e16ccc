use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use pixelveil_core::diff::find_differences;
use pixelveil_core::media::image::{embed_text, extract_image, extract_text};

pub fn image_decoding(c: &mut Criterion) {
    let carrier = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let with_text = embed_text(&carrier, "Hello World").expect("Cannot hide secret message");

    c.bench_function("Text Decoding", |b| {
        b.iter(|| extract_text(&with_text).expect("Cannot unveil secret message"))
    });
    c.bench_function("Image Decoding", |b| b.iter(|| extract_image(&with_text)));
    c.bench_function("Image Diff", |b| {
        b.iter(|| find_differences(&carrier, &with_text).expect("Same dimensions"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
