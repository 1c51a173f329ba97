use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;
use redbit_core::media::image::encoder::ImageRedChannelMut;
use redbit_core::media::{ChannelLayout, PixelGrid};
use redbit_core::universal_encoder::{Encoder, OneBitHide};

pub fn image_encoding(c: &mut Criterion) {
    let plain = PixelGrid::filled(512, 512, ChannelLayout::Rgba, &[120, 80, 40, 255])
        .expect("Cannot create carrier grid");
    let secret_message = b"Hello World!";

    c.bench_function("Image Encoding", |b| {
        let mut carrier = plain.clone();

        b.iter(|| {
            Encoder::new(ImageRedChannelMut::new(&mut carrier), OneBitHide)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });

    c.bench_function("Image Encoding into a fresh grid", |b| {
        b.iter(|| redbit_core::encode(&plain, "Hello World!").expect("Cannot hide message"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
