use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Read;
use redbit_core::media::image::decoder::ImageRedChannel;
use redbit_core::media::{ChannelLayout, PixelGrid};
use redbit_core::universal_decoder::{Decoder, OneBitUnveil};

pub fn image_decoding(c: &mut Criterion) {
    let carrier = PixelGrid::filled(512, 512, ChannelLayout::Rgba, &[120, 80, 40, 255])
        .expect("Cannot create carrier grid");
    let secret = redbit_core::encode(&carrier, "Hello World!").expect("Cannot hide message");

    c.bench_function("Image Decoding", |b| {
        let mut buf = [0; 12];

        b.iter(|| {
            Decoder::new(ImageRedChannel::new(&secret), OneBitUnveil)
                .read_exact(&mut buf)
                .expect("Failed to read 12 bytes");
        })
    });

    c.bench_function("Image Decoding until terminator", |b| {
        b.iter(|| redbit_core::decode(&secret).expect("Failed to unveil message"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
