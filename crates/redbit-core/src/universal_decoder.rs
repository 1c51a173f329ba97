use std::io::{Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::MediaPrimitive;

/// generic unveil algorithm
pub trait UnveilAlgorithm<T> {
    /// decodes one bit from a carrier T e.g. a color channel
    fn decode(&self, carrier: T) -> bool;
}

/// generic stegano decoder, every read byte consumes 8 carriers
pub struct Decoder<I, A>
where
    I: Iterator,
    A: UnveilAlgorithm<I::Item>,
{
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator,
    A: UnveilAlgorithm<I::Item>,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator,
    A: UnveilAlgorithm<I::Item>,
{
    /// Collects the bits most significant first. A byte that cannot be completed
    /// because the carriers ran out is dropped.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per carrier
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Vec::with_capacity(buf.len()), BigEndian);

        for carrier in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(self.algorithm.decode(carrier))?;
        }

        let bytes = bit_buffer.into_writer();
        buf[..bytes.len()].copy_from_slice(&bytes);

        Ok(bytes.len())
    }
}

/// default 1 bit unveil strategy, reads the least significant bit
pub struct OneBitUnveil;

impl UnveilAlgorithm<MediaPrimitive> for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::ImageColorChannel(c) => (c & 0x1) > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carriers(colors: &[u8]) -> impl Iterator<Item = MediaPrimitive> + '_ {
        colors.iter().copied().map(MediaPrimitive::from)
    }

    #[test]
    fn should_unveil_bits_most_significant_first() {
        let colors = [
            2, 3, 4, 6, 9, 10, 12, 14, // 0100_1000
            0, 1, 1, 0, 1, 0, 0, 1, // 0110_1001
        ];
        let mut buf = [0; 2];
        Decoder::new(carriers(&colors), OneBitUnveil)
            .read_exact(&mut buf)
            .expect("Cannot read 2 bytes from decoder");

        assert_eq!(&buf, b"Hi");
    }

    #[test]
    fn should_drop_an_incomplete_last_byte() {
        let colors = [1; 12];
        let mut decoder = Decoder::new(carriers(&colors), OneBitUnveil);
        let mut buf = [0; 2];

        assert_eq!(decoder.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0xff);
        assert_eq!(decoder.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn should_not_consume_more_carriers_than_requested() {
        let colors = [0; 24];
        let mut iter = carriers(&colors);
        {
            let mut decoder = Decoder::new(iter.by_ref(), OneBitUnveil);
            let mut buf = [0; 1];
            decoder.read_exact(&mut buf).unwrap();
        }

        assert_eq!(iter.count(), 16);
    }
}
