use std::io::{Result, Write};

use crate::media::MediaPrimitiveMut;
use crate::BitIterator;

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm<T> {
    /// encodes one bit onto a carrier T e.g. a color channel
    fn encode(&self, carrier: T, bit: bool);
}

/// generic stegano encoder, every written byte consumes 8 carriers
pub struct Encoder<I, A>
where
    I: Iterator,
    A: HideAlgorithm<I::Item>,
{
    pub carriers: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A>
where
    I: Iterator,
    A: HideAlgorithm<I::Item>,
{
    pub fn new(carriers: I, algorithm: A) -> Self {
        Encoder {
            carriers,
            algorithm,
        }
    }
}

impl<I, A> Write for Encoder<I, A>
where
    I: Iterator,
    A: HideAlgorithm<I::Item>,
{
    /// Hides the bits of `buf` most significant first. When the carriers run out
    /// the bits hidden so far stay in place and only complete bytes are reported.
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bit_written = 0;
        for (bit, carrier) in BitIterator::new(buf).zip(self.carriers.by_ref()) {
            self.algorithm.encode(carrier, bit == 1);
            bit_written += 1;
        }

        Ok(bit_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// default 1 bit hiding strategy, replaces the least significant bit
pub struct OneBitHide;

impl HideAlgorithm<MediaPrimitiveMut<'_>> for OneBitHide {
    #[inline(always)]
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) {
        match carrier {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & (u8::MAX - 1)) | u8::from(bit);
            }
        }
    }
}
