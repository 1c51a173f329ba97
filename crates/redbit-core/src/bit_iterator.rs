use std::io::{ErrorKind, Read};
use std::slice;

/// Iterates the bits of a byte source, most significant bit first.
///
/// Every item is either `0` or `1`. The iterator ends after the last bit of
/// the last byte the source delivers.
pub struct BitIterator<I> {
    remaining: u8,
    iter: I,
    byte: u8,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            remaining: 0,
            iter: s,
            byte: 0,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            let mut b = 0;
            match self.iter.read(slice::from_mut(&mut b)) {
                Ok(0) => return None,
                Ok(..) => {
                    self.byte = b;
                    self.remaining = 8;
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
        self.remaining -= 1;

        Some((self.byte >> self.remaining) & 1)
    }
}
