use std::io::{ErrorKind, Read};

use byteorder::ReadBytesExt;

use crate::error::SteganoError;
use crate::result::Result;

/// Marks the end of a hidden message, the pixels carry no length field.
pub const TERMINATOR: u8 = b'$';

/// A text message that can be hidden, one byte per character.
///
/// Only characters with an ordinal value up to 255 (Latin-1) are accepted and
/// the [`TERMINATOR`] must not be part of the text. The bytes are checked once,
/// at construction, and kept as they get hidden.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Message {
    payload: Vec<u8>,
}

impl Message {
    pub fn new<S: AsRef<str>>(text: S) -> Result<Self> {
        let payload = text
            .as_ref()
            .chars()
            .enumerate()
            .map(|(position, character)| match u8::try_from(character) {
                Ok(TERMINATOR) => Err(SteganoError::ReservedTerminator(position)),
                Ok(byte) => Ok(byte),
                Err(_) => Err(SteganoError::InvalidInput {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { payload })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// the text, every byte mapped to the char with the same ordinal
    pub fn text(&self) -> String {
        self.payload.iter().copied().map(char::from).collect()
    }

    pub fn into_text(self) -> String {
        self.text()
    }

    /// number of characters, which equals the number of payload bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// number of bits the message occupies in a carrier, terminator included
    pub fn bit_len(&self) -> usize {
        (self.len() + 1) << 3
    }

    /// the payload bytes followed by the terminator
    pub fn to_raw_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.payload.len() + 1);
        data.extend_from_slice(&self.payload);
        data.push(TERMINATOR);

        data
    }

    /// Reads bytes until the terminator shows up. Nothing after the terminator is consumed.
    pub fn from_raw_data(dec: &mut dyn Read) -> Result<Self> {
        let mut payload = Vec::new();
        loop {
            let byte = match dec.read_u8() {
                Ok(b) => b,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(SteganoError::MalformedPayload(payload.len()));
                }
                Err(e) => return Err(e.into()),
            };
            if byte == TERMINATOR {
                break;
            }
            payload.push(byte);
        }

        Ok(Self { payload })
    }
}

impl TryFrom<&str> for Message {
    type Error = SteganoError;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}
