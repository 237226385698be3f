//! Variable length encoding of unsigned values into URL-safe characters.
//!
//! Every character carries 5 bits of the value, least significant group first. Characters of all groups but
//! the last one have the continuation bit (`32`) set.

use crate::error::CompressionError;

/// Characters of the encoding, indexed by the group value (payload plus continuation bit).
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

const PAYLOAD_BITS: u32 = 5;
const PAYLOAD_MASK: u128 = 0b1_1111;
const CONTINUATION: u8 = 0b10_0000;

/// Appends the encoded value to `out`. Zero is written as a single character.
pub(crate) fn write_value(mut value: u128, out: &mut String) {
    loop {
        let mut group = (value & PAYLOAD_MASK) as u8;
        value >>= PAYLOAD_BITS;
        if value > 0 {
            group |= CONTINUATION;
        }

        out.push(ALPHABET[group as usize] as char);

        if value == 0 {
            break;
        }
    }
}

fn group_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'_' => Some(62),
        b'-' => Some(63),
        _ => None,
    }
}

/// Iterator over the values of an encoded string.
///
/// Yields the byte offset where each value starts together with the value. Stops after the first error.
pub(crate) struct ValueReader<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> ValueReader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn read_value(&mut self) -> Result<u128, CompressionError> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut value = 0u128;
        let mut shift = 0u32;

        loop {
            let Some(&byte) = bytes.get(self.position) else {
                return Err(CompressionError::UnexpectedEnd(self.position));
            };

            // All bytes before `position` are ASCII, so it is always on a char boundary.
            let Some(group) = group_value(byte) else {
                return Err(CompressionError::InvalidCharacter {
                    character: self.input[self.position..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER),
                    position: self.position,
                });
            };

            let payload = (group & PAYLOAD_MASK as u8) as u128;
            if shift >= u128::BITS || (shift > 0 && payload >> (u128::BITS - shift) != 0) {
                return Err(CompressionError::Overflow(start));
            }

            value |= payload << shift;
            shift += PAYLOAD_BITS;
            self.position += 1;

            if group & CONTINUATION == 0 {
                return Ok(value);
            }
        }
    }
}

impl Iterator for ValueReader<'_> {
    type Item = Result<(usize, u128), CompressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.input.len() {
            return None;
        }

        let start = self.position;
        match self.read_value() {
            Ok(value) => Some(Ok((start, value))),
            Err(e) => {
                self.position = self.input.len();
                Some(Err(e))
            }
        }
    }
}
