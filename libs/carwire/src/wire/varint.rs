//! CAR archives make use of variable-length integers (varints) for every length prefix.
//!
//! This module provides utilities for encoding and decoding varints according to the CAR specification.
//!
//! Actually, CAR varints follow the [LEB128 encoding scheme](https://en.wikipedia.org/wiki/LEB128)
//! (unsigned flavour, as in the [multiformats unsigned-varint](https://github.com/multiformats/unsigned-varint) spec).

use crate::CarError;
use crate::cursor::ByteCursor;

/// Maximal encoded length of a 64-bit varint
pub const MAX_VARINT_LEN: usize = 10;

/// Unsigned variable-length integer (varint) as used in CAR files.
///
/// This struct represents an unsigned varint, which can be encoded and decoded using LEB128 encoding.
/// To do so,
/// - Use `UnsignedVarint::encode()` to encode the varint into a vector of bytes,
///   or `UnsignedVarint::encode_into()` to write it into an existing buffer.
/// - Use `UnsignedVarint::decode(bytes)` to decode a varint from a slice of bytes, which returns
///   the decoded varint and the number of bytes read.
///
/// ## Examples
/// ```
/// use carwire::wire::varint::UnsignedVarint;
///
/// let varint = UnsignedVarint(624485);
/// let encoded = varint.encode();
/// assert_eq!(encoded, vec![0xE5, 0x8E, 0x26]);
/// assert_eq!(varint.encoded_len(), 3);
///
/// let (decoded, bytes_read) = UnsignedVarint::decode(&encoded).unwrap();
/// assert_eq!(decoded, UnsignedVarint(624485));
/// assert_eq!(bytes_read, encoded.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsignedVarint(
    /// The underlying unsigned integer value of the varint.
    pub u64,
);

impl UnsignedVarint {
    /// Encodes the UnsignedVarint into a vector of bytes using LEB128 encoding.
    pub fn encode(self) -> Vec<u8> {
        let mut bytes = [0u8; MAX_VARINT_LEN];
        let len = self.encode_into(&mut bytes);
        bytes[..len].to_vec()
    }

    /// Encodes the UnsignedVarint at the start of `buf`, returning the number of bytes written.
    ///
    /// `buf` must be at least [UnsignedVarint::encoded_len] bytes long.
    pub fn encode_into(self, buf: &mut [u8]) -> usize {
        let mut rest = self.0;
        let mut written = 0;
        while rest >= 0x80 {
            buf[written] = (rest as u8) | 0x80;
            rest >>= 7;
            written += 1;
        }
        buf[written] = rest as u8;
        written + 1
    }

    /// Number of bytes of the LEB128 encoding
    pub fn encoded_len(self) -> usize {
        let bits = 64 - self.0.leading_zeros() as usize;
        bits.div_ceil(7).max(1)
    }

    /// Decodes an UnsignedVarint from a slice of bytes.
    ///
    /// ## Returns
    /// - `Some((UnsignedVarint, bytes_read))` if decoding is successful,
    ///   where `UnsignedVarint` is the decoded varint and `bytes_read` is the number of bytes consumed during decoding.
    /// - `None` if the input bytes do not represent a valid varint (e.g., incomplete varint or overflow).
    pub fn decode(bytes: &[u8]) -> Option<(Self, usize)> {
        let mut value = 0u64;
        for (i, &byte) in bytes.iter().take(MAX_VARINT_LEN).enumerate() {
            let group = u64::from(byte & 0x7F);
            // The 10th byte may only carry the 64th bit
            if i == MAX_VARINT_LEN - 1 && group > 1 {
                return None;
            }
            value |= group << (7 * i);
            if byte & 0x80 == 0 {
                return Some((UnsignedVarint(value), i + 1));
            }
        }
        None
    }
}

impl From<u64> for UnsignedVarint {
    fn from(value: u64) -> Self {
        UnsignedVarint(value)
    }
}

impl From<UnsignedVarint> for u64 {
    fn from(varint: UnsignedVarint) -> Self {
        varint.0
    }
}

/// Reads one varint from the cursor, committing only the bytes it spans.
pub async fn read_varint<C: ByteCursor>(cursor: &mut C) -> Result<u64, CarError> {
    let bytes = cursor.up_to(MAX_VARINT_LEN).await?;
    let available = bytes.len();
    match UnsignedVarint::decode(bytes) {
        Some((varint, size)) => {
            cursor.seek(size as u64).await?;
            Ok(varint.0)
        }
        None if available < MAX_VARINT_LEN => Err(CarError::EndOfData {
            requested: available as u64 + 1,
            available: available as u64,
        }),
        None => Err(CarError::InvalidVarint),
    }
}
