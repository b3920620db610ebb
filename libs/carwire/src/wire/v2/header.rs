use super::{DEFAULT_DATA_OFFSET, HEADER_LEN};

/// CAR v2 header structure
///
/// The header is 40 bytes in size and is represented as follows:
/// - Bytes 0-15: Characteristics bitfield (two u64 words, Little Endian)
/// - Bytes 16-23: Data offset from the start of the CARv2 pragma (u64, Little Endian)
/// - Bytes 24-31: Data size in bytes (u64, Little Endian)
/// - Bytes 32-39: Index offset from the start of the CARv2 pragma (u64, Little Endian, 0 if no index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarV2Header {
    /// Characteristics bitfield
    pub characteristics: Characteristics,
    /// Data offset from the start of the CARv2 pragma
    pub data_offset: u64,
    /// Data size in bytes
    pub data_size: u64,
    /// Index offset from the start of the CARv2 pragma (0 if no index)
    pub index_offset: u64,
}

impl CarV2Header {
    /// Header of an archive whose CARv1 payload of `data_size` bytes directly follows the
    /// fixed header, without index
    pub fn new(data_size: u64) -> Self {
        CarV2Header {
            characteristics: Characteristics(0),
            data_offset: DEFAULT_DATA_OFFSET,
            data_size,
            index_offset: 0,
        }
    }

    /// Does the archive carry an index?
    pub fn has_index(&self) -> bool {
        self.index_offset != 0
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        self.into()
    }
}

fn le_u64(bytes: &[u8; HEADER_LEN], at: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[at..at + 8]);
    u64::from_le_bytes(word)
}

impl From<[u8; HEADER_LEN]> for CarV2Header {
    fn from(bytes: [u8; HEADER_LEN]) -> Self {
        CarV2Header {
            characteristics: Characteristics::from_words(le_u64(&bytes, 0), le_u64(&bytes, 8)),
            data_offset: le_u64(&bytes, 16),
            data_size: le_u64(&bytes, 24),
            index_offset: le_u64(&bytes, 32),
        }
    }
}

impl From<&CarV2Header> for [u8; HEADER_LEN] {
    fn from(header: &CarV2Header) -> Self {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[0..16].copy_from_slice(&header.characteristics.0.to_le_bytes());
        bytes[16..24].copy_from_slice(&header.data_offset.to_le_bytes());
        bytes[24..32].copy_from_slice(&header.data_size.to_le_bytes());
        bytes[32..40].copy_from_slice(&header.index_offset.to_le_bytes());
        bytes
    }
}

bitfield::bitfield! {
    /// Characteristics bitfield for CARv2 header
    ///
    /// Stored as the little-endian `u128` of the first 16 header bytes, so bit 7 is the
    /// left-most bit of the first byte.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct Characteristics(u128);
    /// Indicates if the CARv2 file is fully indexed
    pub has_full_index, set_has_full_index: 7;
}

impl Characteristics {
    /// Builds the bitfield from its two on-wire words, in wire order
    pub fn from_words(hi: u64, lo: u64) -> Self {
        Characteristics(u128::from(hi) | (u128::from(lo) << 64))
    }

    /// First on-wire word (bytes 0-7)
    pub fn hi(&self) -> u64 {
        self.0 as u64
    }

    /// Second on-wire word (bytes 8-15)
    pub fn lo(&self) -> u64 {
        (self.0 >> 64) as u64
    }
}

impl core::fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Characteristics({:#x}, {:#x})", self.hi(), self.lo())
    }
}
