//! CARv2 pragma and fixed header
//!
//! A CARv2 archive is laid out as:
//! - the 11-byte [PRAGMA], a CARv1-shaped header frame encoding `{version: 2}`,
//! - the 40-byte [CarV2Header],
//! - a complete CARv1 archive spanning `data_size` bytes from `data_offset`,
//! - an optional index at `index_offset`, which this crate never reads.
//!
//! The roots of a CARv2 archive are those of its embedded CARv1 header.

mod header;

pub use header::{CarV2Header, Characteristics};

/// CAR v2 pragma bytes
///
/// `varint(10) ++ {version: 2}` in DAG-CBOR.
pub const PRAGMA: [u8; 11] = [
    0x0a, 0xa1, 0x67, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x02,
];

/// Size of the fixed CARv2 header following the pragma
pub const HEADER_LEN: usize = 40;

/// Offset of the embedded CARv1 payload when it immediately follows the fixed header
pub const DEFAULT_DATA_OFFSET: u64 = (PRAGMA.len() + HEADER_LEN) as u64;
