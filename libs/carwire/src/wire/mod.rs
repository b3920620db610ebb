//! Low-level wire format of CAR archives
//!
//! Each submodule decodes (through a [ByteCursor](crate::cursor::ByteCursor)) and encodes one
//! piece of the format: varints, CIDs, block frames and headers.

pub mod block;
pub mod cid;
pub mod header;
pub mod v1;
pub mod v2;
pub mod varint;
