//! CAR encoders
//!
//! - [CarBufferWriter] encodes synchronously into a caller-owned buffer, reserving room for the
//!   header ahead of the blocks.
//! - [OrderedCarWriter] encodes asynchronously to an `AsyncWrite` sink, accepting pipelined
//!   operations while keeping frames in call order.
//!
//! The frame encoders they rely on are in [crate::wire::block].

mod buffer;
mod ordered;

pub use buffer::{
    CarBufferWriter, DEFAULT_CID_LEN, block_length, estimate_header_size,
    estimate_header_size_with, header_length,
};
pub use ordered::OrderedCarWriter;
