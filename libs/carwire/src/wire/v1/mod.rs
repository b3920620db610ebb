//! CARv1 header
//!
//! A CARv1 archive starts with a length-prefixed DAG-CBOR header `{version: 1, roots: [...]}`,
//! followed by block frames (see [crate::wire::block]).

mod header;

pub use header::{CarV1Header, encode_header};
pub(crate) use header::{HeaderFrame, decode_header_frame};
