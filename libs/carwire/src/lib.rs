//! carwire is a Rust library for reading and writing CAR (Content Addressable aRchive) files,
//! which are used in the IPFS ecosystem to store collections of content-addressed data.
//!
//! The library handles both CAR v1 and CAR v2 archives, and provides:
//! - a streaming decoder ([CarDecoder]) producing blocks, or block locations, lazily from any
//!   byte source (in-memory buffer, `AsyncRead`, or any [cursor::ByteCursor]),
//! - an indexer ([CarIndexer]) and a random-access reader over CAR files ([IndexedReader]),
//! - an in-place encoder into a caller-owned buffer ([write::CarBufferWriter]),
//! - an asynchronous encoder keeping pipelined writes in order ([write::OrderedCarWriter]).
//!
//! The low-level "wire" format (varints, CIDs, block frames, headers) is exposed in [wire].
//!
//! ## Usages
//!
//! ### Print the CIDs of the blocks of a CAR file
//! ```rust,no_run
//! use futures::TryStreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), carwire::CarError> {
//! let file = tokio::fs::File::open("archive.car").await?;
//! let mut decoder = carwire::CarDecoder::from_reader(file).await?;
//! println!("CAR v{} with roots {:?}", decoder.version(), decoder.roots());
//!
//! let blocks = decoder.block_indexes();
//! tokio::pin!(blocks);
//! while let Some(index) = blocks.try_next().await? {
//!     println!("{} ({} bytes at {})", index.cid, index.payload_length, index.payload_offset);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Encode an archive in memory
//! ```rust
//! use carwire::write::CarBufferWriter;
//! use carwire::Block;
//!
//! // Raw block, with a placeholder sha2-256 digest
//! let multihash = cid::multihash::Multihash::<64>::wrap(0x12, &[0u8; 32]).unwrap();
//! let block = Block::new(cid::Cid::new_v1(0x55, multihash), b"hello".to_vec());
//! let mut buffer = vec![0u8; 256];
//! let mut writer = CarBufferWriter::with_roots(&mut buffer, &[block.cid]).unwrap();
//! writer.write(&block).unwrap();
//! let car = writer.close(false).unwrap();
//! assert_eq!(car.len(), 59 + 1 + 36 + 5);
//! ```
//!
//! ## Alternatives
//!
//! Alternatives to this library include:
//! - [rs-car](https://crates.io/crates/rs-car)
//! - [rust-car](https://crates.io/crates/rust-car)
//! - [blockless-car](https://crates.io/crates/blockless-car)

pub mod cursor;
pub mod error;
pub mod index;
pub mod read;
pub mod wire;
pub mod write;

#[cfg(test)]
mod fixtures;

pub use error::CarError;
pub use index::{BlockLocation, CarIndexer, IndexedReader};
pub use read::CarDecoder;
pub use wire::block::{Block, BlockHeader, BlockIndex};
pub use wire::header::CarHeader;
pub use write::{CarBufferWriter, OrderedCarWriter};
