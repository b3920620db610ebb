//! Streaming decoder for CAR archives
//!
//! [CarDecoder] reads the header of an archive as soon as it is created, then exposes the block
//! frames as a lazy [Stream], either with their payloads ([CarDecoder::blocks]) or as locations
//! only ([CarDecoder::block_indexes]). Both CAR versions are handled transparently: for CARv2
//! archives, reads are confined to the embedded CARv1 payload, so the index region that may follow
//! it is never mistaken for block frames.
//!
//! ## Usages
//!
//! ```rust
//! use futures::TryStreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bytes = carwire::wire::v1::encode_header(&[]).unwrap();
//! let mut decoder = carwire::CarDecoder::from_bytes(bytes).await.unwrap();
//! assert_eq!(decoder.version(), 1);
//! assert!(decoder.roots().is_empty());
//!
//! let blocks: Vec<carwire::Block> = decoder.blocks().try_collect().await.unwrap();
//! assert!(blocks.is_empty());
//! # }
//! ```

use std::ops::{Deref, DerefMut};

use cid::Cid;
use futures::Stream;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::CarError;
use crate::cursor::{ByteCursor, ChunkedCursor, LimitedCursor, SliceCursor};
use crate::wire::block::{Block, BlockIndex, read_block, read_block_index};
use crate::wire::header::{CarHeader, read_header};

/// Number of bytes peeked to decide whether another block frame follows
const LOOKAHEAD: usize = 8;

/// Streaming CAR decoder
///
/// Blocks can only be read once per decoder: a second call to [CarDecoder::blocks] or
/// [CarDecoder::block_indexes] yields [CarError::MultipleRead].
#[derive(Debug)]
pub struct CarDecoder<C: ByteCursor> {
    header: CarHeader,
    cursor: LimitedCursor<C>,
    consumed: bool,
}

impl<B: AsRef<[u8]>> CarDecoder<SliceCursor<B>> {
    /// Decodes an archive held in memory
    pub async fn from_bytes(bytes: B) -> Result<Self, CarError> {
        Self::new(SliceCursor::new(bytes)).await
    }
}

impl<R: AsyncRead + Unpin> CarDecoder<ChunkedCursor<ReaderStream<R>>> {
    /// Decodes an archive read from any `AsyncRead`
    pub async fn from_reader(reader: R) -> Result<Self, CarError> {
        Self::new(ChunkedCursor::from_reader(reader)).await
    }
}

impl<C: ByteCursor> CarDecoder<C> {
    /// Creates a decoder over `cursor`, reading the archive header right away.
    pub async fn new(mut cursor: C) -> Result<Self, CarError> {
        let header = read_header(&mut cursor, None).await?;
        let cursor = match header.v2() {
            Some(v2) => {
                // Part of the payload (the CARv1 header) is already consumed
                let read = cursor.pos().saturating_sub(v2.data_offset);
                let limit = v2.data_size.checked_sub(read).ok_or_else(|| {
                    CarError::InvalidHeader(format!(
                        "data size {} is smaller than the {read} bytes CARv1 header",
                        v2.data_size
                    ))
                })?;
                LimitedCursor::new(cursor, limit)
            }
            None => LimitedCursor::unbounded(cursor),
        };
        Ok(CarDecoder {
            header,
            cursor,
            consumed: false,
        })
    }

    pub fn header(&self) -> &CarHeader {
        &self.header
    }

    pub fn version(&self) -> u64 {
        self.header.version()
    }

    pub fn roots(&self) -> &[Cid] {
        self.header.roots()
    }

    /// Returns the underlying cursor
    pub fn into_inner(self) -> C {
        self.cursor.into_inner()
    }

    /// Marks the blocks as consumed, returning whether they were still available
    fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.consumed, true)
    }

    /// Stream of the blocks of the archive, payloads included
    ///
    /// The underlying source is closed once the stream ends, fails or is dropped.
    pub fn blocks(&mut self) -> impl Stream<Item = Result<Block, CarError>> + '_ {
        let available = self.claim();
        let bounded = self.header.v2().is_some();
        async_stream::try_stream! {
            if !available {
                Err::<(), _>(CarError::MultipleRead)?;
            }
            let mut cursor = CloseOnDrop(&mut self.cursor);
            while has_more(&mut *cursor, bounded).await? {
                yield read_block(&mut *cursor).await?;
            }
        }
    }

    /// Stream of the locations of the blocks of the archive, payloads are skipped
    ///
    /// The underlying source is closed once the stream ends, fails or is dropped.
    pub fn block_indexes(&mut self) -> impl Stream<Item = Result<BlockIndex, CarError>> + '_ {
        let available = self.claim();
        let bounded = self.header.v2().is_some();
        async_stream::try_stream! {
            if !available {
                Err::<(), _>(CarError::MultipleRead)?;
            }
            let mut cursor = CloseOnDrop(&mut self.cursor);
            while has_more(&mut *cursor, bounded).await? {
                yield read_block_index(&mut *cursor).await?;
            }
        }
    }
}

/// Is there another block frame to read?
///
/// A bounded (CARv2) payload ending before its declared size is truncated.
async fn has_more<C: ByteCursor>(
    cursor: &mut LimitedCursor<C>,
    bounded: bool,
) -> Result<bool, CarError> {
    if !cursor.up_to(LOOKAHEAD).await?.is_empty() {
        return Ok(true);
    }
    let remaining = cursor.remaining();
    if bounded && remaining > 0 {
        return Err(CarError::EndOfData {
            requested: remaining,
            available: 0,
        });
    }
    Ok(false)
}

/// Closes the borrowed cursor when dropped
struct CloseOnDrop<'a, C: ByteCursor>(&'a mut LimitedCursor<C>);

impl<C: ByteCursor> Deref for CloseOnDrop<'_, C> {
    type Target = LimitedCursor<C>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<C: ByteCursor> DerefMut for CloseOnDrop<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<C: ByteCursor> Drop for CloseOnDrop<'_, C> {
    fn drop(&mut self) {
        self.0.close();
    }
}
