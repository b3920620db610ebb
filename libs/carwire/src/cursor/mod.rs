//! Pull-based read cursors over CAR byte sources
//!
//! Every decoder in this crate reads through the [ByteCursor] trait, which offers three
//! primitives: peek at what is available ([ByteCursor::up_to]), take an exact number of bytes
//! ([ByteCursor::exactly]) and skip bytes without materializing them ([ByteCursor::seek]).
//!
//! Three realizations are provided:
//! - [SliceCursor] reads from an in-memory buffer, zero-copy.
//! - [ChunkedCursor] coalesces chunks pulled from a [futures::Stream] (e.g. an `AsyncRead`
//!   wrapped in a `ReaderStream`) until a request can be satisfied.
//! - [LimitedCursor] decorates another cursor with a byte budget, used to confine reads to the
//!   CARv1 payload embedded in a CARv2 archive.

mod chunked;
mod limited;
mod slice;

pub use chunked::ChunkedCursor;
pub use limited::LimitedCursor;
pub use slice::SliceCursor;

use crate::CarError;

/// A read cursor over a CAR byte source
///
/// A cursor is owned by at most one in-flight decode operation, all methods take `&mut self`.
#[allow(async_fn_in_trait)]
pub trait ByteCursor {
    /// Returns up to `length` bytes available from the current position, without committing them.
    ///
    /// Fewer bytes are returned only when the source is exhausted (or the budget of a
    /// [LimitedCursor] is reached). An empty slice means there is nothing left to read.
    async fn up_to(&mut self, length: usize) -> Result<&[u8], CarError>;

    /// Returns exactly `length` bytes, advancing the position past them when `commit` is true.
    ///
    /// Fails with [CarError::EndOfData] if the source cannot provide that many bytes.
    async fn exactly(&mut self, length: usize, commit: bool) -> Result<&[u8], CarError>;

    /// Advances the position by `length` bytes without returning them.
    async fn seek(&mut self, length: u64) -> Result<(), CarError>;

    /// Cumulative number of bytes committed so far
    fn pos(&self) -> u64;

    /// Releases the underlying source. Further reads behave as if the source was exhausted.
    fn close(&mut self) {}
}
