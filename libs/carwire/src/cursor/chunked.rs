use std::io;

use bytes::{Buf, BytesMut};
use futures::{Stream, StreamExt};
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::CarError;
use crate::cursor::ByteCursor;

/// Cursor over a stream of byte chunks
///
/// Chunks are pulled from the source only when a request cannot be served from what is
/// already buffered. Leftovers of a chunk stay buffered for the next request.
///
/// The source is dropped as soon as it reports its end, fails, or the cursor is closed.
#[derive(Debug)]
pub struct ChunkedCursor<S> {
    source: Option<S>,
    /// Buffered bytes, the first `offset` of which are already committed
    buffer: BytesMut,
    offset: usize,
    pos: u64,
}

impl<S> ChunkedCursor<S> {
    /// Creates a cursor pulling chunks from `source`
    pub fn new(source: S) -> Self {
        ChunkedCursor {
            source: Some(source),
            buffer: BytesMut::new(),
            offset: 0,
            pos: 0,
        }
    }

    /// Is the underlying source still held by the cursor?
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    fn available(&self) -> usize {
        self.buffer.len() - self.offset
    }
}

impl<R: AsyncRead + Unpin> ChunkedCursor<ReaderStream<R>> {
    /// Creates a cursor reading from any `AsyncRead` (file, socket, ...)
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderStream::new(reader))
    }
}

impl<S, B> ChunkedCursor<S>
where
    S: Stream<Item = io::Result<B>> + Unpin,
    B: AsRef<[u8]>,
{
    async fn next_chunk(&mut self) -> Result<Option<B>, CarError> {
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };
        match source.next().await {
            Some(Ok(chunk)) => Ok(Some(chunk)),
            Some(Err(err)) => {
                self.source = None;
                Err(err.into())
            }
            None => {
                self.source = None;
                Ok(None)
            }
        }
    }

    /// Buffers chunks until at least `length` bytes are available or the source ends
    async fn fill(&mut self, length: usize) -> Result<(), CarError> {
        if self.available() >= length {
            return Ok(());
        }
        self.buffer.advance(self.offset);
        self.offset = 0;
        while self.buffer.len() < length {
            match self.next_chunk().await? {
                Some(chunk) => self.buffer.extend_from_slice(chunk.as_ref()),
                None => break,
            }
        }
        Ok(())
    }
}

impl<S, B> ByteCursor for ChunkedCursor<S>
where
    S: Stream<Item = io::Result<B>> + Unpin,
    B: AsRef<[u8]>,
{
    async fn up_to(&mut self, length: usize) -> Result<&[u8], CarError> {
        self.fill(length).await?;
        let end = self.offset + length.min(self.available());
        Ok(&self.buffer[self.offset..end])
    }

    async fn exactly(&mut self, length: usize, commit: bool) -> Result<&[u8], CarError> {
        self.fill(length).await?;
        let available = self.available();
        if available < length {
            return Err(CarError::EndOfData {
                requested: length as u64,
                available: available as u64,
            });
        }
        let start = self.offset;
        if commit {
            self.offset += length;
            self.pos += length as u64;
        }
        Ok(&self.buffer[start..start + length])
    }

    async fn seek(&mut self, length: u64) -> Result<(), CarError> {
        let available = self.available() as u64;
        if length <= available {
            self.offset += length as usize;
            self.pos += length;
            return Ok(());
        }

        // Skip past the buffer, discarding incoming chunks until `length` is reached
        let mut skipped = available;
        self.buffer.clear();
        self.offset = 0;
        while skipped < length {
            match self.next_chunk().await? {
                Some(chunk) => {
                    let bytes = chunk.as_ref();
                    let take = (length - skipped).min(bytes.len() as u64) as usize;
                    skipped += take as u64;
                    self.buffer.extend_from_slice(&bytes[take..]);
                }
                None => {
                    self.pos += skipped;
                    return Err(CarError::EndOfData {
                        requested: length,
                        available: skipped,
                    });
                }
            }
        }
        self.pos += length;
        Ok(())
    }

    fn pos(&self) -> u64 {
        self.pos
    }

    fn close(&mut self) {
        if self.source.take().is_some() {
            tracing::trace!(pos = self.pos, "chunked cursor closed");
        }
        self.buffer = BytesMut::new();
        self.offset = 0;
    }
}
