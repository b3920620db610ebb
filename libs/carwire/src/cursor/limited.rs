use crate::CarError;
use crate::cursor::ByteCursor;

/// Cursor decorator refusing to read more than a byte budget
///
/// The budget counts from the wrapped cursor position at construction time. Positions reported
/// by [ByteCursor::pos] are those of the wrapped cursor, so offsets stay absolute.
#[derive(Debug)]
pub struct LimitedCursor<C> {
    inner: C,
    start: u64,
    limit: u64,
}

impl<C: ByteCursor> LimitedCursor<C> {
    /// Wraps `inner`, allowing at most `limit` more bytes to be read from it
    pub fn new(inner: C, limit: u64) -> Self {
        let start = inner.pos();
        LimitedCursor {
            inner,
            start,
            limit,
        }
    }

    /// Wraps `inner` without any budget
    pub fn unbounded(inner: C) -> Self {
        Self::new(inner, u64::MAX)
    }

    /// Bytes left in the budget
    pub fn remaining(&self) -> u64 {
        self.limit
            .saturating_sub(self.inner.pos().saturating_sub(self.start))
    }

    /// Returns the wrapped cursor
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn check(&self, length: u64) -> Result<(), CarError> {
        let remaining = self.remaining();
        if length > remaining {
            return Err(CarError::EndOfData {
                requested: length,
                available: remaining,
            });
        }
        Ok(())
    }
}

impl<C: ByteCursor> ByteCursor for LimitedCursor<C> {
    async fn up_to(&mut self, length: usize) -> Result<&[u8], CarError> {
        let budget = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        self.inner.up_to(length.min(budget)).await
    }

    async fn exactly(&mut self, length: usize, commit: bool) -> Result<&[u8], CarError> {
        self.check(length as u64)?;
        self.inner.exactly(length, commit).await
    }

    async fn seek(&mut self, length: u64) -> Result<(), CarError> {
        self.check(length)?;
        self.inner.seek(length).await
    }

    fn pos(&self) -> u64 {
        self.inner.pos()
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
