use crate::CarError;
use crate::cursor::ByteCursor;

/// Cursor over an in-memory buffer
///
/// Returned slices borrow directly from the buffer, nothing is copied.
#[derive(Debug, Clone)]
pub struct SliceCursor<B> {
    data: B,
    offset: usize,
}

impl<B: AsRef<[u8]>> SliceCursor<B> {
    /// Creates a cursor positioned at the start of `data`
    pub fn new(data: B) -> Self {
        SliceCursor { data, offset: 0 }
    }

    /// Number of bytes left after the current position
    pub fn remaining(&self) -> usize {
        self.data.as_ref().len() - self.offset
    }

    /// Returns the underlying buffer
    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteCursor for SliceCursor<B> {
    async fn up_to(&mut self, length: usize) -> Result<&[u8], CarError> {
        let data = &self.data.as_ref()[self.offset..];
        Ok(&data[..length.min(data.len())])
    }

    async fn exactly(&mut self, length: usize, commit: bool) -> Result<&[u8], CarError> {
        let start = self.offset;
        let available = self.remaining();
        if available < length {
            return Err(CarError::EndOfData {
                requested: length as u64,
                available: available as u64,
            });
        }
        if commit {
            self.offset += length;
        }
        Ok(&self.data.as_ref()[start..start + length])
    }

    async fn seek(&mut self, length: u64) -> Result<(), CarError> {
        let available = self.remaining() as u64;
        if available < length {
            return Err(CarError::EndOfData {
                requested: length,
                available,
            });
        }
        self.offset += length as usize;
        Ok(())
    }

    fn pos(&self) -> u64 {
        self.offset as u64
    }
}
