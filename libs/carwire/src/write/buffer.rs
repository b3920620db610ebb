use cid::Cid;

use crate::CarError;
use crate::wire::block::Block;
use crate::wire::cid::{CidLink, cbor_head_len, link_encoded_len};
use crate::wire::v1::HeaderFrame;
use crate::wire::varint::UnsignedVarint;

/// CBOR bytes of a header frame besides its roots: map head, `roots` and `version` keys, version
const HEADER_BASE_LEN: usize = 16;
/// CBOR bytes framing one root: tag 42 (2 bytes), byte string head (2 bytes), `0x00` prefix
const ROOT_OVERHEAD: usize = 5;
/// Typical binary CID length (CIDv1, sha2-256)
pub const DEFAULT_CID_LEN: usize = 36;

/// Upper bound of the header frame length for `root_count` roots of [DEFAULT_CID_LEN] bytes
pub fn estimate_header_size(root_count: usize) -> usize {
    estimate_header_size_with(root_count, root_count * DEFAULT_CID_LEN)
}

/// Upper bound of the header frame length for `root_count` roots taking `roots_byte_length`
/// bytes in total once binary-encoded.
///
/// Exact when each root is 23 to 254 bytes long, which covers CIDs with usual digests.
pub fn estimate_header_size_with(root_count: usize, roots_byte_length: usize) -> usize {
    framed_len(
        HEADER_BASE_LEN
            + cbor_head_len(root_count as u64)
            + roots_byte_length
            + root_count * ROOT_OVERHEAD,
    )
}

/// Exact length of the header frame for `roots`
pub fn header_length(roots: &[Cid]) -> usize {
    let root_bytes = roots
        .iter()
        .map(|root| link_encoded_len(root.encoded_len()))
        .sum();
    header_frame_len(roots.len(), root_bytes)
}

/// Exact length of the frame of `block`
pub fn block_length(block: &Block) -> usize {
    framed_len(block.frame_body_len())
}

fn header_frame_len(root_count: usize, root_bytes: usize) -> usize {
    framed_len(HEADER_BASE_LEN + cbor_head_len(root_count as u64) + root_bytes)
}

fn framed_len(body: usize) -> usize {
    UnsignedVarint(body as u64).encoded_len() + body
}

/// CARv1 encoder writing in place into a caller-owned buffer
///
/// The first `header_size` bytes of the buffer are reserved for the header, which is only
/// written on [CarBufferWriter::close], once every root is known. Blocks are written right after
/// the reservation as they come. When roots outgrow the reservation (or it turns out too large),
/// the block region can be slid within the buffer to resize it.
///
/// ```rust
/// use carwire::write::{CarBufferWriter, estimate_header_size};
///
/// let mut buffer = vec![0u8; 1024];
/// let mut writer = CarBufferWriter::new(&mut buffer, estimate_header_size(0)).unwrap();
/// let car = writer.close(false).unwrap();
/// assert_eq!(car.len(), 18);
/// ```
#[derive(Debug)]
pub struct CarBufferWriter<'a> {
    bytes: &'a mut [u8],
    /// Where the next block frame goes
    byte_offset: usize,
    header_size: usize,
    roots: Vec<Cid>,
    /// CBOR bytes taken by the roots so far
    root_bytes: usize,
    closed: bool,
}

impl<'a> CarBufferWriter<'a> {
    /// Creates a writer reserving `header_size` bytes for the header
    pub fn new(bytes: &'a mut [u8], header_size: usize) -> Result<Self, CarError> {
        if header_size > bytes.len() {
            return Err(CarError::BadArgument(format!(
                "header size {header_size} exceeds the buffer length {}",
                bytes.len()
            )));
        }
        Ok(CarBufferWriter {
            bytes,
            byte_offset: header_size,
            header_size,
            roots: Vec::new(),
            root_bytes: 0,
            closed: false,
        })
    }

    /// Creates a writer whose header reservation fits `roots` exactly
    pub fn with_roots(bytes: &'a mut [u8], roots: &[Cid]) -> Result<Self, CarError> {
        let mut writer = Self::new(bytes, header_length(roots))?;
        for root in roots {
            writer.add_root(*root, false)?;
        }
        Ok(writer)
    }

    /// Bytes reserved for the header
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// Offset of the next block frame
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn roots(&self) -> &[Cid] {
        &self.roots
    }

    fn ensure_open(&self) -> Result<(), CarError> {
        if self.closed {
            return Err(CarError::AlreadyClosed);
        }
        Ok(())
    }

    /// Adds a root to the header.
    ///
    /// If the header reservation is too small for it, the block region is moved to make room
    /// when `resize` is set, or the call fails with [CarError::Capacity].
    pub fn add_root(&mut self, root: Cid, resize: bool) -> Result<(), CarError> {
        self.ensure_open()?;
        let root_bytes = self.root_bytes + link_encoded_len(root.encoded_len());
        let size = header_frame_len(self.roots.len() + 1, root_bytes);
        if size > self.header_size {
            if size - self.header_size + self.byte_offset > self.bytes.len() {
                return Err(CarError::Capacity(
                    "Buffer has no capacity for a new root".into(),
                ));
            }
            if !resize {
                return Err(CarError::Capacity(
                    "Buffer has no capacity for a new root, pass resize to grow the header".into(),
                ));
            }
            self.resize_header(size)?;
        }
        self.roots.push(root);
        self.root_bytes = root_bytes;
        Ok(())
    }

    /// Appends a block frame after the blocks already written.
    pub fn write(&mut self, block: &Block) -> Result<(), CarError> {
        self.ensure_open()?;
        let body = block.frame_body_len();
        let end = self.byte_offset + framed_len(body);
        if end > self.bytes.len() {
            return Err(CarError::Capacity(format!(
                "Buffer has no capacity for block {}",
                block.cid
            )));
        }

        let mut offset = self.byte_offset;
        offset += UnsignedVarint(body as u64).encode_into(&mut self.bytes[offset..]);
        offset += block.cid.write_bytes(&mut self.bytes[offset..])?;
        if !block.data.is_empty() {
            self.bytes[offset..end].copy_from_slice(&block.data);
        }
        self.byte_offset = end;
        Ok(())
    }

    /// Moves the block region so the header reservation becomes `header_size` bytes.
    pub fn resize_header(&mut self, header_size: usize) -> Result<(), CarError> {
        self.ensure_open()?;
        let byte_offset = self.byte_offset - self.header_size + header_size;
        if byte_offset > self.bytes.len() {
            return Err(CarError::Capacity(format!(
                "Buffer has no capacity for a {header_size} bytes header"
            )));
        }
        self.bytes
            .copy_within(self.header_size..self.byte_offset, header_size);
        tracing::debug!(
            from = self.header_size,
            to = header_size,
            "CAR header reservation resized"
        );
        self.header_size = header_size;
        self.byte_offset = byte_offset;
        Ok(())
    }

    /// Writes the header into its reservation and returns the encoded archive.
    ///
    /// The header must fill its reservation exactly: with `resize` the block region is moved
    /// as needed, otherwise a mismatch fails with [CarError::Capacity].
    pub fn close(&mut self, resize: bool) -> Result<&[u8], CarError> {
        self.ensure_open()?;
        let size = header_frame_len(self.roots.len(), self.root_bytes);
        if size != self.header_size {
            if !resize {
                let reason = if size < self.header_size {
                    "overestimated"
                } else {
                    "underestimated"
                };
                return Err(CarError::Capacity(format!(
                    "Header size was {reason} ({} bytes reserved, {size} needed), pass resize to fix it",
                    self.header_size
                )));
            }
            self.resize_header(size)?;
        }

        let body = HEADER_BASE_LEN + cbor_head_len(self.roots.len() as u64) + self.root_bytes;
        let prefix_len = UnsignedVarint(body as u64).encode_into(&mut self.bytes[..]);
        let frame = HeaderFrame {
            roots: Some(self.roots.iter().copied().map(CidLink).collect()),
            version: 1,
        };
        let mut target = &mut self.bytes[prefix_len..size];
        ciborium::ser::into_writer(&frame, &mut target)
            .map_err(|err| CarError::InvalidHeader(err.to_string()))?;
        if !target.is_empty() {
            return Err(CarError::InvalidHeader(format!(
                "header encoding is {} bytes shorter than computed",
                target.len()
            )));
        }

        self.closed = true;
        Ok(&self.bytes[..self.byte_offset])
    }
}
