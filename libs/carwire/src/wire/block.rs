//! Block frames
//!
//! After its header, a CAR archive is a sequence of block frames:
//! `varint(L) ++ cid-bytes ++ payload-bytes` where `L = len(cid-bytes) + len(payload-bytes)`.

use cid::Cid;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::CarError;
use crate::cursor::ByteCursor;
use crate::wire::cid::read_cid;
use crate::wire::v1::encode_header;
use crate::wire::varint::{MAX_VARINT_LEN, UnsignedVarint, read_varint};

/// A block: content identifier and payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub cid: Cid,
    pub data: Vec<u8>,
}

impl Block {
    pub fn new(cid: Cid, data: Vec<u8>) -> Self {
        Block { cid, data }
    }

    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value of the frame length prefix (CID bytes + payload bytes)
    pub fn frame_body_len(&self) -> usize {
        self.cid.encoded_len() + self.data.len()
    }
}

/// Identifier and lengths of a block frame, read without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub cid: Cid,
    /// Length of the whole frame, including the length prefix itself
    pub frame_length: u64,
    /// Length of the payload (frame length minus prefix and CID bytes)
    pub payload_length: u64,
}

/// [BlockHeader] located in the archive
///
/// Offsets are absolute, counted from the first byte of the archive (so the CARv2 pragma for
/// CARv2 archives).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockIndex {
    pub cid: Cid,
    pub frame_length: u64,
    pub payload_length: u64,
    /// Offset of the frame length prefix
    pub frame_offset: u64,
    /// Offset of the first payload byte
    pub payload_offset: u64,
}

/// Reads the length prefix and CID of the next block frame.
///
/// The cursor is left at the first payload byte.
pub async fn read_block_head<C: ByteCursor>(cursor: &mut C) -> Result<BlockHeader, CarError> {
    let start = cursor.pos();
    let length = read_varint(cursor).await?;
    if length == 0 {
        return Err(CarError::InvalidSection("zero-length frame"));
    }
    let frame_length = length
        .checked_add(cursor.pos() - start)
        .ok_or(CarError::InvalidSection("frame length overflows"))?;
    let cid = read_cid(cursor).await?;
    let payload_length = frame_length
        .checked_sub(cursor.pos() - start)
        .ok_or(CarError::InvalidSection("CID overruns the frame"))?;
    Ok(BlockHeader {
        cid,
        frame_length,
        payload_length,
    })
}

/// Reads the next block frame along with its payload.
pub async fn read_block<C: ByteCursor>(cursor: &mut C) -> Result<Block, CarError> {
    let head = read_block_head(cursor).await?;
    let length = usize::try_from(head.payload_length)
        .map_err(|_| CarError::InvalidSection("payload too large for this platform"))?;
    let data = cursor.exactly(length, true).await?.to_vec();
    tracing::trace!(cid = %head.cid, length, "block read");
    Ok(Block::new(head.cid, data))
}

/// Reads the location of the next block frame, skipping over its payload.
pub async fn read_block_index<C: ByteCursor>(cursor: &mut C) -> Result<BlockIndex, CarError> {
    let frame_offset = cursor.pos();
    let head = read_block_head(cursor).await?;
    let payload_offset = cursor.pos();
    cursor.seek(head.payload_length).await?;
    tracing::trace!(cid = %head.cid, frame_offset, payload_offset, "block indexed");
    Ok(BlockIndex {
        cid: head.cid,
        frame_length: head.frame_length,
        payload_length: head.payload_length,
        frame_offset,
        payload_offset,
    })
}

/// Encodes a whole block frame
pub fn encode_block(block: &Block) -> Vec<u8> {
    let prefix = UnsignedVarint(block.frame_body_len() as u64);
    let mut bytes = Vec::with_capacity(prefix.encoded_len() + block.frame_body_len());
    bytes.extend_from_slice(&prefix.encode());
    bytes.extend_from_slice(&block.cid.to_bytes());
    bytes.extend_from_slice(&block.data);
    bytes
}

/// Writes the CARv1 header frame for `roots`, returning the number of bytes written.
pub async fn write_header<W>(writer: &mut W, roots: &[Cid]) -> Result<usize, CarError>
where
    W: AsyncWrite + Unpin,
{
    let bytes = encode_header(roots)?;
    writer.write_all(&bytes).await?;
    Ok(bytes.len())
}

/// Writes a block frame, returning the number of bytes written.
///
/// Empty payloads are not written at all, only the prefix and CID.
pub async fn write_block<W>(writer: &mut W, block: &Block) -> Result<usize, CarError>
where
    W: AsyncWrite + Unpin,
{
    let mut prefix = [0u8; MAX_VARINT_LEN];
    let prefix_len = UnsignedVarint(block.frame_body_len() as u64).encode_into(&mut prefix);
    writer.write_all(&prefix[..prefix_len]).await?;
    let cid = block.cid.to_bytes();
    writer.write_all(&cid).await?;
    if !block.data.is_empty() {
        writer.write_all(&block.data).await?;
    }
    Ok(prefix_len + cid.len() + block.data.len())
}
