//! Block indexing and random access
//!
//! [CarIndexer] locates every block of an archive in a single pass, without keeping payloads.
//! [IndexedReader] builds on it to serve blocks by CID from a CAR file on disk.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use cid::Cid;
use futures::{Stream, TryStreamExt};
use indexmap::IndexMap;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::sync::Mutex;

use crate::CarError;
use crate::cursor::{ByteCursor, ChunkedCursor};
use crate::read::CarDecoder;
use crate::wire::block::{Block, BlockIndex};

/// Single-pass indexer over a CAR archive
#[derive(Debug)]
pub struct CarIndexer<C: ByteCursor> {
    decoder: CarDecoder<C>,
}

impl<C: ByteCursor> CarIndexer<C> {
    /// Reads the archive header from `cursor`
    pub async fn new(cursor: C) -> Result<Self, CarError> {
        Ok(CarIndexer {
            decoder: CarDecoder::new(cursor).await?,
        })
    }

    pub fn version(&self) -> u64 {
        self.decoder.version()
    }

    pub fn roots(&self) -> &[Cid] {
        self.decoder.roots()
    }

    /// Locations of the blocks, in archive order
    pub fn indexes(&mut self) -> impl Stream<Item = Result<BlockIndex, CarError>> + '_ {
        self.decoder.block_indexes()
    }
}

/// Location of a block payload in its archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLocation {
    pub payload_offset: u64,
    pub payload_length: u64,
}

/// Random-access reader over a CAR file
///
/// The whole file is indexed when opening. The file handle used to read payloads is opened on
/// the first [IndexedReader::get], then kept until [IndexedReader::close] or drop.
#[derive(Debug)]
pub struct IndexedReader {
    path: PathBuf,
    version: u64,
    roots: Vec<Cid>,
    /// Block locations, in archive order
    locations: IndexMap<Cid, BlockLocation>,
    file: Mutex<Option<File>>,
}

impl IndexedReader {
    /// Indexes the CAR file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CarError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await?;
        let mut indexer = CarIndexer::new(ChunkedCursor::from_reader(file)).await?;

        let mut locations = IndexMap::new();
        {
            let indexes = indexer.indexes();
            tokio::pin!(indexes);
            while let Some(index) = indexes.try_next().await? {
                locations.insert(
                    index.cid,
                    BlockLocation {
                        payload_offset: index.payload_offset,
                        payload_length: index.payload_length,
                    },
                );
            }
        }
        tracing::debug!(path = %path.display(), blocks = locations.len(), "CAR file indexed");

        Ok(IndexedReader {
            version: indexer.version(),
            roots: indexer.roots().to_vec(),
            path,
            locations,
            file: Mutex::new(None),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn roots(&self) -> &[Cid] {
        &self.roots
    }

    /// Number of distinct blocks
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn has(&self, cid: &Cid) -> bool {
        self.locations.contains_key(cid)
    }

    pub fn location(&self, cid: &Cid) -> Option<&BlockLocation> {
        self.locations.get(cid)
    }

    /// CIDs of the blocks, in archive order
    pub fn cids(&self) -> impl Iterator<Item = &Cid> {
        self.locations.keys()
    }

    /// Reads the block identified by `cid`, if the archive holds it.
    pub async fn get(&self, cid: &Cid) -> Result<Option<Block>, CarError> {
        let Some(location) = self.locations.get(cid) else {
            return Ok(None);
        };

        let mut handle = self.file.lock().await;
        let file = match &mut *handle {
            Some(file) => file,
            slot @ None => {
                tracing::debug!(path = %self.path.display(), "opening CAR file for reads");
                slot.insert(File::open(&self.path).await?)
            }
        };

        file.seek(SeekFrom::Start(location.payload_offset)).await?;
        let mut data = Vec::with_capacity(location.payload_length as usize);
        let read = (&mut *file)
            .take(location.payload_length)
            .read_to_end(&mut data)
            .await?;
        if read as u64 != location.payload_length {
            return Err(CarError::Read {
                offset: location.payload_offset,
                expected: location.payload_length,
                read: read as u64,
            });
        }
        Ok(Some(Block::new(*cid, data)))
    }

    /// Blocks of the archive, in archive order
    pub fn blocks(&self) -> impl Stream<Item = Result<Block, CarError>> + '_ {
        async_stream::try_stream! {
            for cid in self.locations.keys() {
                if let Some(block) = self.get(cid).await? {
                    yield block;
                }
            }
        }
    }

    /// Releases the file handle, if opened. Later reads open it again.
    pub async fn close(&self) {
        if self.file.lock().await.take().is_some() {
            tracing::debug!(path = %self.path.display(), "CAR file closed");
        }
    }
}
