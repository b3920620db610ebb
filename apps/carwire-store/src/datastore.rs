//! Data-store related functionality for carwire-store
//!
//! The data store tracks the CAR files of a directory and maps every block CID to the file
//! holding it. Files are scanned and indexed once, then blocks are served by random access
//! through [IndexedReader].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use carwire::cursor::ChunkedCursor;
use carwire::{BlockIndex, CarError, CarIndexer, IndexedReader};
use cid::Cid;
use futures::TryStreamExt;
use tracing::{debug, info, warn};

pub type Result<T> = std::result::Result<T, DataStoreError>;

/// Errors related to DataStore operations
#[derive(thiserror::Error, Debug)]
pub enum DataStoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CAR file, or failed block read
    #[error("CAR error in {path}: {source}")]
    Car { path: PathBuf, source: CarError },
    /// Unparsable CID
    #[error("Invalid CID: {0}")]
    InvalidCid(#[from] cid::Error),
    /// CID not found in the datastore
    #[error("CID not found: {0}")]
    NotFound(Cid),
}

/// Block of a tracked CAR file, as listed by [DataStore::list]
#[derive(Debug, Clone)]
pub struct ListedBlock {
    pub path: PathBuf,
    pub index: BlockIndex,
}

/// DataStore for carwire-store
#[derive(Debug, Default)]
pub struct DataStore {
    // Indexed CAR files, in scan order
    cars: Vec<IndexedReader>,
    // Block CID to position in `cars`, first file wins
    blocks: HashMap<Cid, usize>,
}

impl DataStore {
    /// Create an empty DataStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a directory for CAR files, then index and track them
    ///
    /// Files failing to index are skipped with a warning. Already tracked files are ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of CAR files newly tracked
    /// * `Err(DataStoreError)` - The directory could not be read
    pub async fn scan_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let mut discovered = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("car") {
                discovered.push(tokio::fs::canonicalize(&path).await?);
            }
        }
        discovered.sort();

        let mut count = 0;
        for path in discovered {
            if self.cars.iter().any(|car| car.path() == path) {
                continue;
            }
            match IndexedReader::open(&path).await {
                Ok(car) => {
                    debug!(path = %path.display(), blocks = car.len(), "tracking CAR file");
                    self.track(car);
                    count += 1;
                }
                Err(err) => warn!(path = %path.display(), %err, "skipping CAR file"),
            }
        }
        info!(files = count, blocks = self.blocks.len(), "datastore scanned");
        Ok(count)
    }

    fn track(&mut self, car: IndexedReader) {
        let idx = self.cars.len();
        for cid in car.cids() {
            self.blocks.entry(*cid).or_insert(idx);
        }
        self.cars.push(car);
    }

    /// Number of tracked CAR files
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    /// Number of distinct blocks across the tracked files
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Roots declared by each tracked file
    pub fn roots(&self) -> impl Iterator<Item = (&Path, &[Cid])> {
        self.cars.iter().map(|car| (car.path(), car.roots()))
    }

    /// Block payload for `cid`
    pub async fn get(&self, cid: &Cid) -> Result<Vec<u8>> {
        let car = self
            .blocks
            .get(cid)
            .and_then(|idx| self.cars.get(*idx))
            .ok_or(DataStoreError::NotFound(*cid))?;
        let block = car.get(cid).await.map_err(|source| DataStoreError::Car {
            path: car.path().to_path_buf(),
            source,
        })?;
        block
            .map(|block| block.data)
            .ok_or(DataStoreError::NotFound(*cid))
    }

    /// Same as [DataStore::get], with the CID in its string form
    pub async fn get_str(&self, cid: &str) -> Result<Vec<u8>> {
        let cid = Cid::try_from(cid)?;
        self.get(&cid).await
    }

    /// Block frames of every tracked file, in file then archive order
    pub async fn list(&self) -> Result<Vec<ListedBlock>> {
        let mut listed = Vec::new();
        for car in &self.cars {
            let path = car.path().to_path_buf();
            let car_error = |source| DataStoreError::Car {
                path: path.clone(),
                source,
            };
            let file = tokio::fs::File::open(&path).await?;
            let mut indexer = CarIndexer::new(ChunkedCursor::from_reader(file))
                .await
                .map_err(car_error)?;
            let indexes: Vec<BlockIndex> =
                indexer.indexes().try_collect().await.map_err(car_error)?;
            listed.extend(indexes.into_iter().map(|index| ListedBlock {
                path: path.clone(),
                index,
            }));
        }
        Ok(listed)
    }

    /// Release the file handles of the tracked CAR files
    pub async fn shutdown(&self) {
        for car in &self.cars {
            car.close().await;
        }
    }
}
