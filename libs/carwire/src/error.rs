/// Errors raised while decoding or encoding CAR archives
///
/// Every failure aborts the current read or write: there is no partial skip or
/// resynchronization on a malformed archive.
#[derive(thiserror::Error, Debug)]
pub enum CarError {
    /// Fewer bytes were available than an exact read required
    #[error("Unexpected end of data: requested {requested} bytes, {available} available")]
    EndOfData { requested: u64, available: u64 },

    /// The header CBOR value does not match the `{version, roots}` schema
    #[error("Invalid CAR header format: {0}")]
    InvalidHeader(String),

    /// Header version not in {1, 2}, or not the one the caller required
    #[error("Invalid CAR version: {found}{}", .expected.map(|v| format!(" (expected {v})")).unwrap_or_default())]
    InvalidVersion { found: u64, expected: Option<u64> },

    /// Malformed block frame (zero length, or identifier longer than the frame)
    #[error("Invalid CAR section: {0}")]
    InvalidSection(&'static str),

    /// Non-CIDv0 identifier whose leading varint is not 1
    #[error("Unexpected CID version: {0}")]
    UnexpectedCidVersion(u64),

    /// Varint is overlong or overflows 64 bits
    #[error("Invalid varint encoding")]
    InvalidVarint,

    #[error(transparent)]
    Cid(#[from] cid::Error),

    #[error(transparent)]
    Multihash(#[from] cid::multihash::Error),

    /// The target buffer (or its header reservation) cannot hold the write
    #[error("{0}")]
    Capacity(String),

    /// The writer has already been closed
    #[error("Writer is already closed")]
    AlreadyClosed,

    /// A block sequence of this decoder has already been consumed
    #[error("CAR blocks can only be read once")]
    MultipleRead,

    /// Header roots were already written by this writer
    #[error("CAR roots have already been written")]
    RootsAlreadySet,

    /// An earlier write to the sink failed, nothing else will be written
    #[error("Sink failed on an earlier write")]
    SinkFailed,

    /// Argument rejected before any I/O took place
    #[error("Bad argument: {0}")]
    BadArgument(String),

    /// A random-access read returned fewer bytes than indexed
    #[error("Failed to read block at offset {offset}: expected {expected} bytes, got {read}")]
    Read { offset: u64, expected: u64, read: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
