//! Header decoding for both CAR versions

use cid::Cid;

use crate::CarError;
use crate::cursor::ByteCursor;
use crate::wire::v1::{HeaderFrame, decode_header_frame};
use crate::wire::v2::{CarV2Header, HEADER_LEN};
use crate::wire::varint::read_varint;

/// Decoded header of a CAR archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarHeader {
    V1 {
        roots: Vec<Cid>,
    },
    /// CARv2 fixed header along with the roots of the embedded CARv1 header
    V2 {
        header: CarV2Header,
        roots: Vec<Cid>,
    },
}

impl CarHeader {
    pub fn version(&self) -> u64 {
        match self {
            CarHeader::V1 { .. } => 1,
            CarHeader::V2 { .. } => 2,
        }
    }

    pub fn roots(&self) -> &[Cid] {
        match self {
            CarHeader::V1 { roots } | CarHeader::V2 { roots, .. } => roots,
        }
    }

    /// CARv2 fixed header, if any
    pub fn v2(&self) -> Option<&CarV2Header> {
        match self {
            CarHeader::V1 { .. } => None,
            CarHeader::V2 { header, .. } => Some(header),
        }
    }
}

/// Reads and validates one length-prefixed header frame.
///
/// `roots` must be present for version 1 and absent for version 2. When `strict_version` is
/// given, any other version fails with [CarError::InvalidVersion].
async fn read_header_frame<C: ByteCursor>(
    cursor: &mut C,
    strict_version: Option<u64>,
) -> Result<HeaderFrame, CarError> {
    let length = read_varint(cursor).await?;
    let length = usize::try_from(length)
        .map_err(|_| CarError::InvalidHeader(format!("header length {length} is too large")))?;
    let frame = decode_header_frame(cursor.exactly(length, true).await?)?;

    if frame.version != 1 && frame.version != 2 {
        return Err(CarError::InvalidVersion {
            found: frame.version,
            expected: strict_version,
        });
    }
    if let Some(expected) = strict_version
        && frame.version != expected
    {
        return Err(CarError::InvalidVersion {
            found: frame.version,
            expected: Some(expected),
        });
    }
    match (frame.version, &frame.roots) {
        (1, None) => Err(CarError::InvalidHeader(
            "roots are required in a version 1 header".into(),
        )),
        (2, Some(_)) => Err(CarError::InvalidHeader(
            "roots are not allowed in a version 2 header".into(),
        )),
        _ => Ok(frame),
    }
}

/// Reads the header of a CAR archive, of either version.
///
/// For CARv2 archives, the fixed header is read, the cursor is moved to `data_offset` and the
/// embedded CARv1 header is read there, so the cursor is left on the first block frame in both
/// cases. The embedded header must be a version 1 header: nested CARv2 archives are rejected.
pub async fn read_header<C: ByteCursor>(
    cursor: &mut C,
    strict_version: Option<u64>,
) -> Result<CarHeader, CarError> {
    let frame = read_header_frame(cursor, strict_version).await?;
    if frame.version == 1 {
        let roots: Vec<Cid> = frame.roots.unwrap_or_default().into_iter().map(Cid::from).collect();
        tracing::debug!(roots = roots.len(), "CARv1 header read");
        return Ok(CarHeader::V1 { roots });
    }

    let mut fixed = [0u8; HEADER_LEN];
    fixed.copy_from_slice(cursor.exactly(HEADER_LEN, true).await?);
    let header = CarV2Header::from(fixed);
    let gap = header.data_offset.checked_sub(cursor.pos()).ok_or_else(|| {
        CarError::InvalidHeader(format!(
            "data offset {} overlaps the CARv2 header",
            header.data_offset
        ))
    })?;
    cursor.seek(gap).await?;

    let inner = read_header_frame(cursor, Some(1)).await?;
    let roots: Vec<Cid> = inner.roots.unwrap_or_default().into_iter().map(Cid::from).collect();
    tracing::debug!(
        roots = roots.len(),
        data_offset = header.data_offset,
        data_size = header.data_size,
        index_offset = header.index_offset,
        "CARv2 header read"
    );
    Ok(CarHeader::V2 { header, roots })
}
