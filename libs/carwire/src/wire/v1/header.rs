use cid::Cid;
use serde::{Deserialize, Serialize};

use crate::CarError;
use crate::wire::cid::CidLink;
use crate::wire::varint::UnsignedVarint;

/// Header frame as found on the wire
///
/// Both CARv1 headers and the CARv2 pragma are encoded with this shape: `roots` is present for
/// version 1 and absent for version 2. Fields are declared in canonical DAG-CBOR order (shorter
/// keys first) so encoding is byte-identical to other implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HeaderFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roots: Option<Vec<CidLink>>,
    pub version: u64,
}

/// Decodes the CBOR body of a header frame (the bytes after its length prefix)
///
/// The body must hold exactly one CBOR value.
pub(crate) fn decode_header_frame(bytes: &[u8]) -> Result<HeaderFrame, CarError> {
    let mut rest = bytes;
    let frame = ciborium::de::from_reader(&mut rest)
        .map_err(|err| CarError::InvalidHeader(err.to_string()))?;
    if !rest.is_empty() {
        return Err(CarError::InvalidHeader(format!(
            "{} trailing bytes after the header",
            rest.len()
        )));
    }
    Ok(frame)
}

/// CAR v1 header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarV1Header {
    /// Root CIDs, possibly empty
    pub roots: Vec<Cid>,
}

impl CarV1Header {
    pub fn new(roots: Vec<Cid>) -> Self {
        CarV1Header { roots }
    }

    /// Returns the version of the CAR format
    pub fn version(&self) -> u64 {
        1
    }

    /// Encodes the whole header frame, length prefix included
    pub fn encode(&self) -> Result<Vec<u8>, CarError> {
        encode_header(&self.roots)
    }
}

/// Encodes the CARv1 header frame for `roots`: `varint(len(cbor)) ++ cbor`
pub fn encode_header(roots: &[Cid]) -> Result<Vec<u8>, CarError> {
    let frame = HeaderFrame {
        roots: Some(roots.iter().copied().map(CidLink).collect()),
        version: 1,
    };
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(&frame, &mut cbor)
        .map_err(|err| CarError::InvalidHeader(err.to_string()))?;
    let mut bytes = UnsignedVarint(cbor.len() as u64).encode();
    bytes.extend_from_slice(&cbor);
    Ok(bytes)
}
