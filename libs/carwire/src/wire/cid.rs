//! Content identifiers (CIDs) on the CAR wire
//!
//! Block frames carry CIDs in their binary form:
//! - CIDv0: 34 bytes, `0x12 0x20` (sha2-256, 32-byte digest) followed by the digest. The codec is
//!   implicitly dag-pb.
//! - CIDv1: `varint(1) ++ varint(codec) ++ multihash`, where the multihash is
//!   `varint(hash-code) ++ varint(digest-length) ++ digest`.
//!
//! Headers carry CIDs as DAG-CBOR links instead: CBOR tag 42 around a byte string holding a
//! `0x00` multibase prefix and the binary CID. See [CidLink].

use ciborium::Value;
use cid::Cid;
use cid::multihash::Multihash;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::CarError;
use crate::cursor::ByteCursor;
use crate::wire::varint::{UnsignedVarint, read_varint};

/// Leading bytes of every CIDv0 (sha2-256 multihash code, 32-byte digest length)
pub const CIDV0_PREFIX: [u8; 2] = [0x12, 0x20];
/// Encoded length of a CIDv0
pub const CIDV0_LEN: usize = 34;

/// Largest digest a [Multihash<64>] holds
const MAX_DIGEST_LEN: usize = 64;

/// CBOR tag of DAG-CBOR links
const CID_CBOR_TAG: u64 = 42;

/// Reads one binary CID from the cursor.
///
/// Fails with [CarError::UnexpectedCidVersion] if the identifier is not a CIDv0 and does not start
/// with version 1.
pub async fn read_cid<C: ByteCursor>(cursor: &mut C) -> Result<Cid, CarError> {
    let head = cursor.up_to(2).await?;
    if head.len() < CIDV0_PREFIX.len() {
        return Err(CarError::EndOfData {
            requested: CIDV0_PREFIX.len() as u64,
            available: head.len() as u64,
        });
    }
    if head == CIDV0_PREFIX {
        let bytes = cursor.exactly(CIDV0_LEN, true).await?;
        let multihash = Multihash::<64>::from_bytes(bytes)?;
        return Ok(Cid::new_v0(multihash)?);
    }

    let version = read_varint(cursor).await?;
    if version != 1 {
        return Err(CarError::UnexpectedCidVersion(version));
    }
    let codec = read_varint(cursor).await?;

    // Peek at the multihash code and digest length to learn the multihash size
    let peek = cursor.up_to(8).await?;
    let available = peek.len();
    let multihash_head = UnsignedVarint::decode(peek).and_then(|(_code, code_size)| {
        UnsignedVarint::decode(&peek[code_size..])
            .map(|(digest_len, len_size)| (code_size + len_size, digest_len.0))
    });
    let multihash_len = match multihash_head {
        Some((_, digest_len)) if digest_len > MAX_DIGEST_LEN as u64 => {
            return Err(CarError::InvalidSection("multihash digest too long"));
        }
        Some((head_len, digest_len)) => head_len + digest_len as usize,
        None if available < 8 => {
            return Err(CarError::EndOfData {
                requested: 8,
                available: available as u64,
            });
        }
        None => return Err(CarError::InvalidVarint),
    };

    let bytes = cursor.exactly(multihash_len, true).await?;
    let multihash = Multihash::<64>::from_bytes(bytes)?;
    Ok(Cid::new_v1(codec, multihash))
}

/// A CID as it appears in CAR headers (DAG-CBOR link, tag 42)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CidLink(pub Cid);

impl From<Cid> for CidLink {
    fn from(cid: Cid) -> Self {
        CidLink(cid)
    }
}

impl From<CidLink> for Cid {
    fn from(link: CidLink) -> Self {
        link.0
    }
}

impl CidLink {
    /// Bytes taken by this link once CBOR-encoded (tag, byte string header, prefix and CID)
    pub fn encoded_len(&self) -> usize {
        link_encoded_len(self.0.encoded_len())
    }
}

/// Bytes taken by a CBOR link to a CID of `cid_len` bytes
pub(crate) fn link_encoded_len(cid_len: usize) -> usize {
    // Tag 42 takes 2 bytes, the byte string holds the 0x00 prefix then the CID
    2 + cbor_head_len(cid_len as u64 + 1) + cid_len + 1
}

/// Length of a CBOR major type head carrying `value` (array length, byte string length, integer)
pub(crate) fn cbor_head_len(value: u64) -> usize {
    match value {
        0..24 => 1,
        24..256 => 2,
        256..65536 => 3,
        65536..=0xFFFF_FFFF => 5,
        _ => 9,
    }
}

impl Serialize for CidLink {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut bytes = Vec::with_capacity(self.0.encoded_len() + 1);
        bytes.push(0x00);
        bytes.extend_from_slice(&self.0.to_bytes());
        let value = Value::Tag(CID_CBOR_TAG, Box::new(Value::Bytes(bytes)));
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CidLink {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Tag(CID_CBOR_TAG, boxed_value) = value else {
            return Err(D::Error::custom("expected a CID link (tag 42)"));
        };
        let Value::Bytes(bytes) = *boxed_value else {
            return Err(D::Error::custom("CID link must wrap a byte string"));
        };
        match bytes.split_first() {
            Some((0x00, cid_bytes)) => Cid::try_from(cid_bytes)
                .map(CidLink)
                .map_err(|err| D::Error::custom(format!("invalid CID in link: {err}"))),
            _ => Err(D::Error::custom("CID link is missing its 0x00 prefix")),
        }
    }
}
