//! Binary serialization of the table artifact.
//!
//! Layout: 4-byte magic, little-endian u16 format version, little-endian u32
//! grammar fingerprint, then the postcard-encoded [`TableSet`]. The
//! fingerprint lets a loader reject tables built from a different grammar
//! without decoding the payload.

use crate::tables::TableSet;

/// Magic bytes at the start of every table artifact.
pub const MAGIC: [u8; 4] = *b"FRT1";
/// Current artifact format version.
pub const VERSION: u16 = 1;

const HEADER_LEN: usize = 10;

/// Why a table artifact could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("not a table artifact (bad magic)")]
    BadMagic,
    #[error("unsupported artifact version {found} (expected {VERSION})")]
    Version { found: u16 },
    #[error("stale artifact: grammar fingerprint {found:#010x} does not match {expected:#010x}")]
    Stale { found: u32, expected: u32 },
    #[error("artifact truncated")]
    Truncated,
    #[error("artifact decode error: {0}")]
    Decode(#[from] postcard::Error),
}

/// Serializes a table set into artifact bytes.
pub fn to_binary(set: &TableSet) -> Vec<u8> {
    let payload = postcard::to_allocvec(set).expect("serialization should not fail");
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&set.grammar.fingerprint().to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

/// Deserializes a table set, verifying magic, version, and fingerprint.
///
/// `expected_fingerprint` is the fingerprint of the grammar compiled into the
/// caller; a mismatch means the artifact was produced by a different grammar
/// and must be rebuilt.
pub fn from_binary(bytes: &[u8], expected_fingerprint: u32) -> Result<TableSet, ArtifactError> {
    if bytes.len() < HEADER_LEN {
        return Err(ArtifactError::Truncated);
    }
    if bytes[0..4] != MAGIC {
        return Err(ArtifactError::BadMagic);
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(ArtifactError::Version { found: version });
    }
    let found = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
    if found != expected_fingerprint {
        return Err(ArtifactError::Stale {
            found,
            expected: expected_fingerprint,
        });
    }
    Ok(postcard::from_bytes(&bytes[HEADER_LEN..])?)
}
