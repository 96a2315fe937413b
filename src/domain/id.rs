//! Entity identifiers and per-backend identifier formats.
//!
//! Every stored entity is keyed by an [`EntityId`]. The textual shape of an
//! id depends on the storage backend: the PostgreSQL catalog mints
//! 24-character hex tokens, the in-memory catalog issues positive integers
//! from a monotonic counter. [`IdFormat::parse`] is the identifier
//! validator that runs before any store lookup, so a malformed id is
//! reported as 400 rather than a misleading 404.

use rand::RngCore;
use serde::Serialize;
use std::fmt;

use crate::error::AppError;

/// Hex token length in characters (12 random bytes, hex encoded).
pub const HEX_ID_LEN: usize = 24;

/// Opaque identifier of a stored entity.
///
/// Constructed only by the storage backends (which mint fresh ids) and by
/// [`IdFormat::parse`] (which validates client-supplied ids). Handlers and
/// services never build one from raw input directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(String);

impl EntityId {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier format accepted by the active storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// 24 hex digits, as minted by the PostgreSQL catalog. Case-insensitive
    /// on input, normalized to lowercase.
    Hex,
    /// Positive decimal integer without leading zeros, as issued by the
    /// in-memory catalog.
    Serial,
}

impl IdFormat {
    /// Validates a path- or body-supplied identifier.
    ///
    /// Pure check, no store access. Fails with [`AppError::InvalidId`] so a
    /// malformed id never reaches the store.
    pub fn parse(&self, raw: &str) -> Result<EntityId, AppError> {
        match self {
            IdFormat::Hex => {
                if raw.len() == HEX_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
                    Ok(EntityId::new(raw.to_ascii_lowercase()))
                } else {
                    Err(AppError::invalid_id())
                }
            }
            IdFormat::Serial => {
                let well_formed = !raw.is_empty()
                    && raw.bytes().all(|b| b.is_ascii_digit())
                    && !raw.starts_with('0')
                    && raw.parse::<u64>().is_ok();
                if well_formed {
                    Ok(EntityId::new(raw))
                } else {
                    Err(AppError::invalid_id())
                }
            }
        }
    }
}

/// Mints a fresh hex token identifier for the PostgreSQL catalog.
pub fn generate_hex_id() -> EntityId {
    let mut bytes = [0u8; HEX_ID_LEN / 2];
    rand::rng().fill_bytes(&mut bytes);
    EntityId::new(hex::encode(bytes))
}
