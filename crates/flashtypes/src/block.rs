//! Contains the [`Flashblock`] type and its wire-format constructors.

use serde::{Deserialize, Serialize};

use crate::decode::{FrameKind, decode_frame};
use crate::diff::BlockDiff;
use crate::error::{FlashblockDecodeError, FlashblockParseError};
use crate::metadata::Metadata;

/// A single flashblock event from the stream.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Flashblock {
    /// Execution payload delta for this flashblock.
    #[serde(default)]
    pub diff: BlockDiff,
    /// Position of this flashblock within its block, starting at zero.
    #[serde(default)]
    pub index: u64,
    /// Receipts, balance changes and block context.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Flashblock {
    /// Parses a flashblock from canonical JSON bytes.
    ///
    /// The offending payload is kept on the error so callers can surface what
    /// the feed actually sent.
    pub fn from_json(bytes: &[u8]) -> Result<Self, FlashblockParseError> {
        serde_json::from_slice(bytes).map_err(|source| FlashblockParseError {
            raw: bytes.to_vec(),
            source,
        })
    }

    /// Decodes a raw frame and parses the resulting document.
    pub fn try_decode(kind: FrameKind, raw: &[u8]) -> Result<Self, FlashblockDecodeError> {
        let canonical = decode_frame(kind, raw)?;
        Ok(Self::from_json(&canonical)?)
    }
}
