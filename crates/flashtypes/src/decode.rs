//! Frame decoding: turning a raw stream payload into canonical JSON bytes.

use std::borrow::Cow;
use std::io::Read;

use crate::error::FrameDecodeError;

/// The two payload-bearing frame kinds on a flashblocks stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Uncompressed UTF-8 JSON document.
    Text,
    /// Brotli-compressed JSON document.
    Binary,
}

/// Decodes a raw frame into canonical JSON bytes.
///
/// Text frames are returned unchanged. Binary frames are decompressed fully
/// into memory; a corrupt or truncated stream fails the whole frame. Control
/// frames never reach this function — the subscriber skips them.
pub fn decode_frame(kind: FrameKind, raw: &[u8]) -> Result<Cow<'_, [u8]>, FrameDecodeError> {
    match kind {
        FrameKind::Text => Ok(Cow::Borrowed(raw)),
        FrameKind::Binary => {
            let mut decompressor = brotli::Decompressor::new(raw, 4096);
            let mut decompressed = Vec::new();
            decompressor
                .read_to_end(&mut decompressed)
                .map_err(|source| FrameDecodeError {
                    input_len: raw.len(),
                    source,
                })?;
            Ok(Cow::Owned(decompressed))
        }
    }
}
