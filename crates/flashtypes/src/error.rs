//! Contains error types relating to flashblock frame decoding.

use std::borrow::Cow;

use derive_more::{Display, Error, From};

/// Errors that can occur while decoding a flashblock frame end to end.
///
/// Both variants are per-frame and recoverable: the offending frame is
/// dropped and the stream keeps going.
#[derive(Debug, Display, Error, From)]
pub enum FlashblockDecodeError {
    /// Brotli decompression of a binary frame failed.
    #[display("{_0}")]
    Decompress(FrameDecodeError),
    /// The decoded payload did not match the flashblock schema.
    #[display("{_0}")]
    PayloadParse(FlashblockParseError),
}

/// Decompression failure for a binary frame.
#[derive(Debug, Display, Error)]
#[display("failed to decompress {input_len}-byte brotli payload: {source}")]
pub struct FrameDecodeError {
    /// Byte length of the compressed input that failed to decode.
    pub input_len: usize,
    /// Underlying decompressor error.
    pub source: std::io::Error,
}

/// Schema or structural failure while parsing canonical payload bytes.
#[derive(Debug, Display, Error)]
#[display("failed to parse flashblock payload JSON: {source}")]
pub struct FlashblockParseError {
    /// The document that failed to parse, kept for diagnostic echo.
    pub raw: Vec<u8>,
    /// Underlying deserializer error.
    pub source: serde_json::Error,
}

impl FlashblockParseError {
    /// The offending document as lossy UTF-8, for logging.
    pub fn raw_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}
