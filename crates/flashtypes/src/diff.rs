//! Contains the [`BlockDiff`] type carried in every flashblock.

use serde::{Deserialize, Serialize};

/// The execution payload delta announced by a flashblock.
///
/// Hex-encoded fields are kept as opaque strings; transactions are raw signed
/// envelopes and withdrawals are passed through untyped.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BlockDiff {
    /// Total blob gas consumed so far in the block.
    #[serde(default)]
    pub blob_gas_used: String,
    /// Hash of the block being built.
    #[serde(default)]
    pub block_hash: String,
    /// Total gas consumed so far in the block.
    #[serde(default)]
    pub gas_used: String,
    /// Bloom filter over the logs emitted so far.
    #[serde(default)]
    pub logs_bloom: String,
    /// Receipts trie root after this diff.
    #[serde(default)]
    pub receipts_root: String,
    /// State trie root after this diff.
    #[serde(default)]
    pub state_root: String,
    /// Raw signed transaction envelopes, hex encoded.
    #[serde(default)]
    pub transactions: Vec<String>,
    /// Withdrawal operations included in the diff.
    #[serde(default)]
    pub withdrawals: Vec<serde_json::Value>,
    /// Withdrawals trie root after this diff.
    #[serde(default)]
    pub withdrawals_root: String,
}

impl BlockDiff {
    /// Returns the number of transactions included in this diff.
    pub fn transactions_len(&self) -> usize {
        self.transactions.len()
    }
}
