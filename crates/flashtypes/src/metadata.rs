//! Contains the [`Metadata`] type used in Flashblocks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::receipt::Receipt;

/// Metadata associated with a flashblock.
///
/// Addresses, hashes and balances are carried verbatim as the hex strings the
/// feed produced them in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Metadata {
    /// Block number this flashblock belongs to.
    #[serde(default)]
    pub block_number: u64,
    /// Updated account balances, keyed by address.
    #[serde(default)]
    pub new_account_balances: HashMap<String, String>,
    /// Transaction receipts indexed by hash.
    #[serde(default)]
    pub receipts: HashMap<String, Receipt>,
}

impl Metadata {
    /// Returns true if there are no receipts or balance updates.
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty() && self.new_account_balances.is_empty()
    }

    /// Returns the number of receipts tracked by this metadata.
    pub fn receipts_len(&self) -> usize {
        self.receipts.len()
    }

    /// Returns the number of balance updates in this metadata.
    pub fn balance_updates_len(&self) -> usize {
        self.new_account_balances.len()
    }

    /// Fetches the updated balance for a given address, if it exists.
    pub fn balance_for(&self, address: &str) -> Option<&str> {
        self.new_account_balances.get(address).map(String::as_str)
    }

    /// Returns true if there is a balance update for the provided address.
    pub fn has_balance_update(&self, address: &str) -> bool {
        self.new_account_balances.contains_key(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_empty_metadata() {
        let metadata = Metadata::default();

        assert!(metadata.is_empty());
        assert_eq!(metadata.receipts_len(), 0);
        assert_eq!(metadata.balance_updates_len(), 0);
    }

    #[test]
    fn reports_balance_updates() {
        let address = "0x1111111111111111111111111111111111111111";
        let mut balances = HashMap::new();
        balances.insert(address.to_string(), "0x2a".to_string());

        let metadata = Metadata {
            block_number: 1,
            new_account_balances: balances,
            receipts: HashMap::new(),
        };

        assert!(!metadata.is_empty());
        assert_eq!(metadata.balance_updates_len(), 1);
        assert!(metadata.has_balance_update(address));
        assert_eq!(metadata.balance_for(address), Some("0x2a"));
    }
}
