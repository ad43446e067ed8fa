use std::fmt;

use flashblocks_types::Flashblock;

const SEPARATOR: &str = "═══════════════════════════════════════════════════════════════";

/// At most this many receipts are listed per flashblock; the rest collapse
/// into an overflow count.
const RECEIPT_DISPLAY_CAP: usize = 3;

/// Console rendering of one flashblock.
///
/// Receipts are listed in mapping order, which is arbitrary; entries without
/// a recognized payload still count against the display cap but print no
/// line, matching the receipt total shown above them.
pub struct FlashblockSummary<'a>(pub &'a Flashblock);

impl fmt::Display for FlashblockSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flashblock = self.0;

        writeln!(f, "{SEPARATOR}")?;
        writeln!(
            f,
            "FLASHBLOCK #{} | Block: {} | Hash: {}",
            flashblock.index,
            flashblock.metadata.block_number,
            truncate_hash(&flashblock.diff.block_hash)
        )?;
        writeln!(f, "{SEPARATOR}")?;

        writeln!(f, "  Gas Used:       {}", flashblock.diff.gas_used)?;
        writeln!(f, "  Blob Gas Used:  {}", flashblock.diff.blob_gas_used)?;
        writeln!(f, "  State Root:     {}", truncate_hash(&flashblock.diff.state_root))?;
        writeln!(f, "  Receipts Root:  {}", truncate_hash(&flashblock.diff.receipts_root))?;

        writeln!(f, "\n  Transactions: {}", flashblock.diff.transactions_len())?;
        for (i, tx) in flashblock.diff.transactions.iter().enumerate() {
            writeln!(f, "    [{i}] {}...", truncate_hash(tx))?;
        }

        writeln!(f, "\n  Account Balance Updates: {}", flashblock.metadata.balance_updates_len())?;

        writeln!(f, "\n  Receipts: {}", flashblock.metadata.receipts_len())?;
        for (seen, (tx_hash, receipt)) in flashblock.metadata.receipts.iter().enumerate() {
            if seen >= RECEIPT_DISPLAY_CAP {
                writeln!(
                    f,
                    "    ... and {} more receipts",
                    flashblock.metadata.receipts_len() - RECEIPT_DISPLAY_CAP
                )?;
                break;
            }
            if let Some(data) = receipt.data() {
                writeln!(
                    f,
                    "    [{}] {} - Status: {}, Logs: {}",
                    receipt.type_label(),
                    truncate_hash(tx_hash),
                    data.status,
                    data.logs.len()
                )?;
            }
        }

        writeln!(f)
    }
}

/// Shortens long hex identifiers for display, keeping both ends.
///
/// Strings of 20 bytes or fewer pass through verbatim, as does anything whose
/// head or tail would split a multi-byte character.
pub fn truncate_hash(hash: &str) -> String {
    if hash.len() <= 20 {
        return hash.to_string();
    }
    match (hash.get(..10), hash.get(hash.len() - 8..)) {
        (Some(head), Some(tail)) => format!("{head}...{tail}"),
        _ => hash.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", "")]
    #[case::short("0x1234", "0x1234")]
    #[case::exactly_twenty("0x123456789012345678", "0x123456789012345678")]
    #[case::twenty_one("0x1234567890123456789", "0x12345678...23456789")]
    #[case::block_hash(
        "0x8f5b7c9a3e2d1f4b6a8c0e2d4f6b8a0c2e4d6f8b0a2c4e6d8f0b2a4c6e8d0f2b",
        "0x8f5b7c9a...6e8d0f2b"
    )]
    fn truncates_long_hashes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(truncate_hash(input), expected);
    }

    #[test]
    fn truncating_twenty_one_bytes_yields_twenty_one_characters() {
        let truncated = truncate_hash("0x1234567890123456789");

        assert_eq!(truncated.len(), 21);
    }

    #[test]
    fn leaves_multibyte_boundaries_alone() {
        let input = "0x1234567é0123456789012345";

        assert_eq!(truncate_hash(input), input);
    }

    #[test]
    fn renders_a_flashblock_without_receipts() {
        let raw = br#"{
            "diff": {
                "block_hash": "0x8f5b7c9a3e2d1f4b6a8c0e2d4f6b8a0c2e4d6f8b0a2c4e6d8f0b2a4c6e8d0f2b",
                "gas_used": "0x1a4c0",
                "blob_gas_used": "0x0",
                "state_root": "0x1111111111111111111111111111111111111111111111111111111111111111",
                "receipts_root": "0x2222222222222222222222222222222222222222222222222222222222222222",
                "transactions": ["0x02f8708301a4c08459682f008459682f14825208941111111111111111111111111111111111111111"]
            },
            "index": 4,
            "metadata": {"block_number": 31959171}
        }"#;
        let flashblock = Flashblock::from_json(raw).unwrap();

        let rendered = FlashblockSummary(&flashblock).to_string();

        let expected = format!(
            "{SEPARATOR}\n\
             FLASHBLOCK #4 | Block: 31959171 | Hash: 0x8f5b7c9a...6e8d0f2b\n\
             {SEPARATOR}\n\
             \x20 Gas Used:       0x1a4c0\n\
             \x20 Blob Gas Used:  0x0\n\
             \x20 State Root:     0x11111111...11111111\n\
             \x20 Receipts Root:  0x22222222...22222222\n\
             \n\
             \x20 Transactions: 1\n\
             \x20   [0] 0x02f87083...11111111...\n\
             \n\
             \x20 Account Balance Updates: 0\n\
             \n\
             \x20 Receipts: 0\n\
             \n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_receipt_lines_with_type_and_log_count() {
        let raw = br#"{
            "diff": {},
            "index": 1,
            "metadata": {
                "block_number": 12,
                "new_account_balances": {"0xaaaa": "0x10", "0xbbbb": "0x20"},
                "receipts": {
                    "0x3333333333333333333333333333333333333333333333333333333333333333": {
                        "Eip1559": {"cumulativeGasUsed": "0x5208", "logs": [{"address": "0xaa", "data": "0x", "topics": []}], "status": "0x1"}
                    }
                }
            }
        }"#;
        let flashblock = Flashblock::from_json(raw).unwrap();

        let rendered = FlashblockSummary(&flashblock).to_string();

        assert!(rendered.contains("  Account Balance Updates: 2\n"));
        assert!(rendered.contains("  Receipts: 1\n"));
        assert!(rendered.contains("    [EIP-1559] 0x33333333...33333333 - Status: 0x1, Logs: 1\n"));
        assert!(!rendered.contains("more receipts"));
    }

    #[test]
    fn caps_receipt_listing_at_three_entries() {
        let mut entries = String::new();
        for i in 0..5 {
            if i > 0 {
                entries.push(',');
            }
            entries.push_str(&format!(
                r#""0x{i:064x}": {{"Legacy": {{"cumulativeGasUsed": "0x1", "logs": [], "status": "0x1"}}}}"#
            ));
        }
        let raw = format!(
            r#"{{"diff": {{}}, "index": 0, "metadata": {{"block_number": 3, "receipts": {{{entries}}}}}}}"#
        );
        let flashblock = Flashblock::from_json(raw.as_bytes()).unwrap();

        let rendered = FlashblockSummary(&flashblock).to_string();

        let receipt_lines = rendered.lines().filter(|line| line.starts_with("    [Legacy]")).count();
        assert!(rendered.contains("  Receipts: 5\n"));
        assert_eq!(receipt_lines, 3);
        assert!(rendered.contains("    ... and 2 more receipts\n"));
    }

    #[test]
    fn unrecognized_receipts_consume_display_slots_silently() {
        let raw = br#"{
            "diff": {},
            "index": 2,
            "metadata": {
                "block_number": 9,
                "receipts": {"0x4444": {"Eip4844": {"status": "0x1"}}}
            }
        }"#;
        let flashblock = Flashblock::from_json(raw).unwrap();

        let rendered = FlashblockSummary(&flashblock).to_string();

        assert!(rendered.contains("  Receipts: 1\n"));
        assert!(!rendered.contains("    ["));
        assert!(!rendered.contains("more receipts"));
    }
}
