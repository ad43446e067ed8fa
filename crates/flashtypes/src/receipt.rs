//! Contains the [`Receipt`] envelope and its typed payload.

use serde::{Deserialize, Serialize};

/// A single log emitted by a transaction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Log {
    /// Address of the contract that emitted the log.
    #[serde(default)]
    pub address: String,
    /// ABI-encoded event payload, hex encoded.
    #[serde(default)]
    pub data: String,
    /// Indexed event topics, hex encoded.
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Receipt fields shared by every supported transaction type.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReceiptData {
    /// Running gas total for the block after this transaction.
    #[serde(rename = "cumulativeGasUsed", default)]
    pub cumulative_gas_used: String,
    /// Logs emitted by the transaction.
    #[serde(default)]
    pub logs: Vec<Log>,
    /// Execution status, `"0x1"` on success.
    #[serde(default)]
    pub status: String,
}

/// A transaction receipt tagged with its envelope type.
///
/// The wire form nests the payload under an `"Eip1559"` or `"Legacy"` key. A
/// receipt carrying neither key deserializes to [`Receipt::Absent`] rather
/// than failing the whole flashblock; one carrying both resolves to
/// [`Receipt::Eip1559`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(from = "ReceiptWire", into = "ReceiptWire")]
pub enum Receipt {
    /// An EIP-1559 dynamic fee transaction receipt.
    Eip1559(ReceiptData),
    /// A legacy transaction receipt.
    Legacy(ReceiptData),
    /// A receipt whose envelope type is not recognized.
    #[default]
    Absent,
}

impl Receipt {
    /// Returns the receipt payload, if the envelope carried one.
    pub fn data(&self) -> Option<&ReceiptData> {
        match self {
            Self::Eip1559(data) | Self::Legacy(data) => Some(data),
            Self::Absent => None,
        }
    }

    /// Human-readable label for the envelope type.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Eip1559(_) => "EIP-1559",
            Self::Legacy(_) => "Legacy",
            Self::Absent => "Unknown",
        }
    }
}

/// On-the-wire shape of a receipt: one optional field per envelope type.
#[derive(Deserialize, Serialize, Default)]
struct ReceiptWire {
    #[serde(rename = "Eip1559", default, skip_serializing_if = "Option::is_none")]
    eip1559: Option<ReceiptData>,
    #[serde(rename = "Legacy", default, skip_serializing_if = "Option::is_none")]
    legacy: Option<ReceiptData>,
}

impl From<ReceiptWire> for Receipt {
    fn from(wire: ReceiptWire) -> Self {
        match (wire.eip1559, wire.legacy) {
            (Some(data), _) => Self::Eip1559(data),
            (None, Some(data)) => Self::Legacy(data),
            (None, None) => Self::Absent,
        }
    }
}

impl From<Receipt> for ReceiptWire {
    fn from(receipt: Receipt) -> Self {
        match receipt {
            Receipt::Eip1559(data) => Self { eip1559: Some(data), legacy: None },
            Receipt::Legacy(data) => Self { eip1559: None, legacy: Some(data) },
            Receipt::Absent => Self::default(),
        }
    }
}
