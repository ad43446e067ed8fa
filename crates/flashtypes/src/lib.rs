#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/base/flashblocks-listener/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod block;
pub use block::Flashblock;

mod decode;
pub use decode::{FrameKind, decode_frame};

mod diff;
pub use diff::BlockDiff;

mod error;
pub use error::{FlashblockDecodeError, FlashblockParseError, FrameDecodeError};

mod metadata;
pub use metadata::Metadata;

mod receipt;
pub use receipt::{Log, Receipt, ReceiptData};
