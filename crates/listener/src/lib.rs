pub mod cli;
pub mod display;
pub mod metrics;
pub mod subscriber;

pub use cli::{ListenerArgs, Network};
pub use display::FlashblockSummary;
pub use metrics::Metrics;
pub use subscriber::FlashblocksSubscriber;
