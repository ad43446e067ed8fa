use std::fmt;

use clap::{Parser, ValueEnum};

pub const MAINNET_WS_URL: &str = "wss://mainnet.flashblocks.base.org/ws";
pub const SEPOLIA_WS_URL: &str = "wss://sepolia.flashblocks.base.org/ws";

#[derive(Parser, Debug, Clone)]
#[command(name = "flashblocks-listener")]
#[command(about = "Streams flashblocks from the Base websocket feed to the console")]
pub struct ListenerArgs {
    #[arg(
        long,
        env = "FLASHBLOCKS_NETWORK",
        default_value = "mainnet",
        help = "Network to connect to: mainnet or sepolia"
    )]
    pub network: Network,
}

/// Networks with a public flashblocks endpoint.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Sepolia,
}

impl Network {
    /// Returns the flashblocks websocket endpoint for this network.
    pub fn ws_url(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_WS_URL,
            Self::Sepolia => SEPOLIA_WS_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Sepolia => write!(f, "sepolia"),
        }
    }
}
