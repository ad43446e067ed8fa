use clap::Parser;
use flashblocks_listener::{FlashblockSummary, FlashblocksSubscriber, ListenerArgs, Metrics};
use tracing::info;
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashblocks_listener=info".into()),
        )
        .init();

    let args = ListenerArgs::parse();
    let url = Url::parse(args.network.ws_url())?;

    info!("Connecting to Base flashblocks on {}: {}", args.network, url);

    let subscriber = FlashblocksSubscriber::new(
        url,
        |flashblock| print!("{}", FlashblockSummary(&flashblock)),
        Metrics::default(),
    );

    subscriber.run().await
}
