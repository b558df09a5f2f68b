use anyhow::Context;
use clap::Parser;
use feed_loader::utils::logger;
use feed_loader::{
    CliConfig, FeedConfig, FeedError, FeedLoader, RemoteFeedLoader, ReqwestHttpClient,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting feed-loader CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    let loader = match build_loader(&config) {
        Ok(loader) => loader,
        Err(e) => exit_with(e),
    };

    match loader.load().await {
        Ok(items) => {
            let output =
                serde_json::to_string_pretty(&items).context("failed to render feed items")?;
            println!("{}", output);
            Ok(())
        }
        Err(e) => exit_with(FeedError::from(e)),
    }
}

fn build_loader(config: &FeedConfig) -> feed_loader::Result<RemoteFeedLoader<ReqwestHttpClient>> {
    let url = config.url()?;
    let client = ReqwestHttpClient::with_user_agent(config.timeout(), config.user_agent())?;
    Ok(RemoteFeedLoader::new(url, Arc::new(client)))
}

fn exit_with(e: FeedError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}
