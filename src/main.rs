use anyhow::Context;
use clap::Parser;
use mtg_artbot::publish::{Credentials, TwitterPublisher};
use mtg_artbot::Artbot;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Post a random Magic: The Gathering card's artwork and flavor text.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Download the bulk dataset even if the local cache is fresh.
    #[arg(long)]
    always_refresh: bool,

    /// Directory for the card cache and downloaded artwork.
    #[arg(long, value_name = "PATH")]
    cache_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Credentials are checked before any network traffic.
    let credentials = Credentials::from_env()?;

    let mut builder = Artbot::builder().always_refresh(cli.always_refresh);
    if let Some(dir) = cli.cache_dir {
        builder = builder.cache_dir(dir);
    }
    let bot = builder.build().context("failed to initialize the bot")?;
    tracing::debug!("{}", bot);

    let publisher = TwitterPublisher::new(bot.http_client(), credentials);
    let posted = bot.post(&publisher)?;
    println!("{}", posted.caption);
    Ok(())
}
