//! Mint Cam - Geo-tagged Photo NFT Minter
//!
//! CLI entry point: loads configuration and the wallet keypair, optionally
//! uploads a local photo to the hosting endpoint, assembles metadata with the
//! supplied coordinates, and runs one mint pipeline attempt against the
//! configured RPC endpoint.

#![deny(unused_imports)]
#![deny(unused_mut)]
#![warn(unused_must_use)]

use anyhow::{Context, Result};
use clap::Parser;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mintcam::config::Config;
use mintcam::hosting::HostingClient;
use mintcam::pipeline::{route, MintPipeline, MintPolicy, MintView};
use mintcam::wallet::{LocalWallet, WalletSession};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Image to mint: a hosted URL, or a local file to upload first
    #[arg(short, long)]
    image: String,

    /// Capture latitude (omit if location was unavailable)
    #[arg(long)]
    latitude: Option<f64>,

    /// Capture longitude (omit if location was unavailable)
    #[arg(long)]
    longitude: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    info!("Starting Mint Cam");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args.config)?;

    info!("Loading wallet from: {}", config.wallet.keypair_path);
    let wallet =
        LocalWallet::from_file(&config.wallet.keypair_path).context("Failed to load wallet")?;
    info!("Wallet address: {}", wallet.pubkey());

    let commitment = parse_commitment(&config.rpc.commitment);
    let rpc = Arc::new(RpcClient::new_with_commitment(
        config.rpc.endpoint.clone(),
        commitment,
    ));

    // A local path means the photo still needs hosting; a URL is used as-is
    let image_uri = if args.image.starts_with("http://") || args.image.starts_with("https://") {
        args.image.clone()
    } else {
        info!("Uploading image: {}", args.image);
        let bytes = tokio::fs::read(&args.image)
            .await
            .with_context(|| format!("Failed to read image file: {}", args.image))?;
        let file_name = std::path::Path::new(&args.image)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo.jpg")
            .to_string();
        let hosting = HostingClient::new(config.hosting.endpoint.clone())?;
        let url = hosting.upload(&file_name, bytes).await?;
        info!("Image hosted at: {}", url);
        url
    };

    let location = match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => Some((lat, lon)),
        (None, None) => None,
        _ => {
            warn!("Only one coordinate supplied; treating location as unavailable");
            None
        }
    };

    let metadata = mintcam::metadata::assemble(image_uri, location, &wallet.pubkey());
    info!(
        "Minting '{}' ({}) for payer {}",
        metadata.name, metadata.symbol, metadata.payer_address
    );

    let pipeline = MintPipeline::new(rpc, Arc::new(wallet), MintPolicy::from(&config.mint));
    let outcome = pipeline.mint(metadata).await;

    match route(outcome) {
        MintView::Success {
            mint_address,
            metadata,
        } => {
            info!("NFT minted successfully");
            println!("Mint address: {}", mint_address);
            println!("Image: {}", metadata.image_uri);
            for attr in &metadata.attributes {
                println!("{}: {:.6}", attr.trait_type, attr.value);
            }
            Ok(())
        }
        MintView::Failure { reason } => {
            eprintln!("Failed to mint NFT: {}", reason);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "mintcam=debug,info" } else { "mintcam=info,warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}

fn load_config(path: &str) -> Result<Config> {
    if std::path::Path::new(path).exists() {
        info!("Loading configuration from: {}", path);
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path))
    } else {
        warn!("Config file '{}' not found, using defaults", path);
        Ok(Config::default())
    }
}

fn parse_commitment(level: &str) -> CommitmentConfig {
    match level {
        "processed" => CommitmentConfig::processed(),
        "finalized" => CommitmentConfig::finalized(),
        "confirmed" => CommitmentConfig::confirmed(),
        other => {
            warn!("Unknown commitment '{}', defaulting to confirmed", other);
            CommitmentConfig::confirmed()
        }
    }
}
