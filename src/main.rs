//! pagemeta CLI
//!
//! Resolves metadata for one URL and prints it as JSON.

use clap::Parser;
use pagemeta::{ClientConfig, RetrieveOptions, Retriever};
use tracing_subscriber::EnvFilter;

/// Resolve structured metadata for a URL
#[derive(Parser, Debug)]
#[command(name = "pagemeta")]
#[command(version)]
#[command(about = "Resolve title, Open Graph data and icons for a URL")]
struct Args {
    /// Address to inspect
    url: String,

    /// Skip icon resolution and verification
    #[arg(long)]
    no_icons: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// User agent to send (overrides PAGEMETA_USER_AGENT)
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in milliseconds (overrides PAGEMETA_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env()?;
    if let Some(ua) = args.user_agent {
        config.user_agent = ua;
    }
    if let Some(ms) = args.timeout_ms {
        config.timeout_ms = ms;
    }

    let options = RetrieveOptions {
        extended: !args.no_icons,
    };

    let retriever = Retriever::from_config(config)?;
    let record = retriever.retrieve(&args.url, options).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);

    Ok(())
}
