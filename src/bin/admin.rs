//! CLI administration tool for kv-shortener.
//!
//! Talks to the same Redis instance as the server, through the same engine,
//! so links created here behave exactly like links created over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL for 60 minutes
//! cargo run --bin admin -- shorten https://example.com --expire 60
//!
//! # Show the detail record of a code
//! cargo run --bin admin -- info 1c
//!
//! # Resolve a code to its URL
//! cargo run --bin admin -- resolve 1c
//!
//! # Show the last allocated ID
//! cargo run --bin admin -- counter
//!
//! # Decode a code to its counter value (offline)
//! cargo run --bin admin -- decode 1c
//!
//! # Check the Redis connection
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` (or `REDIS_HOST` and friends) and
//! `STORE_TIMEOUT_MS`.

use kv_shortener::application::services::ShortenerService;
use kv_shortener::config;
use kv_shortener::domain::store::KeyValueStore;
use kv_shortener::infrastructure::store::RedisStore;
use kv_shortener::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing kv-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,

        /// Lifetime in minutes (0 = never expires)
        #[arg(short, long, default_value_t = 60)]
        expire: i64,
    },

    /// Show the detail record of a short code
    Info {
        /// Short code
        code: String,
    },

    /// Resolve a short code to its URL
    Resolve {
        /// Short code
        code: String,
    },

    /// Show the last allocated link ID
    Counter,

    /// Decode a short code to its counter value
    Decode {
        /// Short code
        code: String,
    },

    /// Check the Redis connection
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Decode { code } = &cli.command {
        return decode(code);
    }

    let config = config::load_from_env()?;
    let store = Arc::new(
        RedisStore::connect(&config.redis_url, config.store_timeout())
            .await
            .context("Failed to connect to Redis")?,
    );
    let shortener = ShortenerService::new(store.clone());

    match cli.command {
        Commands::Shorten { url, expire } => {
            let code = shortener.shorten(&url, expire).await?;
            println!("{} {}", "✓".green().bold(), code.bold());
            if let Some(base) = config.base_url.as_deref() {
                println!("  {}", shortener.short_url(base, &code).cyan());
            }
        }
        Commands::Info { code } => {
            let detail = shortener.shorten_info(&code).await?;
            println!("{}", code.bold());
            println!("  {:<10} {}", "URL:".dimmed(), detail.url);
            println!("  {:<10} {}", "Created:".dimmed(), detail.create_at);
            let expiry = if detail.expired == 0 {
                "never".to_string()
            } else {
                format!("{} min", detail.expired)
            };
            println!("  {:<10} {}", "Expires:".dimmed(), expiry);
        }
        Commands::Resolve { code } => {
            let url = shortener.unshorten(&code).await?;
            println!("{}", url);
        }
        Commands::Counter => match shortener.last_allocated_id().await? {
            Some(id) => println!(
                "Last allocated ID: {} ({})",
                id.to_string().bold(),
                u64::try_from(id)
                    .map(base62::encode)
                    .unwrap_or_default()
                    .cyan()
            ),
            None => println!("{}", "No links allocated yet".yellow()),
        },
        Commands::Ping => {
            if store.health_check().await {
                println!("{} Redis is reachable", "✓".green().bold());
            } else {
                println!("{} Redis did not answer PING", "✗".red().bold());
                std::process::exit(1);
            }
        }
        Commands::Decode { code } => decode(&code)?,
    }

    Ok(())
}

fn decode(code: &str) -> Result<()> {
    match base62::decode(code) {
        Some(id) => println!("{} -> {}", code, id.to_string().bold()),
        None => anyhow::bail!("'{}' is not a valid base62 code", code),
    }
    Ok(())
}
