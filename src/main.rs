use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use tg_feedstore::config;
use tg_feedstore::db::Store;

#[derive(Debug, Parser)]
#[command(author, version, about = "Inspect and maintain the feed bot's SQLite store")]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database (if missing) and exit
    Init,
    /// Print one user
    User { telegram_id: i64 },
    /// List every tracked url
    Urls,
    /// List a user's bookmarks
    Bookmarks { telegram_id: i64 },
    /// List users bookmarking a url
    Subscribers { url: String },
    /// List channels, optionally only those bound to one url
    Channels {
        #[arg(long)]
        url: Option<String>,
    },
    /// Bookmark a url for a user under an alias
    AddBookmark {
        telegram_id: i64,
        url: String,
        alias: String,
    },
    /// Remove a user's bookmark on a url
    RemoveBookmark { telegram_id: i64, url: String },
    /// Bind a channel to a url
    AddChannel { channel_name: String, url: String },
    /// Unbind a channel from a url
    RemoveChannel { channel_name: String, url: String },
    /// Delete urls that nothing references
    Prune,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    cfg.ensure_dirs()?;

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| cfg.database_url());
    let store = match cfg.schema_path() {
        Some(path) => Store::connect_with_schema_file(&database_url, &path).await?,
        None => Store::connect(&database_url).await?,
    };

    match args.command {
        Command::Init => info!(url = %database_url, "store ready"),
        Command::User { telegram_id } => print_json(&store.get_user(telegram_id).await?)?,
        Command::Urls => print_json(&store.get_all_urls().await?)?,
        Command::Bookmarks { telegram_id } => {
            print_json(&store.get_bookmarks_for_user(telegram_id).await?)?
        }
        Command::Subscribers { url } => print_json(&store.get_users_for_url(&url).await?)?,
        Command::Channels { url: Some(url) } => {
            print_json(&store.get_channels_for_url(&url).await?)?
        }
        Command::Channels { url: None } => print_json(&store.get_channels().await?)?,
        Command::AddBookmark {
            telegram_id,
            url,
            alias,
        } => {
            store.add_bookmark(telegram_id, &url, &alias).await?;
            info!(telegram_id, url = %url, alias = %alias, "bookmark added");
        }
        Command::RemoveBookmark { telegram_id, url } => {
            store.remove_bookmark(telegram_id, &url).await?;
            info!(telegram_id, url = %url, "bookmark removed");
        }
        Command::AddChannel { channel_name, url } => {
            store.add_channel(&channel_name, &url).await?;
            info!(channel = %channel_name, url = %url, "channel added");
        }
        Command::RemoveChannel { channel_name, url } => {
            store.remove_channel(&channel_name, &url).await?;
            info!(channel = %channel_name, url = %url, "channel removed");
        }
        Command::Prune => {
            let removed = store.prune_orphans().await?;
            println!("{removed}");
        }
    }

    store.close().await;
    Ok(())
}
