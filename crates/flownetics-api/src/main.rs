#![forbid(unsafe_code)]

//! Flownetics API server binary.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flownetics_api::AppConfig;

/// Flownetics website API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "FLOWNETICS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print a bcrypt hash for ADMIN_PASSWORD_HASH
    HashPassword {
        /// Plain-text password
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flownetics=debug".into()),
        )
        .init();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = AppConfig::load_with_env(args.config.as_deref())?;
            flownetics_api::serve(config).await?;
        }
        Command::HashPassword { password } => {
            let hash = flownetics_auth::hash_password(&password)?;
            println!("{hash}");
        }
    }

    Ok(())
}
