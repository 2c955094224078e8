mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maicat_cli=info,maicat_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    match args.command {
        Command::Domestic {
            songs_url,
            community_url,
            output,
        } => {
            commands::domestic::run(
                &args.data_dir,
                songs_url.as_deref(),
                community_url.as_deref(),
                &output,
            )
            .await
        }
        Command::Intl {
            songs_url,
            community_url,
            output,
            master_output,
        } => {
            commands::intl::run(
                &args.data_dir,
                songs_url.as_deref(),
                community_url.as_deref(),
                &output,
                &master_output,
            )
            .await
        }
    }
}
