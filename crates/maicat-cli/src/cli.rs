//! CLI argument definitions for maicat.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "maicat")]
#[command(about = "Chart catalog converter", version)]
pub struct Args {
    /// Directory holding the version mapping and the cached catalog
    #[arg(long, default_value = "music_data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert the domestic catalog
    Domestic {
        /// Song feed URL (defaults to the profile's)
        #[arg(long, env = "MAICAT_SONGS_URL")]
        songs_url: Option<String>,
        /// Community rating feed URL
        #[arg(long, env = "MAICAT_COMMUNITY_URL")]
        community_url: Option<String>,
        /// Output file path
        #[arg(short, long, default_value = "convert_music_data.json")]
        output: PathBuf,
    },
    /// Convert the international catalog and synthesize the master document
    Intl {
        /// Song feed URL (defaults to the profile's)
        #[arg(long, env = "MAICAT_SONGS_URL")]
        songs_url: Option<String>,
        /// Community rating feed URL
        #[arg(long, env = "MAICAT_COMMUNITY_URL")]
        community_url: Option<String>,
        /// Converted catalog output path
        #[arg(short, long, default_value = "convert_intl_music_data.json")]
        output: PathBuf,
        /// Master catalog output path
        #[arg(long, default_value = "intl_music_data.json")]
        master_output: PathBuf,
    },
}
