//! Subcommand implementations.

pub mod domestic;
pub mod intl;

use std::path::Path;

use anyhow::{Context, Result};
use maicat_core::{FeedClient, PipelineSources, Profile, RawSong};
use tracing::{info, warn};

/// Cached catalog file name inside the data directory.
const ORIGIN_FILE: &str = "origin_music_data.json";

/// Locally cached community dataset, used when the feed is unreachable.
const COMMUNITY_FILE: &str = "community_data.json";

/// Fetch the song feed and assemble the secondary sources for one run.
///
/// The primary feed is required; every secondary source degrades to an
/// empty collection with a warning.
pub(crate) async fn gather_inputs(
    client: &FeedClient,
    profile: &Profile,
    data_dir: &Path,
    mapping_file: &str,
    songs_url: Option<&str>,
    community_url: Option<&str>,
) -> Result<(Vec<RawSong>, PipelineSources)> {
    let songs_url = songs_url.unwrap_or(profile.song_feed_url);
    let records = client
        .fetch_songs(songs_url)
        .await
        .with_context(|| format!("Failed to fetch song feed from {songs_url}"))?;

    let community_url = community_url.unwrap_or(profile.community_feed_url);
    let community = match client.fetch_community(community_url).await {
        Ok(entries) => entries,
        Err(e) => {
            // Fall back to a locally cached copy of the dataset.
            let local = data_dir.join(COMMUNITY_FILE);
            warn!("Failed to fetch community ratings: {}, trying {}", e, local.display());
            match maicat_core::load_community(&local) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to load local community ratings: {}, continuing without", e);
                    Vec::new()
                }
            }
        }
    };

    let mapping_path = data_dir.join(mapping_file);
    let versions = match maicat_core::load_version_map(&mapping_path) {
        Ok(map) => {
            if map.is_empty() {
                warn!(
                    "No version mapping at {}, dates pass through unmapped",
                    mapping_path.display()
                );
            }
            map
        }
        Err(e) => {
            warn!("Failed to load version mapping: {}, dates pass through unmapped", e);
            Default::default()
        }
    };

    let origin_path = data_dir.join(ORIGIN_FILE);
    let origin = match maicat_core::load_catalog(&origin_path) {
        Ok(catalog) => {
            info!(
                "Loaded {} cached entries from {}",
                catalog.len(),
                origin_path.display()
            );
            catalog
        }
        Err(e) => {
            warn!("Failed to load cached catalog: {}, starting empty", e);
            Vec::new()
        }
    };

    Ok((
        records,
        PipelineSources {
            origin,
            community,
            versions,
        },
    ))
}
