//! Domestic catalog conversion.

use std::path::Path;

use anyhow::{Context, Result};
use maicat_core::{FeedClient, Pipeline, Profile};
use tracing::info;

use super::gather_inputs;

pub async fn run(
    data_dir: &Path,
    songs_url: Option<&str>,
    community_url: Option<&str>,
    output: &Path,
) -> Result<()> {
    let profile = Profile::domestic();
    let client = FeedClient::new();

    let (records, sources) = gather_inputs(
        &client,
        &profile,
        data_dir,
        "mapping.json",
        songs_url,
        community_url,
    )
    .await?;

    let mut pipeline = Pipeline::new(profile);
    let catalog = pipeline.convert(&records, &sources);

    maicat_core::save_catalog(output, &catalog)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Domestic catalog written to {}", output.display());
    Ok(())
}
