//! International catalog conversion and master-catalog synthesis.

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
    master_output: &Path,
) -> Result<()> {
    let profile = Profile::international();
    let client = FeedClient::new();

    let (records, sources) = gather_inputs(
        &client,
        &profile,
        data_dir,
        "intl_mapping.json",
        songs_url,
        community_url,
    )
    .await?;

    let mut pipeline = Pipeline::new(profile);
    let catalog = pipeline.convert(&records, &sources);
    let catalog = pipeline.finalize_international(catalog, &sources.origin);

    maicat_core::save_catalog(output, &catalog)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("International catalog written to {}", output.display());

    let master = pipeline.synthesize_master(&catalog, sources.origin);
    maicat_core::save_catalog(master_output, &master)
        .with_context(|| format!("Failed to write {}", master_output.display()))?;
    info!("Master catalog written to {}", master_output.display());

    Ok(())
}
