use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Local;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::catalog::ChartEntry;
use crate::error::Result;
use crate::reconcile::CommunityEntry;
use crate::version::VersionMap;

fn load_json_or_default<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found, using empty data", path.display());
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Load a previously-persisted catalog. A missing file is an empty
/// catalog, not an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ChartEntry>> {
    load_json_or_default(path)
}

/// Load a community difficulty dataset from disk (offline alternative
/// to the feed). A missing file is an empty dataset.
pub fn load_community<P: AsRef<Path>>(path: P) -> Result<Vec<CommunityEntry>> {
    load_json_or_default(path)
}

/// Load the date-to-version boundary mapping. A missing file yields a
/// pass-through mapper.
pub fn load_version_map<P: AsRef<Path>>(path: P) -> Result<VersionMap> {
    let mapping: HashMap<String, String> = load_json_or_default(path)?;
    Ok(VersionMap::new(mapping))
}

/// Write a catalog as pretty-printed JSON. An existing file at the
/// target is first moved into an `archive/` directory next to it, with
/// the current date appended to its name.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &[ChartEntry]) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        archive_existing(path)?;
    }

    let content = serde_json::to_string_pretty(catalog)?;
    fs::write(path, content)?;
    info!("Wrote {} entries to {}", catalog.len(), path.display());
    Ok(())
}

fn archive_existing(path: &Path) -> Result<()> {
    let archive_dir = path.parent().unwrap_or(Path::new(".")).join("archive");
    fs::create_dir_all(&archive_dir)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    let archived = archive_dir.join(format!("{}_{}.json", stem, Local::now().format("%Y%m%d")));
    fs::rename(path, &archived)?;
    debug!("Archived previous output to {}", archived.display());
    Ok(())
}
