use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::catalog::{ChartEntry, ChartKind};
use crate::profile::{Profile, RatingScope};

/// One row of the community difficulty dataset.
///
/// `kind` stays a plain string so one unknown chart type skips that row
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityEntry {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub ds: Vec<f64>,
}

/// Pass 3: overwrite ratings from the community dataset.
///
/// The community source is authoritative for ratings only - ids and
/// note counts are never touched. The profile decides whether the first
/// two tiers or the whole sequence are replaced.
pub fn apply_community_ratings(
    catalog: &mut [ChartEntry],
    community: &[CommunityEntry],
    profile: &Profile,
) {
    if community.is_empty() {
        return;
    }

    let mut lookup: HashMap<(String, ChartKind), &CommunityEntry> = HashMap::new();
    for item in community {
        let Ok(kind) = item.kind.parse::<ChartKind>() else {
            debug!("Skipping community entry with unknown type {:?}", item.kind);
            continue;
        };
        lookup.insert((item.title.clone(), kind), item);
    }

    for entry in catalog.iter_mut() {
        let Some(rated) = lookup.get(&(entry.title.clone(), entry.kind)) else {
            continue;
        };
        match profile.community_scope {
            RatingScope::FirstTwo => {
                if rated.ds.len() >= 2 && entry.ds.len() >= 2 {
                    entry.ds[0] = rated.ds[0];
                    entry.ds[1] = rated.ds[1];
                }
            }
            RatingScope::Full => {
                entry.ds = rated.ds.clone();
            }
        }
    }
}
