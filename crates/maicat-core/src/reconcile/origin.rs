use std::collections::HashMap;

use crate::catalog::{ChartEntry, ChartKind};
use crate::profile::Profile;

/// Pass 2: adopt data from the previously-persisted catalog.
///
/// Matching is by `(title, kind)`. Entries whose id was just assigned by
/// the special-case pass are left alone. A matched entry adopts the
/// cached id when the cache has one; profiles with
/// `adopt_origin_fields` additionally take the cached ratings,
/// sub-charts and BPM for entries older than the recency window - the
/// cache holds manual corrections for those, while the newest versions
/// keep their freshly-parsed data.
pub fn adopt_from_origin(catalog: &mut [ChartEntry], origin: &[ChartEntry], profile: &Profile) {
    if origin.is_empty() {
        return;
    }

    let lookup: HashMap<(String, ChartKind), &ChartEntry> = origin
        .iter()
        .map(|entry| ((entry.title.clone(), entry.kind), entry))
        .collect();

    for entry in catalog.iter_mut() {
        if profile.special_case_ids().any(|id| id == entry.id) {
            continue;
        }
        let Some(cached) = lookup.get(&(entry.title.clone(), entry.kind)) else {
            continue;
        };

        if profile.adopt_origin_fields && !profile.is_recent_version(&cached.basic_info.version) {
            entry.ds = cached.ds.clone();
            entry.charts = cached.charts.clone();
            entry.basic_info.bpm = cached.basic_info.bpm;
        }
        if !cached.id.is_empty() {
            entry.id = cached.id.clone();
        }
    }
}
