//! International catalog finishing and master-catalog synthesis.

use std::collections::HashMap;

use crate::catalog::{ChartEntry, ChartKind};

/// Drop entries without a release date - not yet released on, or
/// withdrawn from, the service.
pub fn drop_delisted(catalog: Vec<ChartEntry>) -> Vec<ChartEntry> {
    catalog
        .into_iter()
        .filter(|entry| !entry.basic_info.release_date.is_empty())
        .collect()
}

/// Overwrite each entry's version label with the cached catalog's
/// where `(title, kind)` matches, and for non-special-event entries the
/// rating sequence as well. The cached catalog is the authority for
/// version attribution of the converted output.
pub fn backfill_versions(catalog: &mut [ChartEntry], origin: &[ChartEntry]) {
    if origin.is_empty() {
        return;
    }

    let lookup: HashMap<(String, ChartKind), &ChartEntry> = origin
        .iter()
        .map(|entry| ((entry.title.clone(), entry.kind), entry))
        .collect();

    for entry in catalog.iter_mut() {
        let Some(cached) = lookup.get(&(entry.title.clone(), entry.kind)) else {
            continue;
        };
        entry.basic_info.version = cached.basic_info.version.clone();
        if entry.kind != ChartKind::Utage {
            entry.ds = cached.ds.clone();
        }
    }
}

/// Fold the finished international catalog onto the cached master
/// catalog, matched by `(title, kind)`.
///
/// Special-event matches take the international level/rating/sub-chart/
/// comment content; every match takes the international id, chart ids
/// and release date. Afterwards `is_new` is recomputed for all entries
/// from the current-version constant and entries without a release date
/// are dropped.
pub fn synthesize_master(
    intl: &[ChartEntry],
    mut origin: Vec<ChartEntry>,
    current_version: &str,
) -> Vec<ChartEntry> {
    let lookup: HashMap<(String, ChartKind), &ChartEntry> = intl
        .iter()
        .map(|entry| ((entry.title.clone(), entry.kind), entry))
        .collect();

    for cached in origin.iter_mut() {
        if let Some(entry) = lookup.get(&(cached.title.clone(), cached.kind)) {
            if cached.kind == ChartKind::Utage {
                cached.level = entry.level.clone();
                cached.ds = entry.ds.clone();
                cached.charts = entry.charts.clone();
                cached.comment = entry.comment.clone();
            }
            cached.id = entry.id.clone();
            cached.cids = entry.cids.clone();
            cached.basic_info.release_date = entry.basic_info.release_date.clone();
        }

        cached.basic_info.is_new = cached.basic_info.version == current_version;
    }

    drop_delisted(origin)
}
