use std::collections::HashMap;

use crate::catalog::{ChartEntry, ChartKind};

/// Numbering convention linking a deluxe chart to its standard pairing.
pub const DELUXE_ID_OFFSET: i64 = 10000;

/// Pass 4: where a title carries both a standard and a deluxe entry,
/// renumber the deluxe id as standard id + offset.
///
/// A non-numeric standard id leaves the deluxe id untouched; that is a
/// tolerated inconsistency, not an error. The last entry per
/// (title, kind) wins the grouping.
pub fn derive_cross_ids(catalog: &mut [ChartEntry]) {
    let mut groups: HashMap<String, (Option<usize>, Option<usize>)> = HashMap::new();
    for (idx, entry) in catalog.iter().enumerate() {
        let slot = groups.entry(entry.title.clone()).or_default();
        match entry.kind {
            ChartKind::Standard => slot.0 = Some(idx),
            ChartKind::Deluxe => slot.1 = Some(idx),
            ChartKind::Utage => {}
        }
    }

    for (standard, deluxe) in groups.into_values() {
        let (Some(standard), Some(deluxe)) = (standard, deluxe) else {
            continue;
        };
        let Ok(standard_id) = catalog[standard].id.parse::<i64>() else {
            continue;
        };
        catalog[deluxe].id = (standard_id + DELUXE_ID_OFFSET).to_string();
    }
}
