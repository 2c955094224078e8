//! Pipeline run context: one conversion from raw records to a
//! reconciled catalog, plus the international finishing stages.

use tracing::{debug, info};

use crate::catalog::ChartEntry;
use crate::normalize::normalize_song;
use crate::profile::Profile;
use crate::reconcile::{reconcile, CommunityEntry};
use crate::record::RawSong;
use crate::synth;
use crate::version::VersionMap;

/// Run-scoped sequential chart-id source.
///
/// Owned by the pipeline and reset at the start of every run; ids are
/// handed out in catalog traversal order, starting at 1.
#[derive(Debug, Default)]
pub struct ChartIdCounter {
    next: u32,
}

impl ChartIdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Consume the next `count` ids.
    pub fn next_block(&mut self, count: usize) -> Vec<u32> {
        let start = self.next;
        self.next += count as u32;
        (start..self.next).collect()
    }
}

/// Secondary inputs of one pipeline run. All of them tolerate absence:
/// an empty catalog, empty community set or empty version map simply
/// leaves the corresponding pass inert.
#[derive(Debug, Default)]
pub struct PipelineSources {
    /// Previously-persisted catalog (the "origin" cache).
    pub origin: Vec<ChartEntry>,
    /// Community difficulty dataset.
    pub community: Vec<CommunityEntry>,
    /// Release-date to version-label boundaries.
    pub versions: VersionMap,
}

/// One-shot batch conversion for a single service profile.
pub struct Pipeline {
    profile: Profile,
    counter: ChartIdCounter,
}

impl Pipeline {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            counter: ChartIdCounter::new(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Normalize every record and reconcile the resulting catalog
    /// against the secondary sources.
    pub fn convert(&mut self, records: &[RawSong], sources: &PipelineSources) -> Vec<ChartEntry> {
        self.counter = ChartIdCounter::new();

        let mut catalog = Vec::new();
        for song in records {
            catalog.extend(normalize_song(
                song,
                &self.profile,
                &sources.versions,
                &mut self.counter,
            ));
        }
        info!(
            "Normalized {} records into {} chart entries ({})",
            records.len(),
            catalog.len(),
            self.profile.name
        );

        reconcile(&mut catalog, &sources.origin, &sources.community, &self.profile);
        catalog
    }

    /// International finishing stages: drop entries without a release
    /// date, then backfill version labels (and non-special-event
    /// ratings) from the cached catalog.
    pub fn finalize_international(
        &self,
        catalog: Vec<ChartEntry>,
        origin: &[ChartEntry],
    ) -> Vec<ChartEntry> {
        let before = catalog.len();
        let mut catalog = synth::drop_delisted(catalog);
        debug!(
            "Dropped {} unreleased entries, {} remain",
            before - catalog.len(),
            catalog.len()
        );
        synth::backfill_versions(&mut catalog, origin);
        catalog
    }

    /// Fold the finished international catalog onto the cached master
    /// catalog, producing the international-service master document.
    pub fn synthesize_master(
        &self,
        intl: &[ChartEntry],
        origin: Vec<ChartEntry>,
    ) -> Vec<ChartEntry> {
        synth::synthesize_master(intl, origin, self.profile.current_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_one() {
        let mut counter = ChartIdCounter::new();
        assert_eq!(counter.next_block(3), vec![1, 2, 3]);
        assert_eq!(counter.next_block(2), vec![4, 5]);
    }

    #[test]
    fn test_counter_empty_block() {
        let mut counter = ChartIdCounter::new();
        assert!(counter.next_block(0).is_empty());
        assert_eq!(counter.next_block(1), vec![1]);
    }
}
