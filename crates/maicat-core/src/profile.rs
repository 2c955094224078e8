//! Per-service pipeline configuration.
//!
//! The domestic and international catalogs share one pipeline; everything
//! that differs between them lives here as data. The override tables are
//! editorial facts about the source catalogs, not tunables.

/// Version label that marks an entry as belonging to the current release.
pub const CURRENT_VERSION: &str = "maimai でらっくす PRiSM";

/// Genre placeholder for records without a category code.
pub const DEFAULT_GENRE: &str = "其他游戏";

/// International records added on or after this date swap which of the
/// paired standard/deluxe charts is stamped with the addition date.
pub const INTL_DATE_ROLE_PIVOT: u32 = 20191115;

/// How much of a matched community rating sequence is adopted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingScope {
    /// Overwrite the first two tiers only (basic, advanced).
    FirstTwo,
    /// Replace the whole sequence.
    Full,
}

/// Which date fields feed `basic_info.release_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// `date_added` / `date_updated`.
    Domestic,
    /// `date_intl_added` / `date_intl_updated`, with the role pivot and
    /// per-title overrides.
    International,
}

/// Hard id (and optionally title) override for one colliding source record.
#[derive(Debug, Clone, Copy)]
pub struct SpecialCase {
    /// Image-derived id the normalizer assigns to the record.
    pub image_id: &'static str,
    pub id: &'static str,
    pub title: Option<&'static str>,
}

/// Colliding "Link" charts in the domestic catalog; ids only.
const DOMESTIC_SPECIAL_CASES: &[SpecialCase] = &[
    SpecialCase {
        image_id: "1e44516a8a3b5a51",
        id: "131",
        title: None,
    },
    SpecialCase {
        image_id: "e90f79d9dcff84df",
        id: "383",
        title: None,
    },
];

/// The international feed also needs the titles disambiguated.
const INTL_SPECIAL_CASES: &[SpecialCase] = &[
    SpecialCase {
        image_id: "1e44516a8a3b5a51",
        id: "131",
        title: Some("Link"),
    },
    SpecialCase {
        image_id: "e90f79d9dcff84df",
        id: "383",
        title: Some("Link(COF)"),
    },
];

/// Titles whose international release dates predate the feed's records.
const INTL_DATE_OVERRIDES: &[(&str, &str)] = &[
    ("夜明けまであと３秒", "20170214"),
    ("みんなの", "20181002"),
];

/// Version labels whose entries keep freshly-parsed difficulty data
/// during cached-catalog adoption (everything older trusts the cache).
const INTL_RECENT_VERSIONS: &[&str] =
    &["maimai でらっくす PRiSM", "maimai でらっくす PRiSM PLUS"];

const DOMESTIC_SONG_FEED: &str = "https://otoge-db.net/maimai/data/music-ex.json";
const INTL_SONG_FEED: &str = "https://otoge-db.net/maimai/data/music-ex-intl.json";
const COMMUNITY_FEED: &str = "https://www.diving-fish.com/api/maimaidxprober/music_data";

/// All locale-specific pipeline behavior, as data.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: &'static str,
    /// Increment applied by the level parser for a `+` modifier.
    pub plus_step: f64,
    pub current_version: &'static str,
    /// Freshness window for cached-catalog field adoption.
    pub recent_versions: &'static [&'static str],
    /// Append a zero-filled sub-chart when a tier has no note fields,
    /// keeping `charts` at the configured tier count.
    pub pad_missing_tiers: bool,
    /// Assign run-scoped sequential chart ids (`cids`).
    pub assign_chart_ids: bool,
    /// Read the special-event rating from `lev_utage_i` before falling
    /// back to the plain label.
    pub utage_internal_level: bool,
    /// Adopt cached `ds`/`charts`/BPM for entries older than
    /// `recent_versions` during reconciliation pass 2.
    pub adopt_origin_fields: bool,
    pub community_scope: RatingScope,
    pub date_rule: DateRule,
    /// (title, release date) pairs that override the selected date.
    pub date_overrides: &'static [(&'static str, &'static str)],
    pub special_cases: &'static [SpecialCase],
    pub song_feed_url: &'static str,
    pub community_feed_url: &'static str,
}

impl Profile {
    /// Japanese-service catalog.
    pub fn domestic() -> Self {
        Self {
            name: "domestic",
            plus_step: 0.5,
            current_version: CURRENT_VERSION,
            recent_versions: &[],
            pad_missing_tiers: false,
            assign_chart_ids: false,
            utage_internal_level: true,
            adopt_origin_fields: false,
            community_scope: RatingScope::FirstTwo,
            date_rule: DateRule::Domestic,
            date_overrides: &[],
            special_cases: DOMESTIC_SPECIAL_CASES,
            song_feed_url: DOMESTIC_SONG_FEED,
            community_feed_url: COMMUNITY_FEED,
        }
    }

    /// International-service catalog.
    pub fn international() -> Self {
        Self {
            name: "international",
            plus_step: 0.6,
            current_version: CURRENT_VERSION,
            recent_versions: INTL_RECENT_VERSIONS,
            pad_missing_tiers: true,
            assign_chart_ids: true,
            utage_internal_level: false,
            adopt_origin_fields: true,
            community_scope: RatingScope::Full,
            date_rule: DateRule::International,
            date_overrides: INTL_DATE_OVERRIDES,
            special_cases: INTL_SPECIAL_CASES,
            song_feed_url: INTL_SONG_FEED,
            community_feed_url: COMMUNITY_FEED,
        }
    }

    /// Ids the special-case table can assign; pass 2 must not overwrite
    /// entries already carrying one of these.
    pub fn special_case_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.special_cases.iter().map(|case| case.id)
    }

    /// Whether a version label falls inside the freshness window.
    pub fn is_recent_version(&self, label: &str) -> bool {
        self.recent_versions.contains(&label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_differ_where_expected() {
        let jp = Profile::domestic();
        let intl = Profile::international();

        assert_eq!(jp.plus_step, 0.5);
        assert_eq!(intl.plus_step, 0.6);
        assert!(!jp.assign_chart_ids);
        assert!(intl.assign_chart_ids);
        assert!(!jp.pad_missing_tiers);
        assert!(intl.pad_missing_tiers);
        assert_eq!(jp.community_scope, RatingScope::FirstTwo);
        assert_eq!(intl.community_scope, RatingScope::Full);
    }

    #[test]
    fn test_recency_window() {
        let intl = Profile::international();
        assert!(intl.is_recent_version("maimai でらっくす PRiSM"));
        assert!(intl.is_recent_version("maimai でらっくす PRiSM PLUS"));
        assert!(!intl.is_recent_version("maimai でらっくす BUDDiES"));

        let jp = Profile::domestic();
        assert!(!jp.is_recent_version("maimai でらっくす PRiSM"));
    }

    #[test]
    fn test_special_case_ids() {
        let jp = Profile::domestic();
        let ids: Vec<_> = jp.special_case_ids().collect();
        assert_eq!(ids, vec!["131", "383"]);
    }
}
