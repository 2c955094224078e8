//! Tests for the pipeline run context
//!
//! Covers chart-id assignment across a run, the international finishing
//! stages and master-catalog synthesis.

use maicat_core::{
    BasicInfo, ChartEntry, ChartKind, Pipeline, PipelineSources, Profile, RawSong, SubChart,
};

fn entry(title: &str, kind: ChartKind, id: &str, release_date: &str) -> ChartEntry {
    ChartEntry {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        comment: String::new(),
        ds: vec![4.0, 6.0],
        level: vec!["4".to_string(), "6".to_string()],
        cids: Vec::new(),
        charts: vec![SubChart::empty(4), SubChart::empty(4)],
        basic_info: BasicInfo {
            title: title.to_string(),
            artist: "Artist".to_string(),
            genre: "maimai".to_string(),
            bpm: 140,
            release_date: release_date.to_string(),
            version: "maimai でらっくす".to_string(),
            is_new: false,
        },
    }
}

fn records() -> Vec<RawSong> {
    vec![
        RawSong::from_pairs([
            ("title", "First"),
            ("lev_bas", "3"),
            ("lev_adv", "5"),
            ("date_intl_added", "20200101"),
            ("date_added", "20200101"),
        ]),
        RawSong::from_pairs([
            ("title", "Second"),
            ("lev_bas", "4"),
            ("dx_lev_bas", "5"),
            ("date_intl_added", "20210101"),
            ("date_intl_updated", "20210601"),
            ("date_added", "20210101"),
        ]),
    ]
}

mod chart_ids {
    use super::*;

    #[test]
    fn test_cids_monotonic_in_traversal_order() {
        let mut pipeline = Pipeline::new(Profile::international());
        let catalog = pipeline.convert(&records(), &PipelineSources::default());

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].cids, vec![1, 2]);
        assert_eq!(catalog[1].cids, vec![3]);
        assert_eq!(catalog[2].cids, vec![4]);
    }

    #[test]
    fn test_counter_resets_every_run() {
        let mut pipeline = Pipeline::new(Profile::international());
        let first = pipeline.convert(&records(), &PipelineSources::default());
        let second = pipeline.convert(&records(), &PipelineSources::default());

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.cids, b.cids);
        }
    }

    #[test]
    fn test_domestic_assigns_no_cids() {
        let mut pipeline = Pipeline::new(Profile::domestic());
        let catalog = pipeline.convert(&records(), &PipelineSources::default());
        assert!(catalog.iter().all(|entry| entry.cids.is_empty()));
    }
}

mod international_finish {
    use super::*;

    #[test]
    fn test_entries_without_release_date_are_dropped() {
        let pipeline = Pipeline::new(Profile::international());
        let catalog = vec![
            entry("Kept", ChartKind::Standard, "1", "20200101"),
            entry("Gone", ChartKind::Standard, "2", ""),
        ];

        let finished = pipeline.finalize_international(catalog, &[]);
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].title, "Kept");
    }

    #[test]
    fn test_versions_and_ratings_backfilled_from_cache() {
        let pipeline = Pipeline::new(Profile::international());
        let catalog = vec![
            entry("Song", ChartKind::Standard, "1", "20200101"),
            entry("Party", ChartKind::Utage, "2", "20200101"),
        ];

        let mut cached_sd = entry("Song", ChartKind::Standard, "1", "20190101");
        cached_sd.ds = vec![4.3, 6.4];
        cached_sd.basic_info.version = "maimai でらっくす Splash".to_string();
        let mut cached_ut = entry("Party", ChartKind::Utage, "2", "20190101");
        cached_ut.ds = vec![13.0];
        cached_ut.basic_info.version = "maimai でらっくす Splash".to_string();

        let finished = pipeline.finalize_international(catalog, &[cached_sd, cached_ut]);

        assert_eq!(finished[0].basic_info.version, "maimai でらっくす Splash");
        assert_eq!(finished[0].ds, vec![4.3, 6.4]);
        // Special-event ratings are not backfilled.
        assert_eq!(finished[1].basic_info.version, "maimai でらっくす Splash");
        assert_eq!(finished[1].ds, vec![4.0, 6.0]);
    }
}

mod master_synthesis {
    use super::*;

    #[test]
    fn test_fold_overwrites_identity_fields() {
        let pipeline = Pipeline::new(Profile::international());

        let mut intl = entry("Song", ChartKind::Standard, "42", "20230101");
        intl.cids = vec![7, 8];
        intl.ds = vec![9.9, 9.9];
        let origin = vec![entry("Song", ChartKind::Standard, "old", "20200101")];

        let master = pipeline.synthesize_master(&[intl], origin);

        assert_eq!(master.len(), 1);
        assert_eq!(master[0].id, "42");
        assert_eq!(master[0].cids, vec![7, 8]);
        assert_eq!(master[0].basic_info.release_date, "20230101");
        // Non-special-event content stays the cached version's.
        assert_eq!(master[0].ds, vec![4.0, 6.0]);
    }

    #[test]
    fn test_fold_takes_special_event_content() {
        let pipeline = Pipeline::new(Profile::international());

        let mut intl = entry("Party", ChartKind::Utage, "9000", "20230101");
        intl.ds = vec![13.0, 13.0];
        intl.level = vec!["13".to_string(), "13".to_string()];
        intl.charts = vec![SubChart::empty(5), SubChart::empty(5)];
        intl.comment = "協力プレイ".to_string();
        let origin = vec![entry("Party", ChartKind::Utage, "old", "20200101")];

        let master = pipeline.synthesize_master(&[intl], origin);

        assert_eq!(master[0].ds, vec![13.0, 13.0]);
        assert_eq!(master[0].level.len(), 2);
        assert_eq!(master[0].charts.len(), 2);
        assert_eq!(master[0].comment, "協力プレイ");
        assert_eq!(master[0].id, "9000");
    }

    #[test]
    fn test_unmatched_cached_entries_survive_with_their_dates() {
        let pipeline = Pipeline::new(Profile::international());

        let origin = vec![
            entry("Stays", ChartKind::Standard, "1", "20200101"),
            entry("Withdrawn", ChartKind::Standard, "2", ""),
        ];

        let master = pipeline.synthesize_master(&[], origin);
        assert_eq!(master.len(), 1);
        assert_eq!(master[0].title, "Stays");
    }

    #[test]
    fn test_is_new_recomputed_from_version_label() {
        let pipeline = Pipeline::new(Profile::international());

        let mut current = entry("Fresh", ChartKind::Standard, "1", "20250101");
        current.basic_info.version = "maimai でらっくす PRiSM".to_string();
        let mut stale = entry("Old", ChartKind::Standard, "2", "20200101");
        stale.basic_info.is_new = true;

        let master = pipeline.synthesize_master(&[], vec![current, stale]);

        assert!(master[0].basic_info.is_new);
        assert!(!master[1].basic_info.is_new);
    }
}
