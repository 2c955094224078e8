//! Chart normalization: raw feed records to catalog entries.
//!
//! One record yields up to three entries (standard, deluxe,
//! special-event), each built by walking the family's tier sequence and
//! collecting ratings, labels and note-count sub-charts in parallel.

mod rating;

pub use rating::parse_level_value;

use crate::catalog::{BasicInfo, ChartEntry, ChartKind, SubChart};
use crate::pipeline::ChartIdCounter;
use crate::profile::{DateRule, Profile, DEFAULT_GENRE, INTL_DATE_ROLE_PIVOT};
use crate::record::RawSong;
use crate::version::VersionMap;

/// Difficulty tiers of a standard or deluxe chart, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Basic,
    Advanced,
    Expert,
    Master,
    ReMaster,
}

impl Tier {
    /// Field-name fragment between the family prefix and the field kind.
    pub fn key_fragment(&self) -> &'static str {
        match self {
            Self::Basic => "bas",
            Self::Advanced => "adv",
            Self::Expert => "exp",
            Self::Master => "mas",
            Self::ReMaster => "remas",
        }
    }
}

const BASE_TIERS: [Tier; 4] = [Tier::Basic, Tier::Advanced, Tier::Expert, Tier::Master];

/// Presence of this field marks the dual (left/right) special-event form.
const UTAGE_RIGHT_MARKER: &str = "lev_utage_right_notes";

/// Normalize one raw record into catalog entries, one per chart family
/// present, in standard, deluxe, special-event order.
pub fn normalize_song(
    song: &RawSong,
    profile: &Profile,
    versions: &VersionMap,
    counter: &mut ChartIdCounter,
) -> Vec<ChartEntry> {
    let mut entries = Vec::new();
    if song.has("lev_bas") {
        entries.push(tiered_entry(song, ChartKind::Standard, profile, versions, counter));
    }
    if song.has("dx_lev_bas") {
        entries.push(tiered_entry(song, ChartKind::Deluxe, profile, versions, counter));
    }
    if song.has("lev_utage") {
        entries.push(utage_entry(song, profile, versions, counter));
    }
    entries
}

/// Image token minus its extension; the provisional entry id until
/// reconciliation assigns the real one.
fn image_id(song: &RawSong) -> String {
    let image = song.text("image_url");
    image.strip_suffix(".png").unwrap_or(image).to_string()
}

fn level_prefix(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Standard => "lev",
        ChartKind::Deluxe => "dx_lev",
        ChartKind::Utage => "lev_utage",
    }
}

/// Build a standard or deluxe entry by walking the tier sequence.
fn tiered_entry(
    song: &RawSong,
    kind: ChartKind,
    profile: &Profile,
    versions: &VersionMap,
    counter: &mut ChartIdCounter,
) -> ChartEntry {
    let prefix = level_prefix(kind);

    let mut tiers = BASE_TIERS.to_vec();
    if song.nonempty(&format!("{prefix}_remas")).is_some() {
        tiers.push(Tier::ReMaster);
    }

    let mut ds = Vec::new();
    let mut level = Vec::new();
    let mut charts = Vec::new();

    for tier in &tiers {
        let tier_key = format!("{prefix}_{}", tier.key_fragment());

        // Internal level field wins over the plain label when it carries
        // a value; the label pushed is always the plain one.
        let label = song
            .nonempty(&format!("{tier_key}_i"))
            .or_else(|| song.nonempty(&tier_key));
        if let Some(raw) = label {
            if let Some(value) = parse_level_value(raw, profile.plus_step) {
                ds.push(value);
                level.push(song.text(&tier_key).to_string());
            }
        }

        // Note counts are collected independently of the rating.
        let note_keys = kind.note_keys();
        if note_keys
            .iter()
            .any(|nk| song.has(&format!("{tier_key}_{nk}")))
        {
            charts.push(sub_chart(song, &tier_key, note_keys));
        } else if profile.pad_missing_tiers {
            charts.push(SubChart::empty(note_keys.len()));
        }
    }

    let cids = if profile.assign_chart_ids {
        counter.next_block(ds.len())
    } else {
        Vec::new()
    };

    ChartEntry {
        id: image_id(song),
        title: song.text("title").to_string(),
        kind,
        comment: String::new(),
        ds,
        level,
        cids,
        charts,
        basic_info: basic_info(song, kind, profile, versions),
    }
}

/// Build a special-event entry: one tier, single or left/right form.
fn utage_entry(
    song: &RawSong,
    profile: &Profile,
    versions: &VersionMap,
    counter: &mut ChartIdCounter,
) -> ChartEntry {
    let plain = song.text("lev_utage").to_string();
    let label = if profile.utage_internal_level {
        song.nonempty("lev_utage_i")
            .or_else(|| song.nonempty("lev_utage"))
    } else {
        song.nonempty("lev_utage")
    };
    let rating = label.and_then(|raw| parse_level_value(raw, profile.plus_step));

    let (ds, level, charts) = if song.has(UTAGE_RIGHT_MARKER) {
        // Dual form: two sub-charts sharing one rating.
        (
            rating.map(|r| vec![r, r]).unwrap_or_default(),
            vec![plain.clone(), plain],
            vec![
                utage_sub_chart(song, "lev_utage_left"),
                utage_sub_chart(song, "lev_utage_right"),
            ],
        )
    } else {
        (
            rating.map(|r| vec![r]).unwrap_or_default(),
            vec![plain],
            vec![utage_sub_chart(song, "lev_utage")],
        )
    };

    let cids = if profile.assign_chart_ids {
        counter.next_block(ds.len())
    } else {
        Vec::new()
    };

    ChartEntry {
        id: image_id(song),
        title: song.text("title").to_string(),
        kind: ChartKind::Utage,
        comment: song.text("comment").to_string(),
        ds,
        level,
        cids,
        charts,
        basic_info: basic_info(song, ChartKind::Utage, profile, versions),
    }
}

fn sub_chart(song: &RawSong, tier_key: &str, note_keys: &[&str]) -> SubChart {
    let notes = note_keys
        .iter()
        .map(|nk| song.int_or_zero(&format!("{tier_key}_{nk}")))
        .collect();
    let charter = song
        .get(&format!("{tier_key}_designer"))
        .unwrap_or("-")
        .to_string();
    SubChart { notes, charter }
}

/// Special-event sub-charts never carry a designer credit.
fn utage_sub_chart(song: &RawSong, prefix: &str) -> SubChart {
    let notes = ChartKind::Utage
        .note_keys()
        .iter()
        .map(|nk| song.int_or_zero(&format!("{prefix}_{nk}")))
        .collect();
    SubChart {
        notes,
        charter: "-".to_string(),
    }
}

fn basic_info(
    song: &RawSong,
    kind: ChartKind,
    profile: &Profile,
    versions: &VersionMap,
) -> BasicInfo {
    let release_date = release_date(song, kind, profile);
    let version = versions.resolve(&release_date);
    let is_new = version == profile.current_version;

    BasicInfo {
        title: song.text("title").to_string(),
        artist: song.text("artist").to_string(),
        genre: song.get("catcode").unwrap_or(DEFAULT_GENRE).to_string(),
        bpm: song.int_or_zero("bpm"),
        release_date,
        version,
        is_new,
    }
}

/// Pick the raw release date for one (record, kind) pair.
///
/// Records carrying both standard and deluxe families stamp one side with
/// the addition date and the other with the update date; which side gets
/// which differs per locale (and, internationally, per the role pivot).
fn release_date(song: &RawSong, kind: ChartKind, profile: &Profile) -> String {
    for (title, fixed) in profile.date_overrides {
        if song.text("title") == *title {
            return (*fixed).to_string();
        }
    }

    match profile.date_rule {
        DateRule::Domestic => {
            if song.has("lev_bas") && song.has("dx_lev_bas") {
                match kind {
                    ChartKind::Standard => song.text("date_added"),
                    ChartKind::Deluxe | ChartKind::Utage => song.text("date_updated"),
                }
            } else {
                song.text("date_added")
            }
            .to_string()
        }
        DateRule::International => intl_release_date(song, kind),
    }
}

fn intl_release_date(song: &RawSong, kind: ChartKind) -> String {
    if kind == ChartKind::Utage {
        return song
            .nonempty("date_intl_updated")
            .or_else(|| song.nonempty("date_intl_added"))
            .unwrap_or("")
            .to_string();
    }

    if song.has("lev_bas") && song.has("dx_lev_bas") {
        let swapped = song.int_or_zero("date_intl_added") >= INTL_DATE_ROLE_PIVOT;
        let added_side = if swapped {
            ChartKind::Deluxe
        } else {
            ChartKind::Standard
        };
        if kind == added_side {
            song.text("date_intl_added").to_string()
        } else {
            song.text("date_intl_updated").to_string()
        }
    } else {
        song.text("date_intl_added").to_string()
    }
}
