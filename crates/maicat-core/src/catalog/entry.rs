use serde::{Deserialize, Serialize};

use crate::catalog::ChartKind;

/// Per-tier note breakdown and chart designer.
///
/// `notes` holds 4 values for standard charts (tap/hold/slide/break) and
/// 5 for deluxe and special-event charts (touch inserted before break).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubChart {
    pub notes: Vec<u32>,
    pub charter: String,
}

impl SubChart {
    /// Zero-filled sub-chart used to pad tiers absent from the feed.
    pub fn empty(lanes: usize) -> Self {
        Self {
            notes: vec![0; lanes],
            charter: "-".to_string(),
        }
    }
}

/// Song-level metadata shared by all tiers of one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub title: String,
    pub artist: String,
    pub genre: String,
    #[serde(default)]
    pub bpm: u32,
    #[serde(default)]
    pub release_date: String,
    /// Version label the release date falls into ("from" on disk).
    #[serde(rename = "from")]
    pub version: String,
    #[serde(default)]
    pub is_new: bool,
}

/// One catalog entry: a single chart family of a single song.
///
/// `ds`, `level` and `charts` are index-aligned (same tier, same position).
/// `id` starts as the image-derived token and is rewritten during
/// reconciliation; `cids` is populated only by the international pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub ds: Vec<f64>,
    #[serde(default)]
    pub level: Vec<String>,
    #[serde(default)]
    pub cids: Vec<u32>,
    #[serde(default)]
    pub charts: Vec<SubChart>,
    pub basic_info: BasicInfo,
}
