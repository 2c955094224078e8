use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Chart family of a catalog entry.
///
/// A single raw song record can carry up to one chart of each kind;
/// every kind present becomes its own catalog entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
pub enum ChartKind {
    /// Standard 4-lane-layout chart (`lev_*` fields).
    #[serde(rename = "SD")]
    #[strum(serialize = "SD")]
    Standard,
    /// Deluxe chart with touch notes (`dx_lev_*` fields).
    #[serde(rename = "DX")]
    #[strum(serialize = "DX")]
    Deluxe,
    /// Special-event chart (`lev_utage*` fields), single rating, free-form comment.
    #[serde(rename = "UTAGE")]
    #[strum(serialize = "UTAGE")]
    Utage,
}

impl ChartKind {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Note-count field suffixes for this kind, in sub-chart order.
    /// The standard layout has no touch lane.
    pub fn note_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["notes_tap", "notes_hold", "notes_slide", "notes_break"],
            Self::Deluxe | Self::Utage => &[
                "notes_tap",
                "notes_hold",
                "notes_slide",
                "notes_touch",
                "notes_break",
            ],
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_string_forms() {
        assert_eq!(ChartKind::Standard.short_name(), "SD");
        assert_eq!(ChartKind::Deluxe.short_name(), "DX");
        assert_eq!(ChartKind::Utage.short_name(), "UTAGE");
        assert_eq!(ChartKind::from_str("DX").unwrap(), ChartKind::Deluxe);
        assert!(ChartKind::from_str("EX").is_err());
    }

    #[test]
    fn test_note_lane_counts() {
        assert_eq!(ChartKind::Standard.note_keys().len(), 4);
        assert_eq!(ChartKind::Deluxe.note_keys().len(), 5);
        assert_eq!(ChartKind::Utage.note_keys().len(), 5);
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let json = serde_json::to_string(&ChartKind::Utage).unwrap();
        assert_eq!(json, "\"UTAGE\"");
        let kind: ChartKind = serde_json::from_str("\"SD\"").unwrap();
        assert_eq!(kind, ChartKind::Standard);
    }
}
