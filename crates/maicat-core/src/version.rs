use std::collections::HashMap;

/// Release-date to version-label resolver.
///
/// Built from a mapping of 8-digit boundary-date strings to version
/// labels. A boundary date is the first release date of the *next*
/// version, so resolution picks the label of the greatest boundary
/// strictly below the date, with both ends clamped.
#[derive(Debug, Clone, Default)]
pub struct VersionMap {
    /// Ascending (boundary date, label) pairs.
    boundaries: Vec<(u32, String)>,
}

impl VersionMap {
    /// Build from a raw string mapping. Keys that do not parse as
    /// integers are skipped.
    pub fn new(mapping: HashMap<String, String>) -> Self {
        let mut boundaries: Vec<(u32, String)> = mapping
            .into_iter()
            .filter_map(|(k, v)| k.trim().parse::<u32>().ok().map(|date| (date, v)))
            .collect();
        boundaries.sort_by_key(|(date, _)| *date);
        Self { boundaries }
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Resolve a raw date string to a version label.
    ///
    /// Malformed dates and an empty mapping pass the input through
    /// unchanged. Dates before the first boundary take the first label;
    /// dates on or after the last boundary take the last label; anything
    /// else takes the label of the greatest boundary strictly below the
    /// date (so a date equal to an interior boundary resolves one back).
    pub fn resolve(&self, raw_date: &str) -> String {
        let date: u32 = match raw_date.parse() {
            Ok(d) => d,
            Err(_) => return raw_date.to_string(),
        };

        let Some((last_date, last_label)) = self.boundaries.last() else {
            return raw_date.to_string();
        };
        if date >= *last_date {
            return last_label.clone();
        }

        let below = self.boundaries.partition_point(|(b, _)| *b < date);
        let pick = below.saturating_sub(1);
        self.boundaries[pick].1.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&str, &str)]) -> VersionMap {
        VersionMap::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_resolve_between_boundaries() {
        let map = map_of(&[
            ("20120711", "maimai"),
            ("20121211", "maimai PLUS"),
            ("20130711", "maimai GreeN"),
        ]);
        assert_eq!(map.resolve("20121001"), "maimai");
        assert_eq!(map.resolve("20130101"), "maimai PLUS");
    }

    #[test]
    fn test_boundary_date_maps_one_back() {
        let map = map_of(&[
            ("20120711", "maimai"),
            ("20121211", "maimai PLUS"),
            ("20130711", "maimai GreeN"),
        ]);
        // A date equal to an interior boundary belongs to the era that
        // boundary closed, not the one it opened.
        assert_eq!(map.resolve("20121211"), "maimai");
    }

    #[test]
    fn test_resolve_clamps_both_ends() {
        let map = map_of(&[("20120711", "maimai"), ("20121211", "maimai PLUS")]);
        assert_eq!(map.resolve("20100101"), "maimai");
        assert_eq!(map.resolve("20120711"), "maimai");
        assert_eq!(map.resolve("20121211"), "maimai PLUS");
        assert_eq!(map.resolve("20250101"), "maimai PLUS");
    }

    #[test]
    fn test_malformed_date_passes_through() {
        let map = map_of(&[("20120711", "maimai")]);
        assert_eq!(map.resolve("not-a-date"), "not-a-date");
        assert_eq!(map.resolve(""), "");
    }

    #[test]
    fn test_empty_mapping_passes_through() {
        let map = VersionMap::default();
        assert_eq!(map.resolve("20240912"), "20240912");
    }

    #[test]
    fn test_non_numeric_keys_skipped() {
        let map = map_of(&[("20120711", "maimai"), ("first", "bogus")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.resolve("20200101"), "maimai");
    }
}
