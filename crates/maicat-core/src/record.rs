use std::collections::BTreeMap;

use serde::de::{Deserialize, Deserializer};
use serde_json::Value;

/// One raw song record from the upstream feed.
///
/// The feed is a flat string-keyed object whose key set varies per song:
/// standard (`lev_*`), deluxe (`dx_lev_*`) and special-event (`lev_utage*`)
/// field families can coexist on one record. Downstream code cares about
/// three distinct states per key - absent, present-but-empty, and a value -
/// so the accessors expose presence explicitly instead of defaulting at
/// the map boundary.
#[derive(Debug, Clone, Default)]
pub struct RawSong {
    fields: BTreeMap<String, String>,
}

impl RawSong {
    /// Build a record from literal key/value pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Key present in the record, even with an empty value.
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Value if the key is present (may be empty).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value if the key is present and non-empty.
    pub fn nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Value or the empty string.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Unsigned integer value; absent, empty or malformed fields are 0.
    pub fn int_or_zero(&self, key: &str) -> u32 {
        self.text(key).parse().unwrap_or(0)
    }
}

impl<'de> Deserialize<'de> for RawSong {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The feed nominally holds strings, but scalar values of other
        // kinds show up occasionally; coerce them instead of failing the
        // whole document. Nested values carry nothing this pipeline reads.
        let raw: BTreeMap<String, Value> = BTreeMap::deserialize(deserializer)?;
        let mut fields = BTreeMap::new();
        for (key, value) in raw {
            match value {
                Value::String(s) => {
                    fields.insert(key, s);
                }
                Value::Number(n) => {
                    fields.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    fields.insert(key, b.to_string());
                }
                Value::Null | Value::Array(_) | Value::Object(_) => {}
            }
        }
        Ok(Self { fields })
    }
}
