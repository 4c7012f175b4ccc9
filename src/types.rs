use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A scalar metadata value as returned by the search API. The backend sends
/// arbitrary JSON values per key; anything non-scalar is rejected at the
/// boundary instead of being stringified blindly.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Number(f64),
    String(String),
    Null,
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Bool(b) => write!(f, "{}", b),
            MetaValue::Number(n) => write!(f, "{}", n),
            MetaValue::String(s) => write!(f, "{}", s),
            MetaValue::Null => write!(f, "null"),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub content: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetaValue>,
}

impl SearchResult {
    /// Relevance as a percentage in [0, 100]. The backend does not guarantee
    /// scores in [0, 1], so the raw value is clamped first; a non-finite
    /// score counts as 0.
    pub fn score_percentage(&self) -> u8 {
        let raw = if self.score.is_finite() { self.score } else { 0.0 };
        (raw.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    /// The raw score formatted with 3 decimals, only when it is finite.
    pub fn score_label(&self) -> Option<String> {
        self.score.is_finite().then(|| format!("{:.3}", self.score))
    }
}

/// Response of the `/search` endpoint. `results` is in ranking order and the
/// order is authoritative. `total` may be absent, in which case the caller
/// falls back to `results.len()`.
#[derive(Deserialize, Clone, Debug)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub query: String,
    #[serde(default)]
    pub total: Option<usize>,
}
