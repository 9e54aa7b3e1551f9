//! Win-rate normalization.
//!
//! The analytics API reports win rates either as JSON numbers or as numeric
//! strings. Both are normalized here into a single `f64` percentage; values
//! that carry no numeric prefix at all are kept as "unparsable" and rank below
//! every real win rate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A win-rate percentage (0-100), or `None` when the source value was unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WinRate(Option<f64>);

impl WinRate {
    /// Wrap a numeric win rate. Non-finite values count as unparsable.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self(None)
        }
    }

    pub fn unparsable() -> Self {
        Self(None)
    }

    /// Best-effort parse: the longest leading numeric prefix wins, so `"52.3%"`
    /// reads as `52.3` and `"n/a"` is unparsable.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(v) = text.parse::<f64>() {
            return Self::new(v);
        }

        let mut end = 0;
        let mut seen_dot = false;
        for (i, c) in text.char_indices() {
            let ok = match c {
                '0'..='9' => true,
                '.' if !seen_dot => {
                    seen_dot = true;
                    true
                }
                '+' | '-' if i == 0 => true,
                _ => false,
            };
            if !ok {
                break;
            }
            end = i + c.len_utf8();
        }

        text[..end]
            .trim_end_matches('.')
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_parsable(&self) -> bool {
        self.0.is_some()
    }

    /// Win rate truncated to a whole percent; tier and band thresholds compare
    /// against this.
    pub fn whole_percent(&self) -> Option<i64> {
        self.0.map(|v| v.trunc() as i64)
    }

    /// Descending rank order: higher win rates first, unparsable last.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<f64> for WinRate {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for WinRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("?"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWinRate {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for WinRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawWinRate>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawWinRate::Number(v)) => WinRate::new(v),
            Some(RawWinRate::Text(s)) => WinRate::parse(&s),
            Some(RawWinRate::Other(_)) | None => WinRate::unparsable(),
        })
    }
}

impl Serialize for WinRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.serialize_none(),
        }
    }
}
