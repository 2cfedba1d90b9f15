use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::constants::ANY_CLUSTER_SENTINELS;

/// Canonical cluster label.
///
/// Source data may encode the same cluster as `1`, `1.0` or `"1"`. All of
/// them canonicalize to the string `"1"`, so equality is plain string
/// equality and no comparison site ever coerces types. Deserialization goes
/// through the same canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct ClusterLabel(String);

impl ClusterLabel {
    /// Canonicalize a textual label. Blank text carries no label; text that
    /// reads as a non-finite number ("nan", "inf", "1e400") stays textual.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::from_f64(n),
            _ => Some(Self(trimmed.to_string())),
        }
    }

    /// Integral values render without a fractional part.
    pub fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        if n.fract() == 0.0 && n.abs() < 1e15 {
            Some(Self::from_i64(n as i64))
        } else {
            Some(Self(format!("{n}")))
        }
    }

    pub fn from_i64(n: i64) -> Self {
        Self(n.to_string())
    }

    /// Canonicalize a JSON cell. Arrays and objects carry no label.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Array(_) | Value::Object(_) => None,
            Value::Bool(b) => Some(Self(b.to_string())),
            Value::String(s) => Self::parse(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::from_i64(i)),
                None => n.as_f64().and_then(Self::from_f64),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl<'de> Deserialize<'de> for ClusterLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("not a cluster label: {value}")))
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialOrd for ClusterLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric labels sort by value and before textual ones.
impl Ord for ClusterLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a
                .partial_cmp(&b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

/// Requested cluster: a specific label, or no filtering at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClusterSelector {
    #[default]
    Any,
    Label(ClusterLabel),
}

impl ClusterSelector {
    /// Parse a form value. Sentinels and blank input select every cluster.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if ANY_CLUSTER_SENTINELS
            .iter()
            .any(|s| s.eq_ignore_ascii_case(trimmed))
        {
            return Self::Any;
        }
        ClusterLabel::parse(trimmed).map_or(Self::Any, Self::Label)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<ClusterLabel> for ClusterSelector {
    fn from(label: ClusterLabel) -> Self {
        Self::Label(label)
    }
}

impl fmt::Display for ClusterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_CLUSTER_SENTINELS[0]),
            Self::Label(label) => label.fmt(f),
        }
    }
}
