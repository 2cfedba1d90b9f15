use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{LEISURE_MAX, LEISURE_MIN};

/// Preferred surroundings, used for contextual weight adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Urban,
    Natural,
    Mixed,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urban" => Ok(Self::Urban),
            "natural" => Ok(Self::Natural),
            "mixed" => Ok(Self::Mixed),
            other => Err(format!("unknown environment: '{other}'")),
        }
    }
}

/// Leisure preference on a 1–5 scale. Out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeisureScale(u8);

impl LeisureScale {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(LEISURE_MIN as i64, LEISURE_MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whole weight points this scale adds: floor(scale / 2).
    pub fn bonus(self) -> u8 {
        self.0 / 2
    }
}
