use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DIMENSION_COUNT;

/// The five scored livability axes, declared in canonical order.
///
/// The canonical order is the tie-break for every dimension ordering in the
/// engine, so the derived `Ord` must keep following declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Economy,
    Education,
    Health,
    Transport,
    Housing,
}

impl Dimension {
    /// Total number of dimensions.
    pub const COUNT: usize = DIMENSION_COUNT;

    /// All variants in canonical order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Self::Economy,
        Self::Education,
        Self::Health,
        Self::Transport,
        Self::Housing,
    ];

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        match self {
            Self::Economy => 0,
            Self::Education => 1,
            Self::Health => 2,
            Self::Transport => 3,
            Self::Housing => 4,
        }
    }

    /// English name, also the default source column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Education => "education",
            Self::Health => "health",
            Self::Transport => "transport",
            Self::Housing => "housing",
        }
    }

    /// Column name used by the municipal source dataset.
    pub fn source_alias(self) -> &'static str {
        match self {
            Self::Economy => "economia",
            Self::Education => "educacion",
            Self::Health => "sanidad",
            Self::Transport => "transporte",
            Self::Housing => "vivienda",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized dimension name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension: '{0}'")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == needle || d.source_alias() == needle)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// One finite value per dimension.
///
/// Used for raw entity values, normalized values, weights, and shares alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionValues {
    pub economy: f64,
    pub education: f64,
    pub health: f64,
    pub transport: f64,
    pub housing: f64,
}

impl DimensionValues {
    /// Same value on every dimension.
    pub fn uniform(value: f64) -> Self {
        Self {
            economy: value,
            education: value,
            health: value,
            transport: value,
            housing: value,
        }
    }

    /// Build from a function of each dimension.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        let mut values = Self::default();
        for dim in Dimension::ALL {
            values.set(dim, f(dim));
        }
        values
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Economy => self.economy,
            Dimension::Education => self.education,
            Dimension::Health => self.health,
            Dimension::Transport => self.transport,
            Dimension::Housing => self.housing,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Economy => self.economy = value,
            Dimension::Education => self.education = value,
            Dimension::Health => self.health = value,
            Dimension::Transport => self.transport = value,
            Dimension::Housing => self.housing = value,
        }
    }

    /// Add `delta` to one dimension.
    pub fn add(&mut self, dimension: Dimension, delta: f64) {
        self.set(dimension, self.get(dimension) + delta);
    }

    /// (dimension, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn all_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}
