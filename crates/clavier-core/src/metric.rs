//! Distance metrics between key positions.
//!
//! A [`Metric`] selects how the distance between two [`Position`]s is
//! measured. Metrics are usually given by name (`"l1"` or `"l2"`), so the
//! type implements [`FromStr`] and deserializes from the same names.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::LayoutError, geometry::Position};

/// Distance function between two key positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    /// Manhattan distance: sum of absolute differences per axis.
    L1,
    /// Euclidean distance (default).
    #[default]
    L2,
}

impl Metric {
    /// Measures the distance between two positions under this metric.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier_core::{geometry::Position, metric::Metric};
    /// let a = Position::new(0.0, 0.0);
    /// let b = Position::new(1.0, 1.0);
    ///
    /// assert_eq!(Metric::L1.distance(a, b), 2.0);
    /// assert!((Metric::L2.distance(a, b) - 1.414).abs() < 1e-3);
    /// ```
    pub fn distance(self, a: Position, b: Position) -> f64 {
        match self {
            Self::L1 => a.l1_distance(b),
            Self::L2 => a.l2_distance(b),
        }
    }

    /// Returns the canonical name of the metric
    pub fn as_str(self) -> &'static str {
        match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
        }
    }
}

impl FromStr for Metric {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            _ => Err(LayoutError::UnknownMetric(s.to_string())),
        }
    }
}

impl TryFrom<String> for Metric {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.as_str().to_string()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
