//! Horizontal row staggering.
//!
//! Physical keyboards shift each row of keys to the right of the row above.
//! [`Staggering`] describes that shift either as one amount applied between
//! every pair of consecutive rows, or as an explicit amount per row boundary.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Horizontal offset applied between consecutive rows.
///
/// Deserializes from a bare number (uniform) or a list of numbers
/// (per row boundary), so both `staggering = 0.5` and
/// `staggering = [0.25, 0.5, 0.75]` are valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Staggering {
    /// The same offset between every pair of consecutive rows.
    Uniform(f64),
    /// The offset between rows `i` and `i + 1` at index `i`.
    PerRow(Vec<f64>),
}

impl Default for Staggering {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f64> for Staggering {
    fn from(amount: f64) -> Self {
        Self::Uniform(amount)
    }
}

impl From<Vec<f64>> for Staggering {
    fn from(amounts: Vec<f64>) -> Self {
        Self::PerRow(amounts)
    }
}

impl Staggering {
    /// Checks that the staggering fits a layout whose last row is `max_row`.
    ///
    /// A uniform staggering fits any layout. A per-row staggering must hold
    /// exactly one amount per row boundary, that is `max_row` amounts.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpec`] on a per-row length mismatch.
    pub fn check_rows(&self, max_row: usize) -> Result<(), LayoutError> {
        match self {
            Self::Uniform(_) => Ok(()),
            Self::PerRow(amounts) if amounts.len() == max_row => Ok(()),
            Self::PerRow(amounts) => {
                debug!(
                    amounts = amounts.len(),
                    max_row;
                    "Staggering does not match the layout rows"
                );
                Err(LayoutError::InvalidSpec(format!(
                    "staggering lists {} amounts but the layout has {} row boundaries",
                    amounts.len(),
                    max_row
                )))
            }
        }
    }

    /// Horizontal offset of row `row`.
    ///
    /// Row 0 is never shifted. A uniform staggering `s` shifts row `i` by
    /// `i * s`; a per-row staggering shifts row `i` by the sum of its first
    /// `i` amounts. Rows past the end of a per-row list take the full sum,
    /// call [`Staggering::check_rows`] first to reject them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier_core::staggering::Staggering;
    /// let per_row = Staggering::PerRow(vec![0.25, 0.5]);
    /// assert_eq!(per_row.offset(0), 0.0);
    /// assert_eq!(per_row.offset(2), 0.75);
    ///
    /// assert_eq!(Staggering::Uniform(0.5).offset(2), 1.0);
    /// ```
    pub fn offset(&self, row: usize) -> f64 {
        match self {
            Self::Uniform(amount) => row as f64 * amount,
            Self::PerRow(amounts) => amounts.iter().take(row).sum(),
        }
    }
}
