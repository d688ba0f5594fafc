//! Geometric primitives for key positions.
//!
//! This module provides the coordinate type used throughout Clavier to place
//! keys in the keyboard plane and measure the distance between them.
//!
//! # Coordinate System
//!
//! Key positions follow the reading order of a keyboard:
//!
//! ```text
//!   (0,0) ────────► +column
//!     │
//!     │
//!     │
//!     ▼
//!   +row
//! ```
//!
//! - **Origin**: Top-left key at `(0, 0)`
//! - **Row axis**: Increases downward, one unit per vertical pitch
//! - **Column axis**: Increases rightward, one unit per horizontal pitch,
//!   shifted by the row's staggering

use serde::{Deserialize, Serialize};

/// A key position in the keyboard plane.
///
/// Positions use `f64` coordinates. Staggering and pitch make them
/// continuous even though keys are laid out on an integer grid.
///
/// # Examples
///
/// ```
/// # use clavier_core::geometry::Position;
/// let q = Position::new(1.0, 0.0);
/// let s = Position::new(2.0, 1.0);
///
/// assert_eq!(q.l1_distance(s), 2.0);
/// assert!((q.l2_distance(s) - 2f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    row: f64,
    column: f64,
}

impl Position {
    /// Creates a new position with the specified coordinates
    pub fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// Returns the row (vertical) coordinate
    pub fn row(self) -> f64 {
        self.row
    }

    /// Returns the column (horizontal) coordinate
    pub fn column(self) -> f64 {
        self.column
    }

    /// Subtracts another position from this one, returning a new position
    pub fn sub_position(self, other: Position) -> Self {
        Self {
            row: self.row - other.row,
            column: self.column - other.column,
        }
    }

    /// Calculates the Euclidean length of the position seen as a vector
    pub fn hypot(self) -> f64 {
        self.row.hypot(self.column)
    }

    /// Euclidean (straight line) distance to another position.
    pub fn l2_distance(self, other: Position) -> f64 {
        self.sub_position(other).hypot()
    }

    /// Manhattan distance to another position: the sum of the absolute
    /// differences along each axis.
    pub fn l1_distance(self, other: Position) -> f64 {
        let delta = self.sub_position(other);
        delta.row.abs() + delta.column.abs()
    }
}
