//! Configuration types for Clavier.
//!
//! This module provides configuration structures that select a keyboard
//! layout and control how distances are measured on it. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and distance settings.
//! - [`LayoutConfig`] - Which [`NamedLayout`] to load and its geometry.
//! - [`DistanceConfig`] - The [`Metric`] and [`EditCosts`] used by distance queries.
//!
//! # Example
//!
//! ```
//! # use clavier::config::AppConfig;
//! # use clavier_core::metric::Metric;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.distance().metric(), Metric::L2);
//! ```

use serde::Deserialize;

use clavier_core::{metric::Metric, staggering::Staggering};

use crate::{distance::EditCosts, layout::LayoutBuilder, named::NamedLayout};

/// Top-level configuration combining layout and distance settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Distance configuration section.
    #[serde(default)]
    distance: DistanceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and distance configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Layout selection and geometry.
    /// * `distance` - Metric and edit costs.
    pub fn new(layout: LayoutConfig, distance: DistanceConfig) -> Self {
        Self { layout, distance }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the distance configuration.
    pub fn distance(&self) -> &DistanceConfig {
        &self.distance
    }

    /// Returns a mutable reference to the layout configuration.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns a mutable reference to the distance configuration.
    pub fn distance_mut(&mut self) -> &mut DistanceConfig {
        &mut self.distance
    }
}

/// Layout selection and geometry.
///
/// Unset fields fall back to QWERTY without staggering and a unit pitch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// The built-in layout to load.
    name: NamedLayout,

    /// Horizontal shift between consecutive rows.
    staggering: Staggering,

    /// Distance between adjacent keys of a row.
    horizontal_pitch: f64,

    /// Distance between adjacent rows.
    vertical_pitch: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name: NamedLayout::default(),
            staggering: Staggering::default(),
            horizontal_pitch: 1.0,
            vertical_pitch: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the selected [`NamedLayout`].
    pub fn name(&self) -> NamedLayout {
        self.name
    }

    /// Selects a different [`NamedLayout`].
    pub fn set_name(&mut self, name: NamedLayout) {
        self.name = name;
    }

    /// Returns a [`LayoutBuilder`] carrying the configured geometry.
    pub fn builder(&self) -> LayoutBuilder {
        LayoutBuilder::new()
            .with_staggering(self.staggering.clone())
            .with_horizontal_pitch(self.horizontal_pitch)
            .with_vertical_pitch(self.vertical_pitch)
    }
}

/// Metric and edit costs used by distance queries.
///
/// The costs are read from the `deletion_cost` and `insertion_cost` keys
/// next to `metric`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Distance between key positions.
    metric: Metric,

    /// Costs of dropping and adding characters in word distances.
    #[serde(flatten)]
    costs: EditCosts,
}

impl DistanceConfig {
    /// Returns the configured [`Metric`].
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Overrides the configured [`Metric`].
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Overrides the deletion cost.
    pub fn set_deletion_cost(&mut self, cost: f64) {
        self.costs = self.costs.with_deletion(cost);
    }

    /// Overrides the insertion cost.
    pub fn set_insertion_cost(&mut self, cost: f64) {
        self.costs = self.costs.with_insertion(cost);
    }

    /// Returns the configured [`EditCosts`].
    pub fn costs(&self) -> EditCosts {
        self.costs
    }
}
