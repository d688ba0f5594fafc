//! Clavier - distances on keyboard layouts.
//!
//! A keyboard is modeled as characters placed on a plane. On top of that
//! model Clavier measures how far apart two keys are, a Levenshtein distance
//! between words where substituting a character costs the distance between
//! the two keys, and the travel needed to type a word.
//!
//! The building blocks are [`Layout`] (with [`LayoutBuilder`] and the
//! built-in [`NamedLayout`]s) and the distance methods on it. [`Keyboard`]
//! bundles a layout with the metric and edit costs of an
//! [`AppConfig`](config::AppConfig).

pub mod config;

mod distance;
mod error;
mod layout;
mod named;
mod render;

pub use clavier_core::{LayoutError, geometry, metric, staggering};

pub use distance::{EditCosts, word_distance_with};
pub use error::ClavierError;
pub use layout::{Layout, LayoutBuilder};
pub use named::NamedLayout;
pub use render::render_svg;

use log::{debug, info};

use clavier_core::metric::Metric;

use config::{AppConfig, DistanceConfig};

/// A layout together with the metric and edit costs used to query it.
///
/// # Examples
///
/// ```rust
/// use clavier::{Keyboard, config::AppConfig};
///
/// // QWERTY, Euclidean distance, unit edit costs
/// let keyboard = Keyboard::from_config(&AppConfig::default())
///     .expect("Failed to load layout");
///
/// let distance = keyboard.word_distance("hello", "jello")
///     .expect("Failed to measure distance");
/// assert_eq!(distance, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Keyboard {
    layout: Layout,
    distance: DistanceConfig,
}

impl Keyboard {
    /// Create a keyboard from an already built layout.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to query
    /// * `distance` - Metric and edit costs of every query
    pub fn new(layout: Layout, distance: DistanceConfig) -> Self {
        Self { layout, distance }
    }

    /// Load the configured [`NamedLayout`] with the configured geometry.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if the configured staggering does not
    /// fit the layout.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClavierError> {
        let name = config.layout().name();
        info!(layout = name.name(); "Loading layout");

        let layout = name.load(&config.layout().builder())?;
        debug!(keys = layout.len(); "Layout loaded");

        Ok(Self::new(layout, config.distance().clone()))
    }

    /// Build a custom layout from grid text with the configured geometry.
    ///
    /// The configured layout name is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if the grid has no keys or the
    /// configured staggering does not fit it.
    pub fn from_grid(grid: &str, config: &AppConfig) -> Result<Self, ClavierError> {
        info!("Building layout from grid");

        let layout = config.layout().builder().build_from_grid(grid)?;
        debug!(keys = layout.len(); "Layout built from grid");

        Ok(Self::new(layout, config.distance().clone()))
    }

    /// Returns the underlying layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the metric used by queries.
    pub fn metric(&self) -> Metric {
        self.distance.metric()
    }

    /// Distance between the keys of two characters.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if a character has no key.
    pub fn char_distance(&self, c1: char, c2: char) -> Result<f64, ClavierError> {
        Ok(self.layout.char_distance(c1, c2, self.metric())?)
    }

    /// Weighted edit distance between two words.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if a substituted character has no key.
    pub fn word_distance(&self, w1: &str, w2: &str) -> Result<f64, ClavierError> {
        Ok(self
            .layout
            .word_distance(w1, w2, self.distance.costs(), self.metric())?)
    }

    /// Travel distance when typing a word.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if a character has no key.
    pub fn typing_distance(&self, word: &str) -> Result<f64, ClavierError> {
        Ok(self.layout.typing_distance(word, self.metric())?)
    }

    /// The `k` keys closest to `c` (all of them when `k` is `None`).
    ///
    /// Results are cached per character and metric.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if `c` has no key.
    pub fn nearest_neighbors(
        &self,
        c: char,
        k: Option<usize>,
    ) -> Result<Vec<(char, f64)>, ClavierError> {
        Ok(self.layout.nearest_neighbors(c, k, self.metric(), true)?)
    }

    /// Layout shape as `(rows, columns)`.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if the layout is empty.
    pub fn shape(&self) -> Result<(usize, usize), ClavierError> {
        Ok(self.layout.shape()?)
    }

    /// Render the layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `ClavierError::Layout` if the layout is empty.
    pub fn render_svg(&self, font_size: f64) -> Result<String, ClavierError> {
        Ok(render::render_svg(&self.layout, font_size)?)
    }
}
