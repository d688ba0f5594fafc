//! Keyboard layout model.
//!
//! A [`Layout`] maps characters to key [`Position`]s in the keyboard plane.
//! Layouts are built from integer grid coordinates, either given explicitly
//! ([`Layout::from_coordinates`]) or read from a space separated text grid
//! ([`Layout::from_grid`]). Staggering and pitch turn those grid coordinates
//! into continuous positions.
//!
//! # Example
//!
//! ```
//! use clavier::{Layout, LayoutBuilder};
//!
//! let layout = LayoutBuilder::new()
//!     .with_staggering(0.5)
//!     .build_from_grid("
//!         q w e
//!         a s d
//!     ")
//!     .unwrap();
//!
//! assert_eq!(layout.len(), 6);
//! assert_eq!(layout.position('a').unwrap().column(), 0.5);
//! ```

mod grid;
mod neighbors;

use indexmap::IndexMap;
use log::{debug, trace};

use clavier_core::{
    LayoutError, geometry::Position, metric::Metric, staggering::Staggering,
};

use neighbors::NeighborCache;

/// Lowercases a character when it maps to a single lowercase code point.
pub(crate) fn normalize(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// A keyboard layout: characters placed at positions in the plane.
///
/// Characters are case-insensitive: they are stored lowercased and every
/// lookup lowercases its argument. Iteration follows the order in which keys
/// were first given to the constructor.
///
/// A layout is immutable after construction. It carries a lazily populated
/// cache for [`nearest_neighbors`](Layout::nearest_neighbors), which is safe to
/// share between threads.
#[derive(Debug, Default)]
pub struct Layout {
    keys: IndexMap<char, Position>,
    neighbors_cache: NeighborCache,
}

impl Clone for Layout {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            neighbors_cache: NeighborCache::default(),
        }
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Layout {
    /// Builds a layout from explicit grid coordinates.
    ///
    /// Each character is placed at row `i * vertical_pitch` and column
    /// `j * horizontal_pitch + offset(i)`, where `offset(i)` is the
    /// cumulative staggering of row `i` (see [`Staggering::offset`]).
    /// Characters are lowercased; when a character appears twice the later
    /// coordinates win.
    ///
    /// # Arguments
    ///
    /// * `coordinates` - `(character, (row, column))` pairs, origin at the top-left key
    /// * `staggering` - Horizontal shift between consecutive rows
    /// * `horizontal_pitch` - Distance between the centers of two adjacent keys in a row
    /// * `vertical_pitch` - Distance between the centers of two adjacent rows
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpec`] if `coordinates` is empty or a
    /// per-row staggering does not have one amount per row boundary.
    pub fn from_coordinates<I>(
        coordinates: I,
        staggering: &Staggering,
        horizontal_pitch: f64,
        vertical_pitch: f64,
    ) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (char, (usize, usize))>,
    {
        let coordinates: Vec<_> = coordinates.into_iter().collect();

        let Some(max_row) = coordinates.iter().map(|(_, (row, _))| *row).max() else {
            return Err(LayoutError::InvalidSpec(
                "a layout needs at least one key".to_string(),
            ));
        };
        staggering.check_rows(max_row)?;

        let mut keys = IndexMap::with_capacity(coordinates.len());
        for (c, (row, column)) in coordinates {
            let position = Position::new(
                row as f64 * vertical_pitch,
                column as f64 * horizontal_pitch + staggering.offset(row),
            );
            if let Some(previous) = keys.insert(normalize(c), position) {
                trace!(key:? = c, previous:?; "Key redefined, keeping the last position");
            }
        }

        debug!(keys = keys.len(), max_row; "Layout built");

        Ok(Self {
            keys,
            neighbors_cache: NeighborCache::default(),
        })
    }

    /// Builds a layout from a space separated text grid.
    ///
    /// Keys sit at every other character of a line; rows are the non-blank
    /// lines once common indentation is removed. Blank cells keep their
    /// column so that ragged rows stay aligned.
    ///
    /// # Errors
    ///
    /// Same as [`Layout::from_coordinates`]; a grid without keys is an
    /// [`LayoutError::InvalidSpec`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier::Layout;
    /// # use clavier_core::staggering::Staggering;
    /// let dialpad = Layout::from_grid("
    ///     1 2 3
    ///     4 5 6
    ///     7 8 9
    /// ", &Staggering::default(), 1.0, 1.0).unwrap();
    ///
    /// assert_eq!(dialpad.shape().unwrap(), (3, 3));
    /// ```
    pub fn from_grid(
        grid: &str,
        staggering: &Staggering,
        horizontal_pitch: f64,
        vertical_pitch: f64,
    ) -> Result<Self, LayoutError> {
        Self::from_coordinates(
            grid::parse_grid(grid),
            staggering,
            horizontal_pitch,
            vertical_pitch,
        )
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the layout has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if the character has a key.
    pub fn contains(&self, c: char) -> bool {
        self.keys.contains_key(&normalize(c))
    }

    /// Returns the position of a character's key, if any.
    pub fn position(&self, c: char) -> Option<Position> {
        self.keys.get(&normalize(c)).copied()
    }

    /// Returns the position of a character's key.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCharacter`] if the character has no key.
    pub fn try_position(&self, c: char) -> Result<Position, LayoutError> {
        self.position(c).ok_or(LayoutError::UnknownCharacter(c))
    }

    /// Iterates over `(character, position)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Position)> + '_ {
        self.keys.iter().map(|(c, pos)| (*c, *pos))
    }

    /// Iterates over the characters in layout order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.keys().copied()
    }

    /// Returns the number of rows spanned by the keys.
    ///
    /// This is one more than the largest row coordinate, truncated to an
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyLayout`] if the layout has no keys.
    pub fn n_rows(&self) -> Result<usize, LayoutError> {
        self.extent(Position::row)
    }

    /// Returns the number of columns spanned by the keys.
    ///
    /// This is one more than the largest column coordinate, truncated to an
    /// integer, so staggering can widen a layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyLayout`] if the layout has no keys.
    pub fn n_columns(&self) -> Result<usize, LayoutError> {
        self.extent(Position::column)
    }

    /// Returns `(n_rows, n_columns)`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyLayout`] if the layout has no keys.
    pub fn shape(&self) -> Result<(usize, usize), LayoutError> {
        Ok((self.n_rows()?, self.n_columns()?))
    }

    fn extent(&self, axis: fn(Position) -> f64) -> Result<usize, LayoutError> {
        self.keys
            .values()
            .map(|pos| axis(*pos))
            .reduce(f64::max)
            .map(|max| (max + 1.0) as usize)
            .ok_or(LayoutError::EmptyLayout)
    }

    /// Lists the other keys ordered by distance to `c`, closest first.
    ///
    /// Keys at the same distance keep their layout order. When `k` is given
    /// only the `k` closest keys are returned.
    ///
    /// With `use_cache`, the full ordered list is kept per character and
    /// metric, and later cached calls for the same pair reuse it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCharacter`] if `c` has no key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier::{Layout, NamedLayout, LayoutBuilder};
    /// # use clavier_core::metric::Metric;
    /// let dialpad = NamedLayout::Dialpad.load(&LayoutBuilder::new()).unwrap();
    ///
    /// let neighbors = dialpad.nearest_neighbors('5', Some(2), Metric::L2, false).unwrap();
    /// assert_eq!(neighbors, vec![('2', 1.0), ('4', 1.0)]);
    /// ```
    pub fn nearest_neighbors(
        &self,
        c: char,
        k: Option<usize>,
        metric: Metric,
        use_cache: bool,
    ) -> Result<Vec<(char, f64)>, LayoutError> {
        let origin = self.try_position(c)?;
        let key = normalize(c);

        let compute = || {
            let mut neighbors: Vec<(char, f64)> = self
                .iter()
                .filter(|(neighbor, _)| *neighbor != key)
                .map(|(neighbor, pos)| (neighbor, metric.distance(origin, pos)))
                .collect();
            neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));
            neighbors
        };

        let mut neighbors = if use_cache {
            self.neighbors_cache.get_or_insert_with(key, metric, compute)
        } else {
            compute()
        };

        if let Some(k) = k {
            neighbors.truncate(k);
        }

        Ok(neighbors)
    }
}

/// Builder holding the staggering and pitch used to turn grid coordinates
/// into key positions.
///
/// Defaults to no staggering and a unit pitch on both axes.
///
/// # Examples
///
/// ```
/// use clavier::LayoutBuilder;
///
/// let layout = LayoutBuilder::new()
///     .with_staggering(vec![0.25, 0.5])
///     .with_horizontal_pitch(19.05)
///     .with_vertical_pitch(19.05)
///     .build_from_grid("a b\nc d\ne f")
///     .unwrap();
///
/// assert_eq!(layout.position('e').unwrap().column(), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBuilder {
    staggering: Staggering,
    horizontal_pitch: f64,
    vertical_pitch: f64,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self {
            staggering: Staggering::default(),
            horizontal_pitch: 1.0,
            vertical_pitch: 1.0,
        }
    }
}

impl LayoutBuilder {
    /// Creates a builder with the default geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staggering between rows
    pub fn with_staggering(mut self, staggering: impl Into<Staggering>) -> Self {
        self.staggering = staggering.into();
        self
    }

    /// Sets the horizontal distance between adjacent keys
    pub fn with_horizontal_pitch(mut self, pitch: f64) -> Self {
        self.horizontal_pitch = pitch;
        self
    }

    /// Sets the vertical distance between adjacent rows
    pub fn with_vertical_pitch(mut self, pitch: f64) -> Self {
        self.vertical_pitch = pitch;
        self
    }

    /// Builds a layout from a text grid. See [`Layout::from_grid`].
    pub fn build_from_grid(&self, grid: &str) -> Result<Layout, LayoutError> {
        Layout::from_grid(
            grid,
            &self.staggering,
            self.horizontal_pitch,
            self.vertical_pitch,
        )
    }

    /// Builds a layout from explicit coordinates. See [`Layout::from_coordinates`].
    pub fn build_from_coordinates<I>(&self, coordinates: I) -> Result<Layout, LayoutError>
    where
        I: IntoIterator<Item = (char, (usize, usize))>,
    {
        Layout::from_coordinates(
            coordinates,
            &self.staggering,
            self.horizontal_pitch,
            self.vertical_pitch,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialpad() -> Layout {
        LayoutBuilder::new()
            .build_from_grid(
                "
                1 2 3
                4 5 6
                7 8 9
                ",
            )
            .unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize('Q'), 'q');
        assert_eq!(normalize('q'), 'q');
        assert_eq!(normalize('1'), '1');
        assert_eq!(normalize('Ä'), 'ä');
        // 'İ' lowercases to two code points and is kept as is
        assert_eq!(normalize('İ'), 'İ');
    }

    #[test]
    fn test_from_coordinates_positions() {
        let layout = Layout::from_coordinates(
            [('a', (0, 0)), ('b', (0, 1)), ('c', (1, 0)), ('d', (2, 3))],
            &Staggering::Uniform(0.5),
            2.0,
            3.0,
        )
        .unwrap();

        assert_eq!(layout.position('a'), Some(Position::new(0.0, 0.0)));
        assert_eq!(layout.position('b'), Some(Position::new(0.0, 2.0)));
        assert_eq!(layout.position('c'), Some(Position::new(3.0, 0.5)));
        assert_eq!(layout.position('d'), Some(Position::new(6.0, 7.0)));
    }

    #[test]
    fn test_from_coordinates_per_row_staggering() {
        let layout = Layout::from_coordinates(
            [('a', (0, 0)), ('b', (1, 0)), ('c', (2, 0))],
            &Staggering::PerRow(vec![0.25, 0.5]),
            1.0,
            1.0,
        )
        .unwrap();

        assert_eq!(layout.position('a').unwrap().column(), 0.0);
        assert_eq!(layout.position('b').unwrap().column(), 0.25);
        assert_eq!(layout.position('c').unwrap().column(), 0.75);
    }

    #[test]
    fn test_from_coordinates_invalid_staggering() {
        let result = Layout::from_coordinates(
            [('a', (0, 0)), ('b', (1, 0)), ('c', (2, 0))],
            &Staggering::PerRow(vec![0.25]),
            1.0,
            1.0,
        );
        assert!(matches!(result, Err(LayoutError::InvalidSpec(_))));
    }

    #[test]
    fn test_from_coordinates_huge_row_index() {
        let row = 1usize << 60;
        let layout = Layout::from_coordinates(
            [('a', (0, 0)), ('b', (row, 1))],
            &Staggering::Uniform(0.5),
            1.0,
            1.0,
        )
        .unwrap();

        let b = layout.position('b').unwrap();
        assert_eq!(b.row(), row as f64);
        assert_eq!(b.column(), 1.0 + row as f64 * 0.5);
    }

    #[test]
    fn test_from_coordinates_empty() {
        let result = Layout::from_coordinates(
            Vec::<(char, (usize, usize))>::new(),
            &Staggering::default(),
            1.0,
            1.0,
        );
        assert!(matches!(result, Err(LayoutError::InvalidSpec(_))));

        let result = Layout::from_grid("\n   \n", &Staggering::default(), 1.0, 1.0);
        assert!(matches!(result, Err(LayoutError::InvalidSpec(_))));
    }

    #[test]
    fn test_characters_are_lowercased() {
        let layout = LayoutBuilder::new().build_from_grid("Q W\nA S").unwrap();

        assert_eq!(layout.chars().collect::<String>(), "qwas");
        assert!(layout.contains('q'));
        assert!(layout.contains('Q'));
        assert_eq!(layout.position('A'), layout.position('a'));
    }

    #[test]
    fn test_duplicate_character_last_write_wins() {
        let layout = LayoutBuilder::new()
            .build_from_coordinates([('a', (0, 0)), ('b', (0, 1)), ('A', (1, 2))])
            .unwrap();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.position('a'), Some(Position::new(1.0, 2.0)));
        // The key keeps its first slot in iteration order
        assert_eq!(layout.chars().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn test_unknown_character() {
        let layout = dialpad();
        assert!(!layout.contains('x'));
        assert_eq!(layout.position('x'), None);
        assert_eq!(
            layout.try_position('x'),
            Err(LayoutError::UnknownCharacter('x'))
        );
    }

    #[test]
    fn test_iter_in_layout_order() {
        let layout = dialpad();
        let chars: String = layout.chars().collect();
        assert_eq!(chars, "123456789");

        let (c, pos) = layout.iter().nth(4).unwrap();
        assert_eq!(c, '5');
        assert_eq!(pos, Position::new(1.0, 1.0));
    }

    #[test]
    fn test_shape() {
        assert_eq!(dialpad().shape(), Ok((3, 3)));

        let ragged = LayoutBuilder::new()
            .build_from_grid("a b c d e\nf g\nh")
            .unwrap();
        assert_eq!(ragged.shape(), Ok((3, 5)));
    }

    #[test]
    fn test_shape_with_staggering_and_pitch() {
        let layout = LayoutBuilder::new()
            .with_staggering(0.5)
            .with_vertical_pitch(2.0)
            .build_from_grid("a b\nc d\ne f")
            .unwrap();

        // Last row sits at 4.0; its last key at column 2.0
        assert_eq!(layout.shape(), Ok((5, 3)));
    }

    #[test]
    fn test_shape_empty_layout() {
        let layout = Layout::default();
        assert!(layout.is_empty());
        assert_eq!(layout.shape(), Err(LayoutError::EmptyLayout));
        assert_eq!(layout.n_rows(), Err(LayoutError::EmptyLayout));
        assert_eq!(layout.n_columns(), Err(LayoutError::EmptyLayout));
    }

    #[test]
    fn test_nearest_neighbors() {
        let layout = dialpad();

        let all = layout.nearest_neighbors('1', None, Metric::L2, false).unwrap();
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|(c, _)| *c != '1'));
        assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));

        let closest = layout.nearest_neighbors('1', Some(2), Metric::L2, false).unwrap();
        assert_eq!(closest, vec![('2', 1.0), ('4', 1.0)]);
    }

    #[test]
    fn test_nearest_neighbors_ties_keep_layout_order() {
        let layout = dialpad();

        let neighbors = layout.nearest_neighbors('5', Some(4), Metric::L1, false).unwrap();
        assert_eq!(
            neighbors,
            vec![('2', 1.0), ('4', 1.0), ('6', 1.0), ('8', 1.0)]
        );
    }

    #[test]
    fn test_nearest_neighbors_k_larger_than_layout() {
        let layout = dialpad();
        let neighbors = layout.nearest_neighbors('9', Some(100), Metric::L2, false).unwrap();
        assert_eq!(neighbors.len(), 8);
        assert_eq!(neighbors.last().map(|(c, _)| *c), Some('1'));
    }

    #[test]
    fn test_nearest_neighbors_unknown_character() {
        let layout = dialpad();
        assert_eq!(
            layout.nearest_neighbors('x', None, Metric::L2, false),
            Err(LayoutError::UnknownCharacter('x'))
        );
        assert_eq!(
            layout.nearest_neighbors('x', None, Metric::L2, true),
            Err(LayoutError::UnknownCharacter('x'))
        );
    }

    #[test]
    fn test_nearest_neighbors_cache_is_per_character() {
        let layout = dialpad();

        let one = layout.nearest_neighbors('1', Some(2), Metric::L2, true).unwrap();
        let nine = layout.nearest_neighbors('9', Some(2), Metric::L2, true).unwrap();

        assert_eq!(one, vec![('2', 1.0), ('4', 1.0)]);
        assert_eq!(nine, vec![('6', 1.0), ('8', 1.0)]);
        assert_eq!(layout.neighbors_cache.len(), 2);
    }

    #[test]
    fn test_nearest_neighbors_cache_applies_k_per_call() {
        let layout = dialpad();

        let two = layout.nearest_neighbors('5', Some(2), Metric::L2, true).unwrap();
        let all = layout.nearest_neighbors('5', None, Metric::L2, true).unwrap();
        let uncached = layout.nearest_neighbors('5', None, Metric::L2, false).unwrap();

        assert_eq!(two.len(), 2);
        assert_eq!(all, uncached);
        assert_eq!(layout.neighbors_cache.len(), 1);
    }

    #[test]
    fn test_clone_starts_with_empty_cache() {
        let layout = dialpad();
        layout.nearest_neighbors('5', None, Metric::L2, true).unwrap();

        let copy = layout.clone();
        assert_eq!(copy, layout);
        assert_eq!(copy.neighbors_cache.len(), 0);
    }

    #[test]
    fn test_builder_defaults() {
        let builder = LayoutBuilder::default();
        assert_eq!(builder, LayoutBuilder::new());
        assert_eq!(builder, LayoutBuilder::new().with_staggering(0.0));
    }
}
