//! Distance engine.
//!
//! Three distances are measured over a [`Layout`]:
//!
//! - [`Layout::char_distance`]: distance between the keys of two characters
//! - [`Layout::word_distance`]: weighted Levenshtein distance between two
//!   words, where substituting one character for another costs the distance
//!   between their keys
//! - [`Layout::typing_distance`]: total travel when typing a word, one key
//!   after the other
//!
//! The edit distance itself is available with any substitution cost through
//! [`word_distance_with`].

use log::{trace, warn};
use serde::Deserialize;

use clavier_core::{LayoutError, metric::Metric};

use crate::layout::{Layout, normalize};

/// Costs of the non-substitution edit operations.
///
/// Both default to `1.0`. Negative costs are accepted but make the result
/// meaningless as a distance; validating them is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditCosts {
    /// Cost of dropping a character of the second word.
    #[serde(rename = "deletion_cost")]
    deletion: f64,
    /// Cost of adding a character of the first word.
    #[serde(rename = "insertion_cost")]
    insertion: f64,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            deletion: 1.0,
            insertion: 1.0,
        }
    }
}

impl EditCosts {
    /// Creates edit costs with the given deletion and insertion costs.
    pub fn new(deletion: f64, insertion: f64) -> Self {
        Self {
            deletion,
            insertion,
        }
    }

    /// Returns the deletion cost
    pub fn deletion(&self) -> f64 {
        self.deletion
    }

    /// Returns the insertion cost
    pub fn insertion(&self) -> f64 {
        self.insertion
    }

    /// Sets the deletion cost
    pub fn with_deletion(mut self, deletion: f64) -> Self {
        self.deletion = deletion;
        self
    }

    /// Sets the insertion cost
    pub fn with_insertion(mut self, insertion: f64) -> Self {
        self.insertion = insertion;
        self
    }
}

/// Weighted Levenshtein distance between two words (Wagner-Fischer).
///
/// The table has one row per character of `w2` and one column per character
/// of `w1`, plus a base row and column. Moving down a row costs
/// `costs.deletion()`, moving right a column costs `costs.insertion()`, and
/// moving diagonally costs `substitution(w1[j - 1], w2[i - 1])`.
///
/// The base row and column always count one per character, whatever the
/// configured costs.
///
/// # Arguments
///
/// * `w1` - First word, laid out along the columns
/// * `w2` - Second word, laid out along the rows
/// * `costs` - Deletion and insertion costs
/// * `substitution` - Cost of aligning a character of `w1` with one of `w2`
///
/// # Errors
///
/// Returns the first error raised by `substitution`.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use clavier::{EditCosts, word_distance_with};
///
/// let unit = |a: char, b: char| Ok::<_, Infallible>(if a == b { 0.0 } else { 1.0 });
/// let distance = word_distance_with("kitten", "sitting", EditCosts::default(), unit).unwrap();
/// assert_eq!(distance, 3.0);
/// ```
pub fn word_distance_with<F, E>(
    w1: &str,
    w2: &str,
    costs: EditCosts,
    mut substitution: F,
) -> Result<f64, E>
where
    F: FnMut(char, char) -> Result<f64, E>,
{
    if costs.deletion < 0.0 || costs.insertion < 0.0 {
        warn!(
            deletion = costs.deletion,
            insertion = costs.insertion;
            "Negative edit cost, result may not be a distance"
        );
    }

    let w1: Vec<char> = w1.chars().collect();
    let w2: Vec<char> = w2.chars().collect();

    let mut table = vec![vec![0.0; w1.len() + 1]; w2.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i as f64;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j as f64;
    }

    for (j, &c1) in w1.iter().enumerate().map(|(j, c)| (j + 1, c)) {
        for (i, &c2) in w2.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            let substitution_cost = substitution(c1, c2)?;
            table[i][j] = (table[i - 1][j] + costs.deletion)
                .min(table[i][j - 1] + costs.insertion)
                .min(table[i - 1][j - 1] + substitution_cost);
        }
    }

    Ok(table[w2.len()][w1.len()])
}

impl Layout {
    /// Distance between the keys of two characters.
    ///
    /// Identical characters (ignoring case) are at distance `0.0` without a
    /// lookup, even if they have no key.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCharacter`] if either character has no key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier::{LayoutBuilder, NamedLayout};
    /// # use clavier_core::metric::Metric;
    /// let dialpad = NamedLayout::Dialpad.load(&LayoutBuilder::new()).unwrap();
    ///
    /// assert_eq!(dialpad.char_distance('1', '9', Metric::L1).unwrap(), 4.0);
    /// assert_eq!(dialpad.char_distance('1', '1', Metric::L2).unwrap(), 0.0);
    /// ```
    pub fn char_distance(&self, c1: char, c2: char, metric: Metric) -> Result<f64, LayoutError> {
        if normalize(c1) == normalize(c2) {
            return Ok(0.0);
        }

        let p1 = self.try_position(c1)?;
        let p2 = self.try_position(c2)?;
        Ok(metric.distance(p1, p2))
    }

    /// Weighted Levenshtein distance between two words, where substituting a
    /// character costs the distance between the two keys.
    ///
    /// See [`word_distance_with`] for the layout of the table and the role
    /// of each cost.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCharacter`] if a substituted character
    /// has no key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use clavier::{EditCosts, LayoutBuilder, NamedLayout};
    /// # use clavier_core::metric::Metric;
    /// let dialpad = NamedLayout::Dialpad.load(&LayoutBuilder::new()).unwrap();
    ///
    /// let distance = dialpad
    ///     .word_distance("123", "523", EditCosts::default(), Metric::L2)
    ///     .unwrap();
    /// assert!((distance - 1.414).abs() < 1e-3);
    /// ```
    pub fn word_distance(
        &self,
        w1: &str,
        w2: &str,
        costs: EditCosts,
        metric: Metric,
    ) -> Result<f64, LayoutError> {
        let distance =
            word_distance_with(w1, w2, costs, |c1, c2| self.char_distance(c1, c2, metric))?;
        trace!(w1, w2, distance; "Word distance computed");
        Ok(distance)
    }

    /// Sum of the distances between each pair of consecutive characters.
    ///
    /// Empty and single character words have a typing distance of `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownCharacter`] if a character has no key.
    pub fn typing_distance(&self, word: &str, metric: Metric) -> Result<f64, LayoutError> {
        word.chars()
            .zip(word.chars().skip(1))
            .map(|(c1, c2)| self.char_distance(c1, c2, metric))
            .sum()
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{LayoutBuilder, NamedLayout};

    fn word_strategy() -> impl Strategy<Value = String> {
        "[a-z]{0,8}"
    }

    fn metric_strategy() -> impl Strategy<Value = Metric> {
        prop_oneof![Just(Metric::L1), Just(Metric::L2)]
    }

    fn qwerty() -> Layout {
        NamedLayout::Qwerty
            .load(&LayoutBuilder::new().with_staggering(vec![0.5, 0.25, 0.5]))
            .unwrap()
    }

    /// A word is at distance zero from itself.
    fn check_identity_is_zero(layout: &Layout, w: &str, metric: Metric) -> Result<(), TestCaseError> {
        let distance = layout.word_distance(w, w, EditCosts::default(), metric).unwrap();
        prop_assert_eq!(distance, 0.0);
        Ok(())
    }

    /// With equal deletion and insertion costs the distance is symmetric.
    fn check_word_distance_is_symmetric(
        layout: &Layout,
        w1: &str,
        w2: &str,
        cost: f64,
        metric: Metric,
    ) -> Result<(), TestCaseError> {
        let costs = EditCosts::new(cost, cost);
        let forward = layout.word_distance(w1, w2, costs, metric).unwrap();
        let backward = layout.word_distance(w2, w1, costs, metric).unwrap();
        prop_assert!(approx_eq!(f64, forward, backward));
        Ok(())
    }

    /// Inserting one character into `w2` moves the distance by at most one
    /// edit with the default costs.
    fn check_insertion_is_bounded(
        layout: &Layout,
        w1: &str,
        w2: &str,
        c: char,
        at: usize,
    ) -> Result<(), TestCaseError> {
        let mut extended: Vec<char> = w2.chars().collect();
        let at = at.min(extended.len());
        extended.insert(at, c);
        let extended: String = extended.into_iter().collect();

        let costs = EditCosts::default();
        let before = layout.word_distance(w1, w2, costs, Metric::L2).unwrap();
        let after = layout.word_distance(w1, &extended, costs, Metric::L2).unwrap();
        prop_assert!((after - before).abs() <= costs.insertion() + 1e-9);
        Ok(())
    }

    /// Key distances are never negative and every character is at distance
    /// zero from itself.
    fn check_char_distance_basics(layout: &Layout, c1: char, c2: char, metric: Metric) -> Result<(), TestCaseError> {
        prop_assert_eq!(layout.char_distance(c1, c1, metric).unwrap(), 0.0);
        prop_assert!(layout.char_distance(c1, c2, metric).unwrap() >= 0.0);
        Ok(())
    }

    /// Typing a word costs at least the direct hop from its first to its
    /// last key.
    fn check_typing_distance_bounds_direct_hop(layout: &Layout, w: &str, metric: Metric) -> Result<(), TestCaseError> {
        let (Some(first), Some(last)) = (w.chars().next(), w.chars().last()) else {
            return Ok(());
        };
        let typing = layout.typing_distance(w, metric).unwrap();
        let direct = layout.char_distance(first, last, metric).unwrap();
        prop_assert!(typing + 1e-9 >= direct);
        Ok(())
    }

    proptest! {
        #[test]
        fn identity_is_zero(w in word_strategy(), metric in metric_strategy()) {
            check_identity_is_zero(&qwerty(), &w, metric)?;
        }

        #[test]
        fn word_distance_is_symmetric(
            w1 in word_strategy(),
            w2 in word_strategy(),
            cost in 0.0f64..3.0,
            metric in metric_strategy()
        ) {
            check_word_distance_is_symmetric(&qwerty(), &w1, &w2, cost, metric)?;
        }

        #[test]
        fn insertion_is_bounded(
            w1 in word_strategy(),
            w2 in word_strategy(),
            c in proptest::char::range('a', 'z'),
            at in 0usize..10
        ) {
            check_insertion_is_bounded(&qwerty(), &w1, &w2, c, at)?;
        }

        #[test]
        fn char_distance_basics(
            c1 in proptest::char::range('a', 'z'),
            c2 in proptest::char::range('a', 'z'),
            metric in metric_strategy()
        ) {
            check_char_distance_basics(&qwerty(), c1, c2, metric)?;
        }

        #[test]
        fn typing_distance_bounds_direct_hop(w in word_strategy(), metric in metric_strategy()) {
            check_typing_distance_bounds_direct_hop(&qwerty(), &w, metric)?;
        }
    }
}
