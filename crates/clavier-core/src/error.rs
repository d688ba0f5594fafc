//! Error types for layout construction and queries.

use thiserror::Error;

/// Errors raised while building or querying a keyboard layout.
///
/// All errors are raised synchronously by the call that detects the
/// violation; no partial results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A metric name other than `l1` or `l2` was requested.
    #[error("Unknown metric: {0}, must be 'l1' or 'l2'")]
    UnknownMetric(String),

    /// A character that has no key in the layout was queried.
    #[error("Unknown character: {0:?} is not part of the layout")]
    UnknownCharacter(char),

    /// The coordinate or staggering specification is malformed.
    #[error("Invalid layout specification: {0}")]
    InvalidSpec(String),

    /// A shape query was made on a layout without keys.
    #[error("Layout has no keys")]
    EmptyLayout,
}
