//! Error adapter for converting ClavierError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use clavier::{ClavierError, LayoutError};

/// Adapter rendering a [`ClavierError`] as a miette diagnostic.
///
/// Each error kind gets a stable code and, where the fix is known, a help
/// message.
pub struct ErrorAdapter<'a>(pub &'a ClavierError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ClavierError::Io(_) => "clavier::io",
            ClavierError::Config(_) => "clavier::config",
            ClavierError::Layout(LayoutError::UnknownMetric(_)) => "clavier::unknown_metric",
            ClavierError::Layout(LayoutError::UnknownCharacter(_)) => "clavier::unknown_character",
            ClavierError::Layout(LayoutError::InvalidSpec(_)) => "clavier::invalid_spec",
            ClavierError::Layout(LayoutError::EmptyLayout) => "clavier::empty_layout",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ClavierError::Layout(LayoutError::UnknownMetric(_)) => "use 'l1' or 'l2'",
            ClavierError::Layout(LayoutError::UnknownCharacter(_)) => {
                "run `clavier show` to list the keys of the layout"
            }
            ClavierError::Layout(LayoutError::InvalidSpec(_)) => {
                "a per-row staggering needs one amount per pair of consecutive rows"
            }
            ClavierError::Layout(LayoutError::EmptyLayout) => {
                "keys are separated by single spaces, one row per line"
            }
            ClavierError::Io(_) | ClavierError::Config(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
