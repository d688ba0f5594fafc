//! Error types for Clavier operations.
//!
//! This module provides the main error type [`ClavierError`] which wraps
//! the layout errors of [`clavier_core`] together with the failures of the
//! surrounding application (I/O, configuration).

use std::io;

use thiserror::Error;

use clavier_core::LayoutError;

/// The main error type for Clavier operations.
#[derive(Debug, Error)]
pub enum ClavierError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),
}
