//! Command-line argument definitions for the Clavier CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments select the layout, configuration file,
//! metric and logging verbosity; the [`Command`] selects the query.

use clap::{Parser, Subcommand};

use clavier::{NamedLayout, metric::Metric};

/// Command-line arguments for the Clavier keyboard distance tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Built-in layout to use (qwerty, dvorak, dialpad)
    #[arg(short, long, global = true)]
    pub layout: Option<NamedLayout>,

    /// Path to a custom layout grid file, instead of a built-in layout
    #[arg(short, long, global = true, conflicts_with = "layout")]
    pub grid_file: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Distance metric (l1, l2)
    #[arg(short, long, global = true)]
    pub metric: Option<Metric>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Query to run
    #[command(subcommand)]
    pub command: Command,
}

/// Queries supported by the CLI
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Distance between the keys of two characters
    Char {
        /// First character
        c1: char,
        /// Second character
        c2: char,
    },

    /// Edit distance between two words, substitutions weighted by key distance
    Word {
        /// First word
        w1: String,
        /// Second word
        w2: String,
        /// Cost of dropping a character
        #[arg(long)]
        deletion_cost: Option<f64>,
        /// Cost of adding a character
        #[arg(long)]
        insertion_cost: Option<f64>,
    },

    /// Total key travel when typing a word
    Typing {
        /// Word to type
        word: String,
    },

    /// Keys closest to a character
    Neighbors {
        /// Character to start from
        c: char,
        /// Number of neighbors to list (all when omitted)
        #[arg(short)]
        k: Option<usize>,
    },

    /// Number of rows and columns of the layout
    Shape,

    /// Print the layout grid, optionally rendering it to SVG
    Show {
        /// Path of the SVG file to write
        #[arg(long)]
        svg: Option<String>,
        /// Font size of the SVG key labels
        #[arg(long, default_value_t = 24.0)]
        font_size: f64,
    },
}
