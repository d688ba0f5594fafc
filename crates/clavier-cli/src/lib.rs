//! CLI logic for the Clavier keyboard distance tool.
//!
//! This module resolves the configuration, loads the requested layout and
//! runs the query selected on the command line.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::{debug, info};

use clavier::{ClavierError, Keyboard, config::AppConfig};

/// Run the Clavier CLI application
///
/// Loads the configuration, applies the command-line overrides, builds the
/// keyboard and runs the query. The query result is returned as text, one
/// value per line.
///
/// # Errors
///
/// Returns `ClavierError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Layout construction errors
/// - Unknown characters in the query
pub fn run(args: &Args) -> Result<String, ClavierError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, args);
    debug!(app_config:?; "Resolved configuration");

    let keyboard = match &args.grid_file {
        Some(path) => {
            info!(path; "Loading layout grid file");
            let grid = fs::read_to_string(path)?;
            Keyboard::from_grid(&grid, &app_config)?
        }
        None => Keyboard::from_config(&app_config)?,
    };

    let output = match &args.command {
        Command::Char { c1, c2 } => format!("{}\n", keyboard.char_distance(*c1, *c2)?),
        Command::Word { w1, w2, .. } => format!("{}\n", keyboard.word_distance(w1, w2)?),
        Command::Typing { word } => format!("{}\n", keyboard.typing_distance(word)?),
        Command::Neighbors { c, k } => keyboard
            .nearest_neighbors(*c, *k)?
            .into_iter()
            .map(|(neighbor, distance)| format!("{neighbor}\t{distance}\n"))
            .collect(),
        Command::Shape => {
            let (rows, columns) = keyboard.shape()?;
            format!("{rows} {columns}\n")
        }
        Command::Show { svg, font_size } => {
            if let Some(path) = svg {
                fs::write(path, keyboard.render_svg(*font_size)?)?;
                info!(output_file = path; "SVG exported successfully");
            }
            format!("{}\n", keyboard.layout())
        }
    };

    Ok(output)
}

/// Applies command-line values on top of the loaded configuration.
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(layout) = args.layout {
        config.layout_mut().set_name(layout);
    }
    if let Some(metric) = args.metric {
        config.distance_mut().set_metric(metric);
    }
    if let Command::Word {
        deletion_cost,
        insertion_cost,
        ..
    } = &args.command
    {
        if let Some(cost) = deletion_cost {
            config.distance_mut().set_deletion_cost(*cost);
        }
        if let Some(cost) = insertion_cost {
            config.distance_mut().set_insertion_cost(*cost);
        }
    }
}
