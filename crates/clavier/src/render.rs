//! Rendering of layouts as text grids and SVG documents.
//!
//! [`Layout`] implements [`fmt::Display`] by placing every key back on the
//! integer grid it was most likely built from, which reproduces the grid
//! text of unstaggered, unit pitch layouts. [`render_svg`] draws the keys at
//! their actual positions.

use std::{collections::BTreeMap, fmt};

use log::debug;
use svg::{Document, node::element as svg_element};

use clavier_core::LayoutError;

use crate::layout::Layout;

/// Spacing between adjacent key centers, in multiples of the font size.
const KEY_SPACING: f64 = 1.5;

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Truncating to the grid; a later key on the same cell wins
        let cells: BTreeMap<(usize, usize), char> = self
            .iter()
            .map(|(c, pos)| ((pos.row() as usize, pos.column() as usize), c))
            .collect();

        let n_rows = cells.keys().map(|(row, _)| row + 1).max().unwrap_or(0);
        let mut rows: Vec<Vec<char>> = vec![Vec::new(); n_rows];
        for ((row, column), c) in cells {
            let row = &mut rows[row];
            row.resize(column.max(row.len()), ' ');
            row.push(c);
        }

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Renders the layout as an SVG document with one label per key.
///
/// Keys are drawn at their positions, scaled so that a unit of distance
/// spans one and a half times `font_size`.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyLayout`] if the layout has no keys.
///
/// # Examples
///
/// ```
/// # use clavier::{LayoutBuilder, NamedLayout, render_svg};
/// let dialpad = NamedLayout::Dialpad.load(&LayoutBuilder::new()).unwrap();
/// let svg = render_svg(&dialpad, 20.0).unwrap();
///
/// assert!(svg.contains("<svg"));
/// assert_eq!(svg.matches("<text").count(), 12);
/// ```
pub fn render_svg(layout: &Layout, font_size: f64) -> Result<String, LayoutError> {
    let unit = font_size * KEY_SPACING;

    let (min_row, max_row, min_column, max_column) = layout
        .iter()
        .map(|(_, pos)| (pos.row(), pos.row(), pos.column(), pos.column()))
        .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
        .ok_or(LayoutError::EmptyLayout)?;

    let width = (max_column - min_column + 1.0) * unit;
    let height = (max_row - min_row + 1.0) * unit;

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height);

    for (c, pos) in layout.iter() {
        let label = svg_element::Text::new(c.to_string())
            .set("x", (pos.column() - min_column + 0.5) * unit)
            .set("y", (pos.row() - min_row + 0.5) * unit)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "monospace")
            .set("font-size", font_size);
        document = document.add(label);
    }

    debug!(keys = layout.len(), width, height; "Layout rendered to SVG");

    Ok(document.to_string())
}
