//! Parsing of space separated layout grids.
//!
//! A grid places one key character every other column, so the characters
//! of a row sit at offsets 0, 2, 4, ... of the line:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//!   0
//! ```
//!
//! Common leading whitespace is removed before parsing, and blank lines are
//! ignored. A blank cell (like the one before `0` above) produces no key but
//! still counts as a column, so later keys keep their alignment.

/// Grid coordinates of one key, as `(character, (row, column))`.
pub(crate) type GridCell = (char, (usize, usize));

/// Parses grid text into key coordinates, in reading order.
pub(crate) fn parse_grid(grid: &str) -> Vec<GridCell> {
    let margin = common_margin(grid);

    grid.lines()
        .filter(|line| !is_blank(line))
        .map(|line| line.strip_prefix(margin).unwrap_or(line))
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .step_by(2)
                .enumerate()
                .filter(|(_, c)| !is_indent(*c))
                .map(move |(column, c)| (c, (row, column)))
        })
        .collect()
}

/// Returns the longest leading whitespace shared by all non-blank lines.
fn common_margin(grid: &str) -> &str {
    let mut margin: Option<&str> = None;

    for line in grid.lines().filter(|line| !is_blank(line)) {
        let indent_len = line.len() - line.trim_start_matches(is_indent).len();
        let indent = &line[..indent_len];

        margin = Some(match margin {
            None => indent,
            Some(current) => {
                let shared = current
                    .char_indices()
                    .zip(indent.chars())
                    .find(|((_, a), b)| a != b)
                    .map_or(current.len().min(indent.len()), |((idx, _), _)| idx);
                &current[..shared]
            }
        });
    }

    margin.unwrap_or("")
}

fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_blank(line: &str) -> bool {
    line.chars().all(is_indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_grid() {
        let cells = parse_grid("a b\nc d");
        assert_eq!(
            cells,
            vec![
                ('a', (0, 0)),
                ('b', (0, 1)),
                ('c', (1, 0)),
                ('d', (1, 1)),
            ]
        );
    }

    #[test]
    fn test_parse_dedents_and_skips_blank_lines() {
        let grid = "
            q w e

              a s
        ";
        let cells = parse_grid(grid);
        assert_eq!(
            cells,
            vec![
                ('q', (0, 0)),
                ('w', (0, 1)),
                ('e', (0, 2)),
                ('a', (1, 1)),
                ('s', (1, 2)),
            ]
        );
    }

    #[test]
    fn test_parse_blank_cells_keep_alignment() {
        let cells = parse_grid("1 2 3\n  0");
        assert_eq!(cells.last(), Some(&('0', (1, 1))));
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let cells = parse_grid("a b c d\ne f");
        let row_lengths: Vec<usize> = [0, 1]
            .iter()
            .map(|row| cells.iter().filter(|(_, (r, _))| r == row).count())
            .collect();
        assert_eq!(row_lengths, vec![4, 2]);
    }

    #[test]
    fn test_parse_backslash_and_punctuation() {
        let cells = parse_grid(r"[ ] \");
        assert_eq!(cells, vec![('[', (0, 0)), (']', (0, 1)), ('\\', (0, 2))]);
    }

    #[test]
    fn test_parse_empty_grid() {
        assert!(parse_grid("").is_empty());
        assert!(parse_grid("   \n\n  ").is_empty());
    }

    #[test]
    fn test_common_margin() {
        assert_eq!(common_margin("    a\n  b"), "  ");
        assert_eq!(common_margin("\ta\n b"), "");
        assert_eq!(common_margin("a\n    b"), "");
        assert_eq!(common_margin("\n   a\n\n   b\n"), "   ");
    }
}
