// src/grid.rs

//! Defines the `Grid` type, the row-grid data model shared by font glyphs,
//! gallery images, and composed artwork.
//!
//! A `Grid` is an ordered sequence of rows; a `Row` is a sequence of `char`
//! columns. Glyphs and images within one font or gallery all share the same
//! height (row count), which is what lets the compositor fold them together
//! row by row. Rows may differ in width until composition aligns them.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A single row of character columns.
pub type Row = Vec<char>;

/// A fixed-height block of text rows.
///
/// In the persisted JSON documents a grid is simply a sequence of strings,
/// one per row; the serde bridge below converts in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Creates a grid of `height` empty rows.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Grid {
            rows: vec![Row::new(); height],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, or 0 for an empty grid.
    ///
    /// Only meaningful once rows are aligned (composed output, loaded
    /// glyphs); used by the post-processing helpers for border geometry.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resets to the empty state (no rows).
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Exchanges contents with `other` without an intermediate copy.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.rows, &mut other.rows);
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn rows_mut(&mut self) -> std::slice::IterMut<'_, Row> {
        self.rows.iter_mut()
    }
}

/// Panics on out-of-range access, the only failure mode row access has.
impl Index<usize> for Grid {
    type Output = Row;

    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }
}

impl From<Vec<String>> for Grid {
    fn from(rows: Vec<String>) -> Self {
        Grid {
            rows: rows.iter().map(|row| row.chars().collect()).collect(),
        }
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Grid {
    fn from_iter<I: IntoIterator<Item = S>>(rows: I) -> Self {
        Grid {
            rows: rows
                .into_iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn display_joins_rows_with_newlines() {
        let grid: Grid = ["ab", "cd"].into_iter().collect();
        assert_eq!(grid.to_string(), "ab\ncd");
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: Grid = ["xx"].into_iter().collect();
        let mut b = Grid::new(3);
        a.swap(&mut b);
        assert_eq!(a.height(), 3);
        assert_eq!(b.to_string(), "xx");
    }

    #[test]
    fn clear_empties_the_grid() {
        let mut grid: Grid = ["ab", "cd"].into_iter().collect();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn string_round_trip() {
        let rows = vec!["| |".to_string(), "|_|".to_string()];
        let grid = Grid::from(rows.clone());
        assert_eq!(Vec::<String>::from(grid), rows);
    }

    #[test]
    fn width_is_first_row_width() {
        let grid: Grid = ["abcd", "ab"].into_iter().collect();
        assert_eq!(grid.width(), 4);
        assert_eq!(Grid::default().width(), 0);
    }
}
