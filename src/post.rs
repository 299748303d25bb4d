// src/post.rs

//! Post-processing helpers: pure transforms over already-composed grids.

use crate::config::{Config, Shrink};
use crate::grid::{Grid, Row};
use crate::style::{Composer, Style, StyleError};

/// Surrounds the grid with a border: `horizontal` rules above and below,
/// `vertical` plus one space of padding on each side. An empty grid frames
/// to an empty grid.
#[must_use]
pub fn frame(grid: &Grid, horizontal: char, vertical: char) -> Grid {
    if grid.is_empty() {
        return Grid::default();
    }
    let rule: Row = vec![horizontal; grid.width() + 4];
    let mut framed = Grid::default();
    framed.push_row(rule.clone());
    for row in grid.rows() {
        let mut bordered = vec![vertical, ' '];
        bordered.extend(row.iter().copied());
        bordered.extend([' ', vertical]);
        framed.push_row(bordered);
    }
    framed.push_row(rule);
    framed
}

/// Prepends `lines` blank rows of the grid's width.
#[must_use]
pub fn pad_top(grid: &Grid, lines: usize) -> Grid {
    if grid.is_empty() {
        return Grid::default();
    }
    let blank: Row = vec![' '; grid.width()];
    let mut padded = Grid::default();
    for _ in 0..lines {
        padded.push_row(blank.clone());
    }
    for row in grid.rows() {
        padded.push_row(row.clone());
    }
    padded
}

/// Appends `lines` blank rows of the grid's width.
#[must_use]
pub fn pad_bottom(grid: &Grid, lines: usize) -> Grid {
    if grid.is_empty() {
        return Grid::default();
    }
    let blank: Row = vec![' '; grid.width()];
    let mut padded = Grid::default();
    for row in grid.rows() {
        padded.push_row(row.clone());
    }
    for _ in 0..lines {
        padded.push_row(blank.clone());
    }
    padded
}

/// Joins `right` onto the right edge of `left`, `gap` columns apart.
///
/// The shorter grid is padded with blank bottom rows to equalize heights,
/// then the two are kerned together with a neutral hard-blank.
///
/// # Errors
/// [`StyleError::HeightMismatch`] if one grid is empty and the other is not.
pub fn append_right(left: &Grid, right: &Grid, gap: usize) -> Result<Grid, StyleError> {
    let height = left.height().max(right.height());
    let left = pad_bottom(left, height - left.height());
    let right = pad_bottom(right, height - right.height());
    let mut composer = Composer::new(Style::Kerning { space: gap });
    composer.set_config(Config::new('\0', height, Shrink::Level1))?;
    composer.compose(&[left, right])
}

/// Joins `other` onto the left edge of `base`, `gap` columns apart.
///
/// # Errors
/// See [`append_right`].
pub fn append_left(base: &Grid, other: &Grid, gap: usize) -> Result<Grid, StyleError> {
    append_right(other, base, gap)
}
