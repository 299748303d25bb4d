// src/style/mod.rs

//! The glyph/image compositor: composition styles and the fold that applies
//! them.
//!
//! A [`Style`] selects how consecutive grids meet: concatenated untouched,
//! separated by a uniform kerning gap, or merged at the boundary column
//! under the smushing rules. A [`Composer`] binds a style to a [`Config`]
//! and folds a sequence of grids left-to-right into one composed grid.
//!
//! Instead of the marker characters a sentinel-based formulation would
//! splice into the rows, the fold tracks one boundary index per row (the
//! "seam": just past the last non-space column of the composed row). Glyph
//! content can therefore never collide with composition bookkeeping.

mod smush;

use std::cmp::Ordering;
use std::iter;

use itertools::izip;
use log::debug;
use thiserror::Error;

use crate::config::{Config, Shrink};
use crate::grid::{Grid, Row};

/// How consecutive glyphs or images are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Straight per-row concatenation.
    Untouched,
    /// Uniform gap of `space` columns between consecutive grids.
    Kerning { space: usize },
    /// Boundary columns merged under the smushing rules. Fonts only.
    Smushed,
}

impl Style {
    /// Minimum shrink level a config must grant for this style.
    #[must_use]
    pub const fn required_shrink(&self) -> Shrink {
        match self {
            Style::Untouched => Shrink::Level0,
            Style::Kerning { .. } => Shrink::Level1,
            Style::Smushed => Shrink::Level2,
        }
    }
}

/// Failures raised by the compositor.
#[derive(Debug, Error)]
pub enum StyleError {
    /// An input grid's row count does not match the bound height.
    #[error("grid height {found} does not match the configured height {expected}")]
    HeightMismatch { expected: usize, found: usize },
    /// The style needs a higher shrink level than the config grants.
    #[error("style requires shrink level {required:?} but the source allows {available:?}")]
    UnsupportedStyle { required: Shrink, available: Shrink },
    /// `compose` was called before a config was bound.
    #[error("no config bound; call set_config first")]
    Unbound,
}

/// A style bound (or waiting to be bound) to a config.
#[derive(Debug, Clone)]
pub struct Composer {
    style: Style,
    config: Option<Config>,
}

impl Composer {
    /// Creates an unbound composer; [`Composer::set_config`] must succeed
    /// before anything can be composed.
    #[must_use]
    pub fn new(style: Style) -> Self {
        Composer {
            style,
            config: None,
        }
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The bound config, if any.
    #[must_use]
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Discards the bound config, returning to the unbound state.
    pub fn clear(&mut self) {
        self.config = None;
    }

    /// Binds `config`, replacing any previous binding.
    ///
    /// # Errors
    /// [`StyleError::UnsupportedStyle`] if the config's shrink level does not
    /// reach the style's requirement; the previous binding is kept.
    pub fn set_config(&mut self, config: Config) -> Result<(), StyleError> {
        let required = self.style.required_shrink();
        if required > config.shrink {
            return Err(StyleError::UnsupportedStyle {
                required,
                available: config.shrink,
            });
        }
        self.config = Some(config);
        Ok(())
    }

    /// Folds `grids` left-to-right into one composed grid of exactly the
    /// bound height, then substitutes every hard-blank with a space.
    ///
    /// Inputs are not modified; on failure nothing is returned and the
    /// binding is untouched.
    ///
    /// # Errors
    /// [`StyleError::Unbound`] without a bound config,
    /// [`StyleError::HeightMismatch`] if any input grid has the wrong height
    /// (checked for all inputs before any folding).
    pub fn compose(&self, grids: &[Grid]) -> Result<Grid, StyleError> {
        let config = self.config.as_ref().ok_or(StyleError::Unbound)?;
        for grid in grids {
            if grid.height() != config.height {
                return Err(StyleError::HeightMismatch {
                    expected: config.height,
                    found: grid.height(),
                });
            }
        }

        debug!(
            "composing {} grids, style {:?}, height {}",
            grids.len(),
            self.style,
            config.height
        );

        let mut art = Grid::new(config.height);
        for grid in grids {
            match self.style {
                Style::Untouched => concat_step(&mut art, grid),
                Style::Kerning { space } => kern_step(&mut art, grid, space),
                Style::Smushed => smush_step(&mut art, grid, config.hard_blank),
            }
        }

        for row in art.rows_mut() {
            for c in row.iter_mut() {
                if *c == config.hard_blank {
                    *c = ' ';
                }
            }
        }
        Ok(art)
    }
}

/// Index just past the last non-space column; 0 for an all-space row.
///
/// Hard-blanks are not spaces and count as ink here.
fn seam(row: &Row) -> usize {
    row.iter().rposition(|&c| c != ' ').map_or(0, |p| p + 1)
}

/// Length of the run of spaces starting at `from`.
fn space_run(row: &Row, from: usize) -> usize {
    row[from..].iter().take_while(|&&c| c == ' ').count()
}

fn append_rows(art: &mut Grid, grid: &Grid) {
    for (row, incoming) in izip!(art.rows_mut(), grid.rows()) {
        row.extend(incoming.iter().copied());
    }
}

fn concat_step(art: &mut Grid, grid: &Grid) {
    append_rows(art, grid);
}

/// Appends `grid` and adjusts the seam so the minimum inter-glyph gap across
/// all rows equals `space`. Every row shifts by the same amount, preserving
/// vertical alignment.
fn kern_step(art: &mut Grid, grid: &Grid, space: usize) {
    let seams: Vec<usize> = art.rows().map(|row| seam(row)).collect();
    append_rows(art, grid);

    let min_gap = izip!(art.rows(), &seams)
        .map(|(row, &s)| space_run(row, s))
        .min()
        .unwrap_or(0);

    match min_gap.cmp(&space) {
        Ordering::Equal => {}
        Ordering::Greater => {
            let excess = min_gap - space;
            for (row, &s) in izip!(art.rows_mut(), &seams) {
                row.drain(s..s + excess);
            }
        }
        Ordering::Less => {
            let shortfall = space - min_gap;
            for (row, &s) in izip!(art.rows_mut(), &seams) {
                row.splice(s..s, iter::repeat(' ').take(shortfall));
            }
        }
    }
}

/// Appends `grid`, tightens the seam to a zero gap at the closest row, then
/// merges the two boundary columns into one wherever the rules allow.
///
/// The merge is all-or-nothing for the glyph pair: if any row has no
/// character on one side of its seam, or pairs a hard-blank with a different
/// character, the fitted concatenation stands and no column is merged.
fn smush_step(art: &mut Grid, grid: &Grid, hard_blank: char) {
    let seams: Vec<usize> = art.rows().map(|row| seam(row)).collect();
    append_rows(art, grid);

    let min_gap = izip!(art.rows(), &seams)
        .map(|(row, &s)| space_run(row, s))
        .min()
        .unwrap_or(0);
    for (row, &s) in izip!(art.rows_mut(), &seams) {
        row.drain(s..s + min_gap);
    }

    let mut pairs = Vec::with_capacity(seams.len());
    for (row, &s) in izip!(art.rows(), &seams) {
        if s == 0 || s >= row.len() {
            return;
        }
        let (left, right) = (row[s - 1], row[s]);
        if (left == hard_blank || right == hard_blank) && left != right {
            return;
        }
        pairs.push((left, right));
    }

    for (row, &s, &(left, right)) in izip!(art.rows_mut(), &seams, &pairs) {
        row[s - 1] = smush::merge(left, right);
        row.remove(s);
    }
}
