// src/lib.rs

//! Composes text and gallery images into multi-row ASCII art.
//!
//! A JSON font maps each character to a fixed-height glyph grid and a JSON
//! gallery maps names to fixed-height image grids. A composition style folds
//! a sequence of grids into one artwork: concatenated untouched, kerned to a
//! uniform gap, or smushed so that facing boundary columns merge.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use textart::config::{Config, Shrink};
//! use textart::font::Font;
//! use textart::render::TextRenderer;
//! use textart::style::Style;
//!
//! let letters: BTreeMap<char, textart::grid::Grid> = [
//!     ('o', ["___ ", "| | ", "|_| "].into_iter().collect()),
//! ]
//! .into_iter()
//! .collect();
//! let font = Font::new(Config::new('$', 3, Shrink::Level2), letters);
//!
//! let mut renderer = TextRenderer::new(font, Style::Smushed).unwrap();
//! renderer.push_str("oo");
//! let art = renderer.art().unwrap();
//! assert_eq!(art.height(), 3);
//! ```

pub mod config;
pub mod font;
pub mod gallery;
pub mod grid;
pub mod post;
pub mod render;
pub mod source;
pub mod style;
