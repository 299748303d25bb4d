// src/config.rs

//! Per-font and per-gallery composition metadata.
//!
//! A `Config` travels from the loaded document into the compositor: the
//! hard-blank placeholder character, the row height every glyph or image must
//! share, and the shrink level that gates which composition styles the source
//! supports. The serde field names match the keys of the persisted JSON
//! sections (`HardBlank`, `Height`, `Shrink`).

use serde::{Deserialize, Serialize};

/// Compatibility tier gating which composition styles a source permits.
///
/// Level 0 allows untouched composition only, level 1 adds kerning, and
/// level 2 (fonts only) adds smushing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shrink {
    #[default]
    Level0,
    Level1,
    Level2,
}

impl TryFrom<u8> for Shrink {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Shrink::Level0),
            1 => Ok(Shrink::Level1),
            2 => Ok(Shrink::Level2),
            other => Err(format!("invalid shrink level {other}, expected 0, 1 or 2")),
        }
    }
}

impl From<Shrink> for u8 {
    fn from(shrink: Shrink) -> u8 {
        shrink as u8
    }
}

/// Composition metadata shared by every glyph or image of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    /// Placeholder that behaves as background during composition but renders
    /// as a space. Never reaches final output.
    pub hard_blank: char,
    /// Row count of every grid this config's source produces.
    pub height: usize,
    /// Highest composition style the source supports.
    pub shrink: Shrink,
}

impl Config {
    #[must_use]
    pub fn new(hard_blank: char, height: usize, shrink: Shrink) -> Self {
        Config {
            hard_blank,
            height,
            shrink,
        }
    }

    /// Resets to the cleared state: NUL hard-blank, zero height, level 0.
    pub fn clear(&mut self) {
        *self = Config::default();
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            hard_blank: '\0',
            height: 0,
            shrink: Shrink::Level0,
        }
    }
}
