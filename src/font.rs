// src/font.rs

//! JSON-backed font: a character → glyph-grid mapping plus its config.
//!
//! The persisted document has two sections:
//!
//! ```json
//! {
//!   "font_config": { "HardBlank": "$", "Height": 6, "Shrink": 2 },
//!   "font_letter": { "A": ["  _  ", " / \\ ", "..."], "B": ["..."] }
//! }
//! ```

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::grid::Grid;
use crate::source::{Source, SourceError};

#[derive(Debug, Serialize, Deserialize)]
struct FontDocument {
    font_config: Config,
    font_letter: BTreeMap<char, Grid>,
}

/// A loaded font.
#[derive(Debug, Clone)]
pub struct Font {
    config: Config,
    letters: BTreeMap<char, Grid>,
}

impl Font {
    /// Builds a font directly from its parts (used by the converter and in
    /// tests; regular callers go through [`Font::load`]).
    #[must_use]
    pub fn new(config: Config, letters: BTreeMap<char, Grid>) -> Self {
        Font { config, letters }
    }

    /// Reads a `.json` font document from disk.
    ///
    /// # Errors
    /// [`SourceError::Format`] if the extension is not `.json` or the
    /// document does not match the schema, [`SourceError::Io`] if the file
    /// cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if path.extension().and_then(OsStr::to_str) != Some("json") {
            return Err(SourceError::Format(format!(
                "{} is not a .json font document",
                path.display()
            )));
        }
        let font = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "loaded font {} ({} letters, height {}, shrink {:?})",
            path.display(),
            font.letters.len(),
            font.config.height,
            font.config.shrink,
        );
        Ok(font)
    }

    /// Parses a font document from an in-memory JSON string.
    ///
    /// # Errors
    /// [`SourceError::Format`] if the document does not match the schema.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        let document: FontDocument = serde_json::from_str(text)?;
        for (key, glyph) in &document.font_letter {
            if glyph.height() != document.font_config.height {
                warn!(
                    "glyph {key:?} has {} rows, config says {}; composition will reject it",
                    glyph.height(),
                    document.font_config.height,
                );
            }
        }
        Ok(Font {
            config: document.font_config,
            letters: document.font_letter,
        })
    }

    /// Serializes the font back into the document format.
    ///
    /// # Errors
    /// [`SourceError::Format`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, SourceError> {
        let document = FontDocument {
            font_config: self.config,
            font_letter: self.letters.clone(),
        };
        serde_json::to_string_pretty(&document).map_err(SourceError::from)
    }

    /// Characters this font has glyphs for.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.keys().copied()
    }
}

impl Source for Font {
    type Key = char;

    fn config(&self) -> &Config {
        &self.config
    }

    fn lookup(&self, key: &char) -> Result<Grid, SourceError> {
        self.letters
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
