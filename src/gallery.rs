// src/gallery.rs

//! JSON-backed gallery: a name → image-grid mapping plus its config.
//!
//! The document mirrors the font format with `gallery_config` and
//! `gallery_image` sections. Galleries never support smushing, so a shrink
//! level above 1 is rejected when the document is parsed.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::config::{Config, Shrink};
use crate::grid::Grid;
use crate::source::{Source, SourceError};

#[derive(Debug, Deserialize)]
struct GalleryDocument {
    gallery_config: Config,
    gallery_image: BTreeMap<String, Grid>,
}

/// A loaded image gallery.
#[derive(Debug, Clone)]
pub struct Gallery {
    config: Config,
    images: BTreeMap<String, Grid>,
}

impl Gallery {
    /// Builds a gallery directly from its parts.
    ///
    /// # Errors
    /// [`SourceError::Format`] if the config claims a shrink level galleries
    /// do not support.
    pub fn new(config: Config, images: BTreeMap<String, Grid>) -> Result<Self, SourceError> {
        if config.shrink > Shrink::Level1 {
            return Err(SourceError::Format(format!(
                "gallery shrink level must be 0 or 1, got {:?}",
                config.shrink
            )));
        }
        Ok(Gallery { config, images })
    }

    /// Reads a `.json` gallery document from disk.
    ///
    /// # Errors
    /// [`SourceError::Format`] if the extension is not `.json` or the
    /// document does not match the schema, [`SourceError::Io`] if the file
    /// cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if path.extension().and_then(OsStr::to_str) != Some("json") {
            return Err(SourceError::Format(format!(
                "{} is not a .json gallery document",
                path.display()
            )));
        }
        let gallery = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "loaded gallery {} ({} images, height {})",
            path.display(),
            gallery.images.len(),
            gallery.config.height,
        );
        Ok(gallery)
    }

    /// Parses a gallery document from an in-memory JSON string.
    ///
    /// # Errors
    /// [`SourceError::Format`] if the document does not match the schema.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        let document: GalleryDocument = serde_json::from_str(text)?;
        Self::new(document.gallery_config, document.gallery_image)
    }

    /// Names this gallery has images for.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}

impl Source for Gallery {
    type Key = str;

    fn config(&self) -> &Config {
        &self.config
    }

    fn lookup(&self, key: &str) -> Result<Grid, SourceError> {
        self.images
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
