// src/render.rs

//! Facades that turn buffered keys into composed artwork.
//!
//! [`TextRenderer`] accumulates text and renders it through a font;
//! [`ImageRenderer`] accumulates gallery image names. Both resolve every
//! buffered key through their [`Source`], drive the bound [`Composer`], and
//! hand back the composed [`Grid`]. The composer is bound at construction,
//! so a renderer can never compose against a missing config.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::config::Config;
use crate::grid::Grid;
use crate::source::{Source, SourceError};
use crate::style::{Composer, Style, StyleError};

/// Failures surfaced by the rendering facades.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Renders buffered text through a font.
#[derive(Debug)]
pub struct TextRenderer<F: Source<Key = char>> {
    font: F,
    composer: Composer,
    text: String,
}

impl<F: Source<Key = char>> TextRenderer<F> {
    /// Binds `style` to the font's config.
    ///
    /// # Errors
    /// [`StyleError::UnsupportedStyle`] if the font does not permit the
    /// style.
    pub fn new(font: F, style: Style) -> Result<Self, RenderError> {
        let mut composer = Composer::new(style);
        composer.set_config(*font.config())?;
        Ok(TextRenderer {
            font,
            composer,
            text: String::new(),
        })
    }

    /// Replaces the font, rebinding the composer and discarding buffered
    /// text. On error the previous state is kept.
    ///
    /// # Errors
    /// [`StyleError::UnsupportedStyle`] if the new font does not permit the
    /// bound style.
    pub fn set_font(&mut self, font: F) -> Result<(), RenderError> {
        let mut composer = Composer::new(self.composer.style());
        composer.set_config(*font.config())?;
        self.composer = composer;
        self.font = font;
        self.text.clear();
        Ok(())
    }

    pub fn config(&self) -> &Config {
        self.font.config()
    }

    /// The buffered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Replaces the buffered text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Discards the buffered text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Resolves every buffered character and composes the artwork.
    ///
    /// Fails without producing anything if any character is missing from the
    /// font or any glyph has the wrong height.
    ///
    /// # Errors
    /// See [`RenderError`].
    pub fn art(&self) -> Result<Grid, RenderError> {
        debug!("rendering {} characters", self.text.chars().count());
        let glyphs = self
            .text
            .chars()
            .map(|c| self.font.lookup(&c))
            .collect::<Result<Vec<_>, SourceError>>()?;
        Ok(self.composer.compose(&glyphs)?)
    }
}

impl<F: Source<Key = char>> fmt::Write for TextRenderer<F> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

/// Renders a sequence of named gallery images.
#[derive(Debug)]
pub struct ImageRenderer<G: Source<Key = str>> {
    gallery: G,
    composer: Composer,
    names: Vec<String>,
}

impl<G: Source<Key = str>> ImageRenderer<G> {
    /// Binds `style` to the gallery's config.
    ///
    /// # Errors
    /// [`StyleError::UnsupportedStyle`] if the gallery does not permit the
    /// style.
    pub fn new(gallery: G, style: Style) -> Result<Self, RenderError> {
        let mut composer = Composer::new(style);
        composer.set_config(*gallery.config())?;
        Ok(ImageRenderer {
            gallery,
            composer,
            names: Vec::new(),
        })
    }

    /// Replaces the gallery, rebinding the composer and discarding buffered
    /// names. On error the previous state is kept.
    ///
    /// # Errors
    /// [`StyleError::UnsupportedStyle`] if the new gallery does not permit
    /// the bound style.
    pub fn set_gallery(&mut self, gallery: G) -> Result<(), RenderError> {
        let mut composer = Composer::new(self.composer.style());
        composer.set_config(*gallery.config())?;
        self.composer = composer;
        self.gallery = gallery;
        self.names.clear();
        Ok(())
    }

    pub fn config(&self) -> &Config {
        self.gallery.config()
    }

    /// Appends an image name to the buffer.
    pub fn load(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.push(name.into());
        self
    }

    /// Replaces the buffer with a single image name.
    pub fn set(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.clear();
        self.load(name)
    }

    /// The buffered image names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Discards the buffered names.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Resolves every buffered name and composes the artwork.
    ///
    /// # Errors
    /// See [`RenderError`].
    pub fn art(&self) -> Result<Grid, RenderError> {
        debug!("rendering {} images", self.names.len());
        let images = self
            .names
            .iter()
            .map(|name| self.gallery.lookup(name))
            .collect::<Result<Vec<_>, SourceError>>()?;
        Ok(self.composer.compose(&images)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fmt::Write as _;

    use super::{ImageRenderer, RenderError, TextRenderer};
    use crate::config::{Config, Shrink};
    use crate::font::Font;
    use crate::gallery::Gallery;
    use crate::grid::Grid;
    use crate::source::SourceError;
    use crate::style::{Style, StyleError};

    fn test_font() -> Font {
        let letters: BTreeMap<char, Grid> = [
            ('a', ["aa"].into_iter().collect()),
            ('b', ["b$"].into_iter().collect()),
        ]
        .into_iter()
        .collect();
        Font::new(Config::new('$', 1, Shrink::Level2), letters)
    }

    fn test_gallery() -> Gallery {
        let images: BTreeMap<String, Grid> = [
            ("dot".to_string(), ["*"].into_iter().collect()),
            ("dash".to_string(), ["-"].into_iter().collect()),
        ]
        .into_iter()
        .collect();
        Gallery::new(Config::new('#', 1, Shrink::Level1), images).unwrap()
    }

    #[test]
    fn renders_buffered_text() {
        let mut renderer = TextRenderer::new(test_font(), Style::Untouched).unwrap();
        write!(renderer, "ab").unwrap();
        assert_eq!(renderer.art().unwrap().to_string(), "aab ");
    }

    #[test]
    fn missing_character_propagates_not_found() {
        let mut renderer = TextRenderer::new(test_font(), Style::Untouched).unwrap();
        renderer.push_str("az");
        assert!(matches!(
            renderer.art().unwrap_err(),
            RenderError::Source(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn set_text_replaces_the_buffer() {
        let mut renderer = TextRenderer::new(test_font(), Style::Untouched).unwrap();
        renderer.push_str("ab");
        renderer.set_text("a");
        assert_eq!(renderer.text(), "a");
        assert_eq!(renderer.art().unwrap().to_string(), "aa");
    }

    #[test]
    fn unsupported_style_is_rejected_at_construction() {
        let gallery = test_gallery();
        let err = ImageRenderer::new(gallery, Style::Smushed).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Style(StyleError::UnsupportedStyle { .. })
        ));
    }

    #[test]
    fn renders_buffered_images() {
        let mut renderer = ImageRenderer::new(test_gallery(), Style::Untouched).unwrap();
        renderer.load("dot").load("dash");
        assert_eq!(renderer.art().unwrap().to_string(), "*-");
        renderer.set("dot");
        assert_eq!(renderer.art().unwrap().to_string(), "*");
    }
}
