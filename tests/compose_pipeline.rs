//! End-to-end pipelines: JSON documents through the renderers, composition
//! styles, and post-processing.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use pretty_assertions::assert_eq;

use textart::config::{Config, Shrink};
use textart::font::Font;
use textart::gallery::Gallery;
use textart::grid::Grid;
use textart::post;
use textart::render::{ImageRenderer, RenderError, TextRenderer};
use textart::style::{Style, StyleError};

fn grid(rows: &[&str]) -> Grid {
    rows.iter().collect()
}

/// Height-6 font with a `$` hard-blank, untouched composition: rows
/// concatenate pairwise and every hard-blank renders as a space.
#[test_log::test]
fn untouched_text_end_to_end() {
    let letters: BTreeMap<char, Grid> = [
        (
            'A',
            grid(&["AAAA$ ", "A  A$ ", "AAAA$ ", "A  A$ ", "A  A$ ", "      "]),
        ),
        (
            'B',
            grid(&["BBB$", "B B$", "BB$ ", "B B$", "BBB$", "    "]),
        ),
    ]
    .into_iter()
    .collect();
    let font = Font::new(Config::new('$', 6, Shrink::Level2), letters);

    let mut renderer = TextRenderer::new(font, Style::Untouched).unwrap();
    write!(renderer, "AB").unwrap();
    let art = renderer.art().unwrap();

    assert_eq!(art.height(), 6);
    let expected = concat!(
        "AAAA  BBB \n",
        "A  A  B B \n",
        "AAAA  BB  \n",
        "A  A  B B \n",
        "A  A  BBB \n",
        "          ",
    );
    assert_eq!(art.to_string(), expected);
}

const KERNING_FONT: &str = r#"{
    "font_config": { "HardBlank": "$", "Height": 2, "Shrink": 2 },
    "font_letter": {
        "a": ["aa ", "aa "],
        "b": ["bb", "bb"],
        "c": ["cc   ", "cc   "],
        "d": ["dd", "dd"]
    }
}"#;

/// The configured gap holds whether the natural gap is below, at, or above
/// it.
#[test_log::test]
fn kerning_gap_is_exact_for_any_natural_gap() {
    let font = Font::from_json_str(KERNING_FONT).unwrap();
    let mut renderer = TextRenderer::new(font, Style::Kerning { space: 1 }).unwrap();

    // natural gap 1 (equal to target)
    renderer.set_text("ab");
    assert_eq!(renderer.art().unwrap().to_string(), " aa bb\n aa bb");

    // natural gap 3 (trimmed)
    renderer.set_text("cb");
    assert_eq!(renderer.art().unwrap().to_string(), " cc bb\n cc bb");

    // natural gap 0 (padded)
    renderer.set_text("db");
    assert_eq!(renderer.art().unwrap().to_string(), " dd bb\n dd bb");
}

#[test_log::test]
fn smushed_text_merges_boundary_columns() {
    let letters: BTreeMap<char, Grid> = [
        ('w', grid(&["a/", "a/"])),
        ('m', grid(&["\\b", "\\b"])),
    ]
    .into_iter()
    .collect();
    let font = Font::new(Config::new('$', 2, Shrink::Level2), letters);

    let mut renderer = TextRenderer::new(font, Style::Smushed).unwrap();
    renderer.push_str("wm");
    assert_eq!(renderer.art().unwrap().to_string(), "a|b\na|b");
}

const GALLERY: &str = r##"{
    "gallery_config": { "HardBlank": "#", "Height": 2, "Shrink": 1 },
    "gallery_image": {
        "dot": ["**", "**"]
    }
}"##;

/// The original stacking workflow: render an image and a line of text,
/// join them side by side, and frame the result.
#[test_log::test]
fn gallery_and_text_compose_into_a_framed_banner() {
    let gallery = Gallery::from_json_str(GALLERY).unwrap();
    let mut images = ImageRenderer::new(gallery, Style::Kerning { space: 1 }).unwrap();
    images.load("dot");
    let image_art = images.art().unwrap();
    assert_eq!(image_art.to_string(), " **\n **");

    let text_art = grid(&["aa"]);
    let joined = post::append_right(&image_art, &text_art, 1).unwrap();
    assert_eq!(joined.to_string(), " ** aa\n **   ");

    let framed = post::frame(&joined, '=', '#');
    let expected = concat!(
        "==========\n",
        "#  ** aa #\n",
        "#  **    #\n",
        "==========",
    );
    assert_eq!(framed.to_string(), expected);
}

/// A glyph whose height disagrees with the config is rejected during
/// composition and nothing partial is produced.
#[test]
fn ragged_glyph_fails_with_height_mismatch() {
    let letters: BTreeMap<char, Grid> = [
        ('a', grid(&["aa", "aa"])),
        ('!', grid(&["!"])),
    ]
    .into_iter()
    .collect();
    let font = Font::new(Config::new('$', 2, Shrink::Level2), letters);

    let mut renderer = TextRenderer::new(font, Style::Untouched).unwrap();
    renderer.push_str("a!");
    assert!(matches!(
        renderer.art().unwrap_err(),
        RenderError::Style(StyleError::HeightMismatch {
            expected: 2,
            found: 1
        })
    ));
}

/// Binding a style above the source's shrink level fails before any
/// composition.
#[test]
fn shrink_level_gates_style_binding() {
    let font = Font::new(Config::new('$', 1, Shrink::Level0), BTreeMap::new());
    let err = TextRenderer::new(font, Style::Smushed).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Style(StyleError::UnsupportedStyle {
            required: Shrink::Level2,
            available: Shrink::Level0
        })
    ));
}

/// Stacking helpers keep widths consistent while growing the grid.
#[test]
fn padding_grows_height_without_changing_width() {
    let art = grid(&["abc", "def"]);
    let padded = post::pad_top(&post::pad_bottom(&art, 1), 2);
    assert_eq!(padded.height(), 6);
    assert_eq!(padded.width(), 3);
    assert_eq!(
        padded.to_string(),
        "   \n   \nabc\ndef\n   \n   "
    );
}
