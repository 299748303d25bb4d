// src/bin/fontcvt.rs

//! Offline converter from the FIGlet `.flf` font format to the JSON font
//! document.
//!
//! Reads the `flf2a` header (hard-blank, height, comment-line count), skips
//! the comment block, decodes the 95 printable-ASCII glyphs (rows terminated
//! by `@`, the last row of each glyph by `@@`), right-pads every glyph to
//! its widest row, and writes the result through the same serde structures
//! the font loader reads. The shrink level is not part of the legacy format;
//! it is supplied with `--shrink` (default 2).

use std::collections::BTreeMap;
use std::fs;

use anyhow::{bail, ensure, Context, Result};
use log::info;

use textart::config::{Config, Shrink};
use textart::font::Font;
use textart::grid::Grid;

const USAGE: &str = "usage: fontcvt [--shrink 0|1|2] <input.flf> <output.json>";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut shrink = Shrink::Level2;
    let mut paths: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--shrink" {
            let value: u8 = args
                .next()
                .context("--shrink needs a value")?
                .parse()
                .context("--shrink takes a number")?;
            shrink = Shrink::try_from(value).map_err(anyhow::Error::msg)?;
        } else if arg == "--help" || arg == "-h" {
            println!("{USAGE}");
            return Ok(());
        } else {
            paths.push(arg);
        }
    }
    let [input, output] = paths.as_slice() else {
        bail!("{USAGE}");
    };

    let text = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let font = convert(&text, shrink).with_context(|| format!("converting {input}"))?;
    fs::write(output, font.to_json_string()?).with_context(|| format!("writing {output}"))?;
    info!("converted {input} to {output}");
    Ok(())
}

fn convert(text: &str, shrink: Shrink) -> Result<Font> {
    let mut lines = text.lines();
    let header = lines.next().context("empty font file")?;
    let (hard_blank, height, comment_lines) = parse_header(header)?;
    for _ in 0..comment_lines {
        lines.next();
    }

    let mut letters = BTreeMap::new();
    for ch in ' '..='~' {
        letters.insert(ch, next_glyph(&mut lines, height, ch)?);
    }
    Ok(Font::new(Config::new(hard_blank, height, shrink), letters))
}

/// Decodes `flf2a<hard-blank> <height> <baseline> <max-length> <old-layout>
/// <comment-lines> ...`; only the hard-blank, height, and comment count are
/// carried over.
fn parse_header(header: &str) -> Result<(char, usize, usize)> {
    let mut fields = header.split_whitespace();
    let signature = fields.next().context("missing signature")?;
    ensure!(
        signature.starts_with("flf2a"),
        "not a FIGlet font: signature {signature:?}"
    );
    let hard_blank = signature
        .chars()
        .nth(5)
        .context("missing hard-blank in signature")?;
    let height = fields
        .next()
        .context("missing height")?
        .parse()
        .context("bad height")?;
    let _baseline = fields.next().context("missing baseline")?;
    let _max_length = fields.next().context("missing max length")?;
    let _old_layout = fields.next().context("missing old layout")?;
    let comment_lines = fields
        .next()
        .context("missing comment line count")?
        .parse()
        .context("bad comment line count")?;
    Ok((hard_blank, height, comment_lines))
}

/// Reads one glyph: `height` lines ending in `@`, the last ending in `@@`.
/// Lines without a terminator are skipped. Rows are right-padded to the
/// glyph's widest row.
fn next_glyph<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    height: usize,
    ch: char,
) -> Result<Grid> {
    let mut rows: Vec<String> = Vec::with_capacity(height);
    while rows.len() < height {
        let line = lines
            .next()
            .with_context(|| format!("font ended inside glyph {ch:?}"))?;
        let Some(end) = line.rfind('@') else {
            continue;
        };
        let mut row = line[..end].to_string();
        if rows.len() + 1 == height {
            row.pop();
        }
        rows.push(row);
    }

    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    for row in &mut rows {
        let padding = width - row.chars().count();
        row.extend(std::iter::repeat(' ').take(padding));
    }
    Ok(Grid::from(rows))
}
