// src/main.rs

//! Command-line renderer: loads a JSON font and prints argv text as
//! ASCII art.

use anyhow::{bail, Context, Result};
use log::info;

use textart::font::Font;
use textart::post;
use textart::render::TextRenderer;
use textart::style::Style;

const USAGE: &str = "usage: textart [--style untouched|kerning[:N]|smushed] [--frame HV] <font.json> <text>...";

fn parse_style(value: &str) -> Result<Style> {
    match value {
        "untouched" => Ok(Style::Untouched),
        "smushed" => Ok(Style::Smushed),
        "kerning" => Ok(Style::Kerning { space: 1 }),
        _ => {
            if let Some(space) = value.strip_prefix("kerning:") {
                let space = space
                    .parse()
                    .with_context(|| format!("bad kerning space {space:?}"))?;
                Ok(Style::Kerning { space })
            } else {
                bail!("unknown style {value:?}");
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut style = Style::Smushed;
    let mut frame: Option<(char, char)> = None;
    let mut font_path: Option<String> = None;
    let mut words: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--style" {
            let value = args.next().context("--style needs a value")?;
            style = parse_style(&value)?;
        } else if arg == "--frame" {
            let value = args.next().context("--frame needs a value, e.g. =#")?;
            let mut chars = value.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(horizontal), Some(vertical), None) => {
                    frame = Some((horizontal, vertical));
                }
                _ => bail!("--frame takes exactly two characters, e.g. =#"),
            }
        } else if arg == "--help" || arg == "-h" {
            println!("{USAGE}");
            return Ok(());
        } else if font_path.is_none() {
            font_path = Some(arg);
        } else {
            words.push(arg);
        }
    }

    let Some(font_path) = font_path else {
        bail!("{USAGE}");
    };
    if words.is_empty() {
        bail!("{USAGE}");
    }

    let font = Font::load(&font_path).with_context(|| format!("loading font {font_path}"))?;
    let mut renderer = TextRenderer::new(font, style).context("binding style to font")?;
    renderer.push_str(&words.join(" "));

    let mut art = renderer.art().context("rendering text")?;
    if let Some((horizontal, vertical)) = frame {
        art = post::frame(&art, horizontal, vertical);
    }
    info!("rendered {} rows", art.height());

    println!("{art}");
    Ok(())
}
