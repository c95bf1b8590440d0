//! Console summary of a search response.
//!
//! Walks the first anime depth first and stops at the first collection that
//! is missing or empty. Images and themes are independent branches.

use crate::models::anime::{AnimeSummary, SearchResponse, Theme};
use serde_json::Value;
use std::io::{self, Write};

const NO_LINK: &str = "No link";
const UNKNOWN_THEME: &str = "Unknown";
const MAIN_VERSION: &str = "Main";
const NONE: &str = "None";

/// Renders a scalar the way it should read on the console.
///
/// A missing key prints `placeholder`. A key holding `null` prints `None`,
/// strings print bare, booleans print `True`/`False`, and anything else
/// prints as compact JSON.
#[must_use]
pub fn display_value(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        None => placeholder.to_string(),
        Some(Value::Null) => NONE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn write_summary<W: Write>(out: &mut W, response: &SearchResponse<'_>) -> io::Result<()> {
    let Some(anime) = response.anime() else {
        writeln!(out, "No anime entries found in the response")?;
        return Ok(());
    };

    writeln!(out, "Found {} anime entries", anime.len())?;

    if let Some(first) = response.first_anime() {
        write_anime(out, first)?;
    }

    Ok(())
}

fn write_anime<W: Write>(out: &mut W, anime: AnimeSummary<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "First anime details:")?;
    writeln!(out, "ID: {}", display_value(anime.id(), NONE))?;
    writeln!(out, "Name: {}", display_value(anime.name(), NONE))?;
    writeln!(
        out,
        "Media Format: {}",
        display_value(anime.media_format(), NONE)
    )?;

    let images: Vec<_> = anime.images().collect();
    if !images.is_empty() {
        writeln!(out, "Has {} images", images.len())?;
        for (i, image) in images.iter().enumerate() {
            writeln!(
                out,
                "  Image {}: {}",
                i + 1,
                display_value(image.link(), NO_LINK)
            )?;
        }
    }

    if let Some(first) = anime.first_theme() {
        writeln!(out, "Has {} themes", anime.theme_count())?;
        write_theme(out, first)?;
    }

    Ok(())
}

fn write_theme<W: Write>(out: &mut W, theme: Theme<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "First theme: {}",
        display_value(theme.name(), UNKNOWN_THEME)
    )?;

    let Some(entry) = theme.first_entry() else {
        return Ok(());
    };
    writeln!(out, "  Has {} entries", theme.entry_count())?;
    writeln!(
        out,
        "  First entry: {}",
        display_value(entry.version(), MAIN_VERSION)
    )?;

    let Some(video) = entry.first_video() else {
        return Ok(());
    };
    writeln!(out, "    Has {} videos", entry.video_count())?;
    writeln!(
        out,
        "    First video: {}",
        display_value(video.link(), NO_LINK)
    )?;

    if let Some(audio) = video.audio() {
        writeln!(
            out,
            "      Has audio: {}",
            display_value(audio.link(), NO_LINK)
        )?;
    }

    Ok(())
}
