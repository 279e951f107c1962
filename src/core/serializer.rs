use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::color::RgbColor;
use super::grid::{Grid, Row};
use crate::error::Result;

/// One pixel per glyph.
pub const BLOCK_GLYPH: char = '█';
pub const LORE_KEY: &str = "minecraft:lore";

fn default_segment_color() -> String {
    RgbColor::WHITE.to_string()
}

/// A `{color, text}` entry of a lore line's `extra` list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoreSegment {
    #[serde(default = "default_segment_color")]
    pub color: String,
    #[serde(default)]
    pub text: String,
}

/// One lore line as written. Field order is the serialized key order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LoreLine {
    pub extra: Vec<LoreSegment>,
    pub italic: bool,
    pub text: String,
}

impl From<&Row> for LoreLine {
    fn from(row: &Row) -> Self {
        let extra = row
            .runs()
            .iter()
            .map(|run| LoreSegment {
                color: run.color.to_string(),
                text: std::iter::repeat(BLOCK_GLYPH).take(run.length).collect(),
            })
            .collect();
        Self { extra, italic: false, text: String::new() }
    }
}

/// Compact JSON for a single row.
pub fn row_to_json(row: &Row) -> Result<String> {
    Ok(serde_json::to_string(&LoreLine::from(row))?)
}

pub fn grid_to_lines(grid: &Grid) -> Result<Vec<String>> {
    grid.rows.iter().map(row_to_json).collect()
}

/// Wraps lines as `{"minecraft:lore":['<line>',...]}`.
///
/// The single quotes around double-quoted JSON are what the game client
/// expects in item component text; they are not JSON string literals.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let quoted: Vec<String> = lines.iter().map(|l| format!("'{}'", l.as_ref())).collect();
    format!("{{\"{}\":[{}]}}", LORE_KEY, quoted.join(","))
}

/// `<stem>_lore.txt` inside `dir`.
pub fn output_path_for(image_path: &Path, dir: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    dir.join(format!("{}_lore.txt", stem))
}

/// Writes the whole document in one call; nothing is written if
/// serialization fails.
pub fn write_lore_file(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, wrap_lines(lines))?;
    Ok(())
}
