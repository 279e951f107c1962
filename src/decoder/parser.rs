use serde::Deserialize;

use crate::core::color::RgbColor;
use crate::core::grid::Row;
use crate::core::serializer::LoreSegment;
use crate::error::Result;

/// Read side of a lore line. Only `extra` matters for drawing, so the
/// `italic` and `text` keys are left unread and may hold any JSON value.
#[derive(Deserialize)]
struct LoreLineIn {
    #[serde(default)]
    extra: Vec<LoreSegment>,
}

/// Parses one lore line into a row.
///
/// The run length is the character count of each segment's text; the
/// glyph itself is not checked. Empty segments contribute nothing.
pub fn parse_row(json: &str) -> Result<Row> {
    let line: LoreLineIn = serde_json::from_str(json)?;
    let mut row = Row::new();

    for segment in &line.extra {
        let color: RgbColor = segment.color.parse()?;
        let length = segment.text.chars().count();
        if length == 0 {
            log::warn!("skipping empty segment with color {}", segment.color);
            continue;
        }
        row.push(color, length);
    }

    Ok(row)
}

pub fn parse_rows<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Row>> {
    lines.iter().map(|l| parse_row(l.as_ref())).collect()
}
