use image::RgbImage;

use crate::core::color::RgbColor;
use crate::core::grid::Row;
use crate::error::{LoreError, Result};

/// Fill for cells missing from short rows.
pub const BACKGROUND: RgbColor = RgbColor(26, 26, 46);

/// Flat, rectangular grid of decoded cell colors.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    /// Rows that were shorter than `width` and got padded.
    pub padded_rows: usize,
    pixels: Vec<RgbColor>,
}

impl PixelGrid {
    pub fn get(&self, x: usize, y: usize) -> RgbColor {
        self.pixels[y * self.width + x]
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.get(x as usize, y as usize).into()
        })
    }
}

/// Expands rows into a rectangular grid as wide as the longest row.
///
/// Short rows are padded with [`BACKGROUND`] and reported as a warning.
pub fn expand(rows: &[Row]) -> Result<PixelGrid> {
    let width = rows.iter().map(Row::width).max().unwrap_or(0);
    if width == 0 {
        return Err(LoreError::Parse("lore contains no pixels".to_string()));
    }

    let height = rows.len();
    let mut pixels = Vec::with_capacity(width * height);
    let mut ragged = 0;

    for row in rows {
        let before = pixels.len();
        pixels.extend(row.pixels());
        let filled = pixels.len() - before;
        if filled < width {
            ragged += 1;
            pixels.resize(before + width, BACKGROUND);
        }
    }

    if ragged > 0 {
        log::warn!("{} of {} rows shorter than {} cells, padded", ragged, height, width);
    }

    Ok(PixelGrid { width, height, padded_rows: ragged, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::Encoder;
    use crate::core::grid::{Dimensions, Grid};
    use crate::core::serializer::{grid_to_lines, wrap_lines};
    use crate::decoder::extractor::extract_row_blocks;
    use crate::decoder::parser::parse_rows;
    use image::Rgb;

    #[test]
    fn test_ragged_rows_are_padded() {
        let mut long = Row::new();
        long.push(RgbColor::WHITE, 3);
        let mut short = Row::new();
        short.push(RgbColor::BLACK, 1);

        let grid = expand(&[long, short]).unwrap();
        assert_eq!((grid.width, grid.height), (3, 2));
        assert_eq!(grid.padded_rows, 1);
        assert_eq!(grid.get(0, 1), RgbColor::BLACK);
        assert_eq!(grid.get(1, 1), BACKGROUND);
        assert_eq!(grid.get(2, 1), BACKGROUND);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(expand(&[]).is_err());
        assert!(expand(&[Row::new(), Row::new()]).is_err());
    }

    #[test]
    fn test_decode_inverts_encode() {
        let source = RgbImage::from_fn(12, 5, |x, y| {
            let band = ((x / 3) + y) % 3;
            Rgb([band as u8 * 100, 40, 255 - band as u8 * 80])
        });
        let grid = Encoder::encode_pixels(&source).unwrap();

        let doc = wrap_lines(&grid_to_lines(&grid).unwrap());
        let rows = parse_rows(&extract_row_blocks(&doc)).unwrap();
        let expanded = expand(&rows).unwrap();
        assert_eq!(expanded.padded_rows, 0);
        let reencoded = Encoder::encode_pixels(&expanded.to_image()).unwrap();

        assert_eq!(reencoded, grid);
        assert_eq!(
            reencoded,
            Grid { dimensions: Dimensions::new(12, 5).unwrap(), rows }
        );
    }
}
