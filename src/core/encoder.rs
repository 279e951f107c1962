use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use super::color::RgbColor;
use super::grid::{Dimensions, Grid, Row, Run};
use crate::error::{LoreError, Result};

/// Turns raster images into run-length encoded grids.
pub struct Encoder {
    pub dimensions: Dimensions,
}

impl Encoder {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    pub fn encode_path(&self, path: &Path) -> Result<Grid> {
        let img = image::open(path).map_err(|source| LoreError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("decoded {:?}: {}x{} {:?}", path, img.width(), img.height(), img.color());
        self.encode_image(&img)
    }

    /// Drops alpha (no compositing), resamples with Lanczos3, then encodes.
    pub fn encode_image(&self, img: &DynamicImage) -> Result<Grid> {
        let rgb = img.to_rgb8();
        let (w, h) = (self.dimensions.width(), self.dimensions.height());
        let resized = imageops::resize(&rgb, w, h, FilterType::Lanczos3);
        Self::encode_pixels(&resized)
    }

    /// Encodes an image at its own size, one row per pixel row.
    pub fn encode_pixels(img: &RgbImage) -> Result<Grid> {
        let dimensions = Dimensions::new(img.width(), img.height())?;
        let rows = img
            .rows()
            .map(|row| encode_row(row.map(|p| RgbColor::from(*p))))
            .collect();
        Ok(Grid { dimensions, rows })
    }
}

/// Greedy single-pass run-length encoding of one row.
pub fn encode_row<I>(pixels: I) -> Row
where
    I: IntoIterator<Item = RgbColor>,
{
    let mut runs = Vec::new();
    let mut current: Option<RgbColor> = None;
    let mut count = 0;

    for color in pixels {
        if current != Some(color) {
            if let Some(open) = current {
                runs.push(Run { color: open, length: count });
            }
            current = Some(color);
            count = 1;
        } else {
            count += 1;
        }
    }

    if let Some(open) = current {
        runs.push(Run { color: open, length: count });
    }

    Row::from(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x / 4) % 2 * 200) as u8])
        }))
    }

    #[test]
    fn test_row_lengths_sum_to_width() {
        let source = gradient(300, 200);
        for width in [1, 75, 256] {
            let encoder = Encoder::new(Dimensions::new(width, 16).unwrap());
            let grid = encoder.encode_image(&source).unwrap();
            assert_eq!(grid.rows.len(), 16);
            for row in &grid.rows {
                assert_eq!(row.width(), width as usize);
            }
        }
    }

    #[test]
    fn test_runs_are_maximal() {
        let grid = Encoder::new(Dimensions::default()).encode_image(&gradient(120, 90)).unwrap();
        for row in &grid.rows {
            for pair in row.runs().windows(2) {
                assert_ne!(pair[0].color, pair[1].color);
            }
            assert!(row.runs().iter().all(|r| r.length >= 1));
        }
    }

    #[test]
    fn test_uniform_black_row() {
        let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 1, Rgb([0, 0, 0])));
        let grid = Encoder::new(Dimensions::new(10, 1).unwrap()).encode_image(&black).unwrap();
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].runs(), &[Run { color: RgbColor::BLACK, length: 10 }]);
        assert_eq!(grid.rows[0].runs()[0].color.to_string(), "#000000");
    }

    #[test]
    fn test_alternating_row() {
        let img = RgbImage::from_fn(4, 1, |x, _| {
            if x % 2 == 0 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
        });
        let grid = Encoder::encode_pixels(&img).unwrap();
        let colors: Vec<String> = grid.rows[0].runs().iter().map(|r| r.color.to_string()).collect();
        assert_eq!(colors, ["#FFFFFF", "#000000", "#FFFFFF", "#000000"]);
        assert!(grid.rows[0].runs().iter().all(|r| r.length == 1));
    }

    #[test]
    fn test_seventy_five_distinct_colors() {
        let img = RgbImage::from_fn(75, 1, |x, _| Rgb([x as u8, 0, 0]));
        let grid = Encoder::encode_pixels(&img).unwrap();
        assert_eq!(grid.rows[0].runs().len(), 75);
    }

    #[test]
    fn test_alpha_is_dropped_not_composited() {
        let transparent_red = RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 0]));
        let grid = Encoder::new(Dimensions::new(3, 2).unwrap())
            .encode_image(&DynamicImage::ImageRgba8(transparent_red))
            .unwrap();
        for row in &grid.rows {
            assert_eq!(row.runs(), &[Run { color: RgbColor(255, 0, 0), length: 3 }]);
        }
    }

    #[test]
    fn test_empty_image_rejected() {
        let empty = RgbImage::new(0, 5);
        assert!(matches!(Encoder::encode_pixels(&empty), Err(LoreError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let path = std::env::temp_dir().join("lore_art_definitely_missing.png");
        let err = Encoder::new(Dimensions::default()).encode_path(&path).unwrap_err();
        assert!(matches!(err, LoreError::Resource { .. }));
    }
}
