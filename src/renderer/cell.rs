use image::RgbImage;

use crate::core::color::RgbColor;

pub const UPPER_HALF_BLOCK: char = '▀';

/// Represents a single character cell on the terminal
///
/// Covers two bitmap pixels stacked vertically: `top` is drawn as the
/// foreground of `▀`, `bottom` as its background.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CellData {
    pub top: RgbColor,
    pub bottom: RgbColor,
}

impl Default for CellData {
    fn default() -> Self {
        Self {
            top: RgbColor::BLACK,
            bottom: RgbColor::BLACK,
        }
    }
}

/// Terminal rows needed for a bitmap of `height` pixels.
pub fn rows_for(height: u32) -> u32 {
    (height + 1) / 2
}

/// Packs a bitmap into half-block cells, row-major, `width` cells per row.
/// An odd last pixel row gets `fill` as its bottom half.
pub fn cells_from_bitmap(bitmap: &RgbImage, fill: RgbColor) -> Vec<CellData> {
    let (width, height) = bitmap.dimensions();
    let get_color = |x: u32, y: u32| {
        if y < height {
            RgbColor::from(*bitmap.get_pixel(x, y))
        } else {
            fill
        }
    };

    (0..rows_for(height))
        .flat_map(|cy| (0..width).map(move |cx| (cx, cy)))
        .map(|(cx, cy)| CellData {
            top: get_color(cx, cy * 2),
            bottom: get_color(cx, cy * 2 + 1),
        })
        .collect()
}
