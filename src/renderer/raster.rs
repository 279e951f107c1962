use image::{Rgb, RgbImage};

use crate::decoder::PixelGrid;

pub const GRID_LINE_COLOR: Rgb<u8> = Rgb([26, 26, 26]);
/// Smallest cell size that gets grid lines.
pub const GRID_LINE_MIN_CELL: u32 = 3;

/// Upper bound for the rendered bitmap, in display units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { max_width: 900, max_height: 700 }
    }
}

/// Integer cell size fitting `grid_w x grid_h` cells into `bounds`.
///
/// Floors each axis separately, keeps cells square by taking the smaller
/// one, and never goes below 1 even when the grid overflows.
pub fn pixel_size(grid_w: usize, grid_h: usize, bounds: Bounds) -> u32 {
    let per_axis = |max: u32, cells: usize| (max as usize / cells.max(1)) as u32;
    per_axis(bounds.max_width, grid_w)
        .min(per_axis(bounds.max_height, grid_h))
        .max(1)
}

/// A rasterized preview and the numbers shown in its caption.
pub struct Preview {
    pub bitmap: RgbImage,
    pub grid_width: usize,
    pub grid_height: usize,
    pub pixel_size: u32,
}

impl Preview {
    pub fn caption(&self) -> String {
        format!(
            "Size: {}x{} | Block: {}px | q or Esc to close",
            self.grid_width, self.grid_height, self.pixel_size
        )
    }
}

/// Blows each cell up to a `pixel_size` square, then draws grid lines
/// when cells are big enough to tell apart.
pub fn rasterize(grid: &PixelGrid, pixel_size: u32) -> Preview {
    let ps = pixel_size.max(1);
    let mut bitmap = RgbImage::from_fn(grid.width as u32 * ps, grid.height as u32 * ps, |x, y| {
        grid.get((x / ps) as usize, (y / ps) as usize).into()
    });

    if ps >= GRID_LINE_MIN_CELL {
        draw_grid_lines(&mut bitmap, ps);
    }

    Preview {
        bitmap,
        grid_width: grid.width,
        grid_height: grid.height,
        pixel_size: ps,
    }
}

/// Lines at every cell boundary. The closing right and bottom borders
/// land on the last pixel column/row so they stay inside the bitmap.
fn draw_grid_lines(bitmap: &mut RgbImage, ps: u32) {
    let (w, h) = bitmap.dimensions();
    let boundaries = |extent: u32| (0..=extent).step_by(ps as usize).map(move |v| v.min(extent - 1));

    for x in boundaries(w) {
        for y in 0..h {
            bitmap.put_pixel(x, y, GRID_LINE_COLOR);
        }
    }
    for y in boundaries(h) {
        for x in 0..w {
            bitmap.put_pixel(x, y, GRID_LINE_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::RgbColor;
    use crate::core::grid::Row;
    use crate::decoder::expand;

    fn solid(width: usize, height: usize, color: RgbColor) -> PixelGrid {
        let rows: Vec<Row> = (0..height)
            .map(|_| {
                let mut r = Row::new();
                r.push(color, width);
                r
            })
            .collect();
        expand(&rows).unwrap()
    }

    #[test]
    fn test_pixel_size_floor_and_clamp() {
        let wide = Bounds { max_width: 900, max_height: 900 };
        assert_eq!(pixel_size(900, 1, wide), 1);
        assert_eq!(pixel_size(300, 1, wide), 3);
        assert_eq!(pixel_size(2000, 1, wide), 1);
        assert_eq!(pixel_size(75, 64, Bounds::default()), 10);
    }

    #[test]
    fn test_nearest_upscale_without_lines() {
        let grid = solid(2, 1, RgbColor(10, 20, 30));
        let preview = rasterize(&grid, 2);
        assert_eq!(preview.bitmap.dimensions(), (4, 2));
        assert!(preview.bitmap.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn test_grid_lines_on_every_boundary() {
        let grid = solid(2, 2, RgbColor::WHITE);
        let preview = rasterize(&grid, 4);
        let bmp = &preview.bitmap;
        assert_eq!(bmp.dimensions(), (8, 8));

        for v in [0, 4, 7] {
            assert_eq!(*bmp.get_pixel(v, 2), GRID_LINE_COLOR);
            assert_eq!(*bmp.get_pixel(2, v), GRID_LINE_COLOR);
        }
        assert_eq!(*bmp.get_pixel(2, 2), Rgb([255, 255, 255]));
        assert_eq!(*bmp.get_pixel(5, 6), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_caption() {
        let preview = rasterize(&solid(75, 64, RgbColor::BLACK), 10);
        assert_eq!(preview.caption(), "Size: 75x64 | Block: 10px | q or Esc to close");
    }
}
