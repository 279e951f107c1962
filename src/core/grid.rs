use super::color::RgbColor;
use crate::error::{LoreError, Result};

pub const DEFAULT_WIDTH: u32 = 75;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Target grid size. Both sides are always positive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LoreError::InvalidArgument(format!(
                "grid dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

/// A horizontal stretch of same-colored pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Run {
    pub color: RgbColor,
    pub length: usize,
}

/// One image row as left-to-right runs.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Row {
    runs: Vec<Run>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `length` pixels of `color`, extending the last run when the
    /// color matches so runs stay maximal. Zero-length pushes are ignored.
    pub fn push(&mut self, color: RgbColor, length: usize) {
        if length == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.color == color => last.length += length,
            _ => self.runs.push(Run { color, length }),
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Pixel count covered by this row.
    pub fn width(&self) -> usize {
        self.runs.iter().map(|r| r.length).sum()
    }

    /// Expands the runs back into one color per pixel.
    pub fn pixels(&self) -> impl Iterator<Item = RgbColor> + '_ {
        self.runs
            .iter()
            .flat_map(|run| std::iter::repeat(run.color).take(run.length))
    }
}

impl From<Vec<Run>> for Row {
    fn from(runs: Vec<Run>) -> Self {
        Self { runs }
    }
}

/// Encoded image: one `Row` per pixel row, top to bottom.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub dimensions: Dimensions,
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn run_count(&self) -> usize {
        self.rows.iter().map(|r| r.runs().len()).sum()
    }
}
