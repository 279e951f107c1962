use std::path::{Path, PathBuf};

use super::encoder::Encoder;
use super::serializer;
use super::source::ImageRequest;
use crate::error::Result;

/// Outcome of a conversion, for the status lines.
#[derive(Debug)]
pub struct Conversion {
    pub output_path: PathBuf,
    pub lines: Vec<String>,
    pub run_count: usize,
}

/// Encodes the requested image and writes `<stem>_lore.txt` into `output_dir`.
pub fn convert(request: &ImageRequest, output_dir: &Path) -> Result<Conversion> {
    let encoder = Encoder::new(request.dimensions);
    let grid = encoder.encode_path(&request.path)?;
    let lines = serializer::grid_to_lines(&grid)?;
    let output_path = serializer::output_path_for(&request.path, output_dir);

    serializer::write_lore_file(&output_path, &lines)?;
    log::info!(
        "wrote {} rows, {} runs to {:?}",
        lines.len(),
        grid.run_count(),
        output_path
    );

    Ok(Conversion { output_path, lines, run_count: grid.run_count() })
}
