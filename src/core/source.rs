use std::fs;
use std::path::{Path, PathBuf};

use super::grid::Dimensions;
use crate::error::Result;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// What the encoder needs to run: one image and the target grid size.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub path: PathBuf,
    pub dimensions: Dimensions,
}

/// Supplies the image to convert. `Ok(None)` means nothing was found.
pub trait ImageSource {
    fn request(&mut self) -> Result<Option<ImageRequest>>;
}

pub fn is_image_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// First image file in `dir`, by file name.
pub fn find_first_image(dir: &Path) -> Result<Option<PathBuf>> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image_file(path))
        .collect();

    images.sort();
    Ok(images.into_iter().next())
}
