pub mod cell;
pub mod raster;
pub mod viewport;

use std::path::{Path, PathBuf};

pub use raster::Bounds;
pub use viewport::TerminalViewport;

use crate::decoder;
use crate::error::Result;

/// How a preview is produced and where it goes.
#[derive(Clone, Debug, Default)]
pub struct PreviewOptions {
    /// Explicit bitmap bound; the terminal size is used when absent.
    pub bounds: Option<Bounds>,
    /// Also write the rendered bitmap as an image file.
    pub save: Option<PathBuf>,
    pub show_window: bool,
}

/// Previews serialized lore lines already in memory.
pub fn preview_lines<S: AsRef<str>>(lines: &[S], options: &PreviewOptions) -> Result<()> {
    let rows = decoder::parse_rows(lines)?;
    let grid = decoder::expand(&rows)?;

    let bounds = match options.bounds {
        Some(b) => b,
        None if options.show_window => viewport::terminal_bounds()?,
        None => Bounds::default(),
    };
    let size = raster::pixel_size(grid.width, grid.height, bounds);
    log::debug!("preview grid {}x{} in {:?}: {}px cells", grid.width, grid.height, bounds, size);

    let preview = raster::rasterize(&grid, size);

    if let Some(path) = &options.save {
        preview.bitmap.save(path)?;
        log::info!("saved preview bitmap to {:?}", path);
    }

    if options.show_window {
        TerminalViewport::open(preview)?.run()?;
    }

    Ok(())
}

/// Previews a lore file on disk.
pub fn preview_file(path: &Path, options: &PreviewOptions) -> Result<()> {
    let lines = decoder::load_lore_file(path)?;
    preview_lines(&lines, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_preview_file_saves_bitmap() {
        let dir = std::env::temp_dir().join(format!("lore_art_preview_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let lore = dir.join("tiny_lore.txt");
        fs::write(
            &lore,
            r##"{"minecraft:lore":['{"extra":[{"color":"#FF0000","text":"██"}],"italic":false,"text":""}','{"extra":[{"color":"#00FF00","text":"█"},{"color":"#0000FF","text":"█"}],"italic":false,"text":""}']}"##,
        )
        .unwrap();

        let out = dir.join("preview.png");
        let options = PreviewOptions {
            bounds: Some(Bounds { max_width: 20, max_height: 20 }),
            save: Some(out.clone()),
            show_window: false,
        };
        preview_file(&lore, &options).unwrap();

        let saved = image::open(&out).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (20, 20));
        // cell interior, away from grid lines
        assert_eq!(saved.get_pixel(5, 5).0, [255, 0, 0]);
        assert_eq!(saved.get_pixel(15, 15).0, [0, 0, 255]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_preview_rejects_file_without_rows() {
        let path = std::env::temp_dir().join(format!("lore_art_norows_{}.txt", std::process::id()));
        fs::write(&path, "{\"minecraft:lore\":[]}").unwrap();

        assert!(preview_file(&path, &PreviewOptions::default()).is_err());

        fs::remove_file(&path).unwrap();
    }
}
