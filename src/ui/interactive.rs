use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::{Path, PathBuf};

use crate::core::converter;
use crate::core::grid::{Dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::source::{self, ImageRequest, ImageSource};
use crate::error::{self, LoreError};
use crate::renderer::{self, PreviewOptions};

/// Picks the first image in a directory and asks for the grid size.
pub struct InteractiveSource {
    dir: PathBuf,
}

impl InteractiveSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSource for InteractiveSource {
    fn request(&mut self) -> error::Result<Option<ImageRequest>> {
        let Some(path) = source::find_first_image(&self.dir)? else {
            return Ok(None);
        };
        println!("Using image: {}", display_name(&path));

        let width = prompt_dimension("Enter width", DEFAULT_WIDTH)?;
        let height = prompt_dimension("Enter height", DEFAULT_HEIGHT)?;
        let dimensions = Dimensions::new(width, height)?;

        Ok(Some(ImageRequest { path, dimensions }))
    }
}

fn prompt_dimension(label: &str, default: u32) -> error::Result<u32> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (default {})", label, default))
        .allow_empty(true)
        .interact_text()?;

    parse_dimension(&answer, default)
}

/// Blank means `default`; anything else must be a positive integer.
pub fn parse_dimension(input: &str, default: u32) -> Result<u32, LoreError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let value: i64 = input
        .parse()
        .map_err(|_| LoreError::InvalidArgument(format!("{:?} is not a whole number", input)))?;

    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(LoreError::InvalidArgument(format!("dimension must be positive, got {}", value))),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Scan, prompt, convert, and optionally preview the result.
///
/// Returns `false` when no image was found.
pub fn run_interactive_mode() -> Result<bool> {
    let cwd = std::env::current_dir().context("cannot resolve working directory")?;
    let mut image_source = InteractiveSource::new(&cwd);

    let Some(request) = image_source
        .request()
        .with_context(|| format!("cannot pick an image in {}", cwd.display()))?
    else {
        return Ok(false);
    };

    println!("Converting image: {}", request.path.display());
    let conversion = converter::convert(&request, &cwd)
        .with_context(|| format!("failed to convert {}", request.path.display()))?;

    println!("Generated {} lines of lore ({} color runs)", conversion.lines.len(), conversion.run_count);
    println!("\nSuccessfully created {}", display_name(&conversion.output_path));
    println!("File saved at: {}", conversion.output_path.display());
    println!("\nYou can copy this lore data and use it in your Minecraft item components");

    let preview = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Preview the result now?")
        .default(false)
        .interact()?;

    if preview {
        let options = PreviewOptions { show_window: true, ..PreviewOptions::default() };
        renderer::preview_lines(&conversion.lines, &options)?;
    }

    Ok(true)
}
