mod core;
mod decoder;
mod error;
mod logging;
mod renderer;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::renderer::{Bounds, PreviewOptions};

/// Converts an image into Minecraft lore text made of colored block glyphs.
///
/// Run without a subcommand to convert the first image in the current
/// directory.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a lore file back into colored blocks
    Preview {
        file: PathBuf,
        #[arg(long, help = "Bitmap width bound in display units (default: fit terminal, at most 900)")]
        max_width: Option<u32>,
        #[arg(long, help = "Bitmap height bound in display units (default: fit terminal, at most 700)")]
        max_height: Option<u32>,
        #[arg(short, long, help = "Also save the rendered bitmap to this image file")]
        save: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Do not open the viewport")]
        no_window: bool,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            if !ui::interactive::run_interactive_mode()? {
                eprintln!("No image files found in current directory!");
                std::process::exit(1);
            }
        }
        Some(Commands::Preview { file, max_width, max_height, save, no_window }) => {
            let options = PreviewOptions {
                bounds: preview_bounds(max_width, max_height)?,
                save,
                show_window: !no_window,
            };
            renderer::preview_file(&file, &options)
                .with_context(|| format!("cannot preview {}", file.display()))?;
        }
    }

    Ok(())
}

/// Either bound given alone falls back to the default for the other axis.
fn preview_bounds(max_width: Option<u32>, max_height: Option<u32>) -> Result<Option<Bounds>> {
    if max_width.is_none() && max_height.is_none() {
        return Ok(None);
    }

    let defaults = Bounds::default();
    let bounds = Bounds {
        max_width: max_width.unwrap_or(defaults.max_width),
        max_height: max_height.unwrap_or(defaults.max_height),
    };
    if bounds.max_width == 0 || bounds.max_height == 0 {
        anyhow::bail!("preview bounds must be positive");
    }
    Ok(Some(bounds))
}
