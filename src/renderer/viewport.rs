use std::io::{Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};

use super::cell::{self, CellData, UPPER_HALF_BLOCK};
use super::raster::{Bounds, Preview};
use crate::core::color::RgbColor;
use crate::decoder::BACKGROUND;
use crate::error::Result;

/// Bitmap bounds that fit the current terminal, in half-block pixels,
/// capped at the default 900x700. Two rows are kept for the caption.
pub fn terminal_bounds() -> Result<Bounds> {
    let (cols, rows) = terminal::size()?;
    let cap = Bounds::default();
    Ok(Bounds {
        max_width: (cols as u32).clamp(1, cap.max_width),
        max_height: (rows.saturating_sub(2) as u32 * 2).clamp(1, cap.max_height),
    })
}

/// Full-screen terminal surface showing one preview.
///
/// Owns the preview bitmap until it is dropped; dropping restores the
/// terminal. The layout is fixed when opened: a terminal resize redraws
/// the same content, clipped, without rescaling.
pub struct TerminalViewport {
    stdout: Stdout,
    preview: Preview,
    cells: Vec<CellData>,
}

impl TerminalViewport {
    pub fn open(preview: Preview) -> Result<Self> {
        let cells = cell::cells_from_bitmap(&preview.bitmap, BACKGROUND);
        // Built first so a failed setup below still restores the terminal
        let mut viewport = Self { stdout: std::io::stdout(), preview, cells };

        terminal::enable_raw_mode()?;
        viewport.stdout.execute(EnterAlternateScreen)?;
        viewport.stdout.execute(cursor::Hide)?;
        // No line wrap at the right edge
        viewport.stdout.execute(Print("\x1b[?7l"))?;

        Ok(viewport)
    }

    /// Blocks until the user closes the viewport.
    pub fn run(mut self) -> Result<()> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => {}
                },
                Event::Resize(..) => self.draw()?,
                _ => {}
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let (term_cols, term_rows) = terminal::size()?;
        let caption = self.preview.caption();
        let layout = Layout::compute(
            self.preview.bitmap.width(),
            self.preview.bitmap.height(),
            caption.chars().count(),
            term_cols,
            term_rows,
        );

        self.stdout.queue(terminal::Clear(ClearType::All))?;

        let mut last_fg: Option<RgbColor> = None;
        let mut last_bg: Option<RgbColor> = None;

        for cy in 0..layout.visible_rows {
            self.stdout.queue(cursor::MoveTo(layout.offset_x, layout.offset_y + cy))?;
            let row_start = cy as usize * layout.stride;

            for cx in 0..layout.visible_cols {
                let data = self.cells[row_start + cx as usize];
                if last_fg != Some(data.top) {
                    self.stdout.queue(SetForegroundColor(to_term_color(data.top)))?;
                    last_fg = Some(data.top);
                }
                if last_bg != Some(data.bottom) {
                    self.stdout.queue(SetBackgroundColor(to_term_color(data.bottom)))?;
                    last_bg = Some(data.bottom);
                }
                self.stdout.queue(Print(UPPER_HALF_BLOCK))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(layout.caption_x, layout.caption_y))?;
        self.stdout.queue(Print(caption))?;
        self.stdout.flush()?;

        log::debug!(
            "viewport draw: term={}x{} bitmap={}x{} visible={}x{}",
            term_cols,
            term_rows,
            self.preview.bitmap.width(),
            self.preview.bitmap.height(),
            layout.visible_cols,
            layout.visible_rows
        );
        Ok(())
    }
}

impl Drop for TerminalViewport {
    fn drop(&mut self) {
        let _ = self.stdout.execute(ResetColor);
        let _ = self.stdout.execute(Print("\x1b[?7h"));
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn to_term_color(c: RgbColor) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// Where a bitmap lands on a terminal of a given size.
///
/// Content is centered and clipped on the right and bottom; `stride` is
/// the full cell row length of the bitmap, not the visible part.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Layout {
    offset_x: u16,
    offset_y: u16,
    visible_cols: u16,
    visible_rows: u16,
    stride: usize,
    caption_x: u16,
    caption_y: u16,
}

impl Layout {
    fn compute(
        bitmap_width: u32,
        bitmap_height: u32,
        caption_len: usize,
        term_cols: u16,
        term_rows: u16,
    ) -> Self {
        let content_cols = bitmap_width as usize;
        let content_rows = cell::rows_for(bitmap_height) as usize;
        let (cols, rows) = (term_cols as usize, term_rows as usize);

        // Two rows kept for the gap and the caption
        let offset_x = cols.saturating_sub(content_cols) / 2;
        let offset_y = rows.saturating_sub(content_rows.saturating_add(2)) / 2;
        let visible_cols = content_cols.min(cols - offset_x);
        let visible_rows = content_rows.min(rows.saturating_sub(offset_y + 1));

        let caption_x = cols.saturating_sub(caption_len) / 2;
        let caption_y = (offset_y + visible_rows + 1).min(rows.saturating_sub(1));

        // Every value is bounded by the terminal size, so it fits in u16
        Self {
            offset_x: offset_x as u16,
            offset_y: offset_y as u16,
            visible_cols: visible_cols as u16,
            visible_rows: visible_rows as u16,
            stride: content_cols,
            caption_x: caption_x as u16,
            caption_y: caption_y as u16,
        }
    }
}
