//! Rendering layer. All terminal I/O lives here.
//!
//! `TerminalCanvas` turns the game's pixel-space draw calls into crossterm
//! commands. Each grid cell becomes a block of `CELL_COLS` x `CELL_LINES`
//! terminal characters; sprites sit on the middle line of their cell.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use crossing_game::config::GridConfig;
use crossing_game::entities::{GameState, Sprite};
use crossing_game::render::{self, Canvas};

// ── Layout ────────────────────────────────────────────────────────────────────

const CELL_COLS: i32 = 8;
const CELL_LINES: i32 = 3;

/// Terminal position of the board's top-left character (inside the border).
const ORIGIN_COL: i32 = 1;
const ORIGIN_ROW: i32 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_WATER: Color = Color::Blue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_GEM: Color = Color::Cyan;
const C_TEXT: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::EnemyBug => ("<(##)>", C_ENEMY),
        Sprite::CharBoy => (" \\o/ ", C_PLAYER),
        Sprite::Gem => ("  <>  ", C_GEM),
        Sprite::WaterBlock => ("~ ~ ~ ~ ", C_WATER),
        Sprite::StoneBlock => ("        ", C_STONE),
        Sprite::GrassBlock => (" \" \" \" \"", C_GRASS),
    }
}

fn tile_colour(sprite: Sprite) -> Color {
    match sprite {
        Sprite::WaterBlock => C_WATER,
        Sprite::StoneBlock => C_STONE,
        _ => C_GRASS,
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct TerminalCanvas<'a, W: Write> {
    out: &'a mut W,
    config: GridConfig,
}

impl<'a, W: Write> TerminalCanvas<'a, W> {
    pub fn new(out: &'a mut W, config: GridConfig) -> Self {
        Self { out, config }
    }

    fn board_width(&self) -> i32 {
        self.config.cols as i32 * CELL_COLS
    }

    fn board_height(&self) -> i32 {
        self.config.rows as i32 * CELL_LINES
    }

    fn to_col(&self, x: f64) -> i32 {
        (x / self.config.dx * CELL_COLS as f64).round() as i32
    }

    /// Print `text` at board-relative (col, line), dropping whatever falls
    /// outside the board so sprites slide in and out at the edges.
    fn put_clipped(&mut self, col: i32, line: i32, text: &str) -> std::io::Result<()> {
        if line < 0 || line >= self.board_height() {
            return Ok(());
        }
        let width = self.board_width();
        let visible: String = text
            .chars()
            .enumerate()
            .filter(|(i, _)| (0..width).contains(&(col + *i as i32)))
            .map(|(_, ch)| ch)
            .collect();
        if visible.is_empty() {
            return Ok(());
        }
        let start = col.max(0);
        self.out.queue(cursor::MoveTo(
            (ORIGIN_COL + start) as u16,
            (ORIGIN_ROW + line) as u16,
        ))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<'_, W> {
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64) -> std::io::Result<()> {
        let (text, colour) = glyph(sprite);
        let col = self.to_col(x);

        match sprite {
            Sprite::WaterBlock | Sprite::StoneBlock | Sprite::GrassBlock => {
                let board_row = (y / self.config.dy).round() as i32;
                self.out.queue(style::SetBackgroundColor(colour))?;
                self.out.queue(style::SetForegroundColor(Color::White))?;
                for line in 0..CELL_LINES {
                    self.put_clipped(col, board_row * CELL_LINES + line, text)?;
                }
            }
            _ => {
                let (row, _) = self.config.pixels_to_cell(x, y);
                let board_row = row as i32 - 1;
                let tile = render::tile_for_row(row.max(1) as u32);
                self.out.queue(style::SetBackgroundColor(tile_colour(tile)))?;
                self.out.queue(style::SetForegroundColor(colour))?;
                self.put_clipped(col + 1, board_row * CELL_LINES + 1, text)?;
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> std::io::Result<()> {
        let line = (y / self.config.dy * CELL_LINES as f64) as i32;
        let col = self.to_col(x);
        self.out.queue(style::SetBackgroundColor(Color::Black))?;
        self.out.queue(style::SetForegroundColor(C_TEXT))?;
        self.put_clipped(col, line, text)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &state.config)?;
    {
        let mut canvas = TerminalCanvas::new(out, state.config.clone());
        render::render(state, &mut canvas)?;
    }
    out.queue(style::ResetColor)?;

    let below = board_bottom(&state.config);
    draw_stats(out, state, below + 1)?;
    draw_controls_hint(out, below + 2)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, below + 3))?;
    out.flush()?;
    Ok(())
}

/// Terminal row of the bottom border.
fn board_bottom(config: &GridConfig) -> u16 {
    (ORIGIN_ROW + config.rows as i32 * CELL_LINES) as u16
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, config: &GridConfig) -> std::io::Result<()> {
    let w = (config.cols as i32 * CELL_COLS) as usize;
    let bottom = board_bottom(config);

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 1..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(w as u16 + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Status lines ──────────────────────────────────────────────────────────────

fn draw_stats<W: Write>(out: &mut W, state: &GameState, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print(format!(
        "Crossings: {:>4}   Hits: {:>4}",
        state.crossings, state.collisions
    )))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↑ → ↓ / W A S D : Move   Q : Quit"))?;
    Ok(())
}
