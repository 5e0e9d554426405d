//! Read-only rendering pass.
//!
//! The game never talks to a screen directly. It draws through a `Canvas`
//! that knows how to put a sprite or a line of text at pixel coordinates;
//! the binary supplies a terminal-backed one.

use std::io;

use crate::config::{self, GridConfig};
use crate::entities::{GameState, Sprite};

pub trait Canvas {
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()>;
}

/// Background tile for a 1-based board row.
pub fn tile_for_row(row: u32) -> Sprite {
    if row == 1 {
        Sprite::WaterBlock
    } else if config::ENEMY_LANES.contains(&row) {
        Sprite::StoneBlock
    } else {
        Sprite::GrassBlock
    }
}

pub fn score_text(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

/// Draw one frame: board, enemies, collectible, player, then the score.
pub fn render(state: &GameState, canvas: &mut impl Canvas) -> io::Result<()> {
    draw_board(&state.config, canvas)?;

    for enemy in &state.enemies {
        canvas.draw_sprite(enemy.sprite, enemy.pos.x, enemy.pos.y)?;
    }
    if let Some(collectible) = &state.collectible {
        canvas.draw_sprite(collectible.sprite, collectible.pos.x, collectible.pos.y)?;
    }

    let player = &state.player;
    canvas.draw_sprite(player.sprite, player.pos.x, player.pos.y)?;

    let (tx, ty) = config::SCORE_TEXT_POS;
    canvas.draw_text(&score_text(state), tx, ty)
}

// Tiles are not offset like the sprites standing on them.
fn draw_board(config: &GridConfig, canvas: &mut impl Canvas) -> io::Result<()> {
    for row in 1..=config.rows {
        let sprite = tile_for_row(row);
        for col in 1..=config.cols {
            let x = (col as f64 - 1.0) * config.dx;
            let y = (row as f64 - 1.0) * config.dy;
            canvas.draw_sprite(sprite, x, y)?;
        }
    }
    Ok(())
}

// ── Recording canvas ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Sprite { sprite: Sprite, x: f64, y: f64 },
    Text { text: String, x: f64, y: f64 },
}

/// Canvas that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn sprites(&self, sprite: Sprite) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.calls.iter().filter_map(move |call| match call {
            DrawCall::Sprite { sprite: s, x, y } if *s == sprite => Some((*x, *y)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64) -> io::Result<()> {
        self.calls.push(DrawCall::Sprite { sprite, x, y });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> io::Result<()> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }
}
