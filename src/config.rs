//! Board layout and difficulty constants.
//!
//! The `pub const` values are the classic board; `GridConfig` carries them
//! at runtime so the driver can override the tunable ones from the CLI.

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Width of one grid cell in pixels.
pub const CELL_WIDTH: f64 = 101.0;

/// Height of one grid cell in pixels.
pub const CELL_HEIGHT: f64 = 83.0;

/// Distance from the canvas top to the first row's sprite origin.
pub const ROW_OFFSET: f64 = 24.0;

/// Horizontal distance from the player sprite edge to its first opaque pixel.
pub const PLAYER_COLLISION_OFFSET: f64 = 24.0;

/// Points needed before enemies move one extra cell per second.
pub const DIFFICULTY_MODIFIER: f64 = 25.0;

pub const CANVAS_WIDTH: f64 = 505.0;
pub const CANVAS_HEIGHT: f64 = 606.0;

pub const ROWS: u32 = 6;
pub const COLS: u32 = 5;

/// Player spawn cell (row, col), 1-based.
pub const PLAYER_START: (u32, u32) = (6, 3);

/// Rows enemies travel along, 1-based and inclusive.
pub const ENEMY_LANES: std::ops::RangeInclusive<u32> = 2..=4;

/// Classic enemy layout: (row, col, speed in cells per second).
pub const CLASSIC_ENEMIES: [(u32, u32, f64); 4] = [
    (2, 1, 1.5),
    (3, 3, 2.5),
    (4, 4, 1.0),
    (4, 5, 1.0),
];

/// Score text anchor on the canvas.
pub const SCORE_TEXT_POS: (f64, f64) = (32.0, 32.0);

// ── Runtime configuration ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub dx: f64,
    pub dy: f64,
    pub offset: f64,
    pub player_collision_offset: f64,
    pub difficulty_modifier: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dx: CELL_WIDTH,
            dy: CELL_HEIGHT,
            offset: ROW_OFFSET,
            player_collision_offset: PLAYER_COLLISION_OFFSET,
            difficulty_modifier: DIFFICULTY_MODIFIER,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl GridConfig {
    /// Pixel position of a 1-based (row, col) cell.
    pub fn cell_to_pixels(&self, row: u32, col: u32) -> (f64, f64) {
        let x = (col as f64 - 1.0) * self.dx;
        let y = (row as f64 - 1.0) * self.dy - self.offset;
        (x, y)
    }

    /// Inverse of `cell_to_pixels`, rounded to the nearest cell.
    pub fn pixels_to_cell(&self, x: f64, y: f64) -> (i64, i64) {
        let row = ((y + self.offset) / self.dy).round() as i64 + 1;
        let col = (x / self.dx).round() as i64 + 1;
        (row, col)
    }
}

/// CLI parser for the difficulty divisor. Zero, negative and non-finite
/// values would turn every enemy speed into `inf` or `NaN` on the first
/// score event.
pub fn parse_difficulty_modifier(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("must be a finite number above zero, got {}", value))
    }
}
