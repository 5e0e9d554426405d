//! Game entity types and the small per-entity operations on them.
//!
//! Anything that needs to see more than one entity at a time (collision
//! consequences, scoring, difficulty) lives in `compute`.

use crate::config::GridConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Pixel coordinates of a sprite's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Position of a 1-based (row, col) grid cell.
    pub fn from_cell(row: u32, col: u32, config: &GridConfig) -> Self {
        let (x, y) = config.cell_to_pixels(row, col);
        Self { x, y }
    }

    /// Axis-aligned box one cell wide and one cell tall anchored here.
    pub fn collision_box(&self, config: &GridConfig) -> CollisionBox {
        CollisionBox {
            x1: self.x,
            x2: self.x + config.dx,
            y1: self.y,
            y2: self.y + config.dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionBox {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl CollisionBox {
    /// True iff `x` lies strictly inside this box's horizontal span.
    pub fn spans_x(&self, x: f64) -> bool {
        x > self.x1 && x < self.x2
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    EnemyBug,
    CharBoy,
    Gem,
    WaterBlock,
    StoneBlock,
    GrassBlock,
}

impl Sprite {
    /// Asset identifier handed to the drawing collaborator.
    pub fn id(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::Gem => "images/gem-blue.png",
            Sprite::WaterBlock => "images/water-block.png",
            Sprite::StoneBlock => "images/stone-block.png",
            Sprite::GrassBlock => "images/grass-block.png",
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
    /// Any key the adapter does not map; applying it is a no-op.
    Unrecognized,
}

// ── Spawn layouts ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyLayout {
    /// Fixed cells and speeds from `config::CLASSIC_ENEMIES`.
    Classic,
    /// One or two enemies per lane at random columns and speeds.
    Random,
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Position,
    /// Horizontal speed in grid cells per second. May drift negative.
    pub speed: f64,
    pub sprite: Sprite,
}

impl Enemy {
    pub fn new(row: u32, col: u32, speed: f64, config: &GridConfig) -> Self {
        Self {
            pos: Position::from_cell(row, col, config),
            speed,
            sprite: Sprite::EnemyBug,
        }
    }

    /// Pixels travelled during a tick of `dt` seconds.
    pub fn speed_per_tick(&self, dt: f64, config: &GridConfig) -> f64 {
        self.speed * config.dx * dt
    }

    /// Integrate horizontal position, wrapping to just off the left edge
    /// once the enemy has passed the right edge of the canvas.
    pub fn advance(&mut self, dt: f64, config: &GridConfig) {
        self.pos.x += self.speed_per_tick(dt, config);
        if self.is_out_of_right_bound(config) {
            // One full cell width, so the sprite re-enters from fully hidden.
            self.pos.x = -config.dx;
        }
    }

    pub fn is_out_of_right_bound(&self, config: &GridConfig) -> bool {
        self.pos.x > config.canvas_width
    }

    /// Additive speed change; `modifier` may be negative.
    pub fn increase_speed(&mut self, modifier: f64) {
        self.speed += modifier;
    }

    pub fn collision_box(&self, config: &GridConfig) -> CollisionBox {
        self.pos.collision_box(config)
    }

    /// Same row, and one of the player's inset edges strictly inside this
    /// enemy's horizontal span. The inset skips transparent sprite padding.
    pub fn is_colliding_with_player(&self, player: &Player, config: &GridConfig) -> bool {
        let own = self.collision_box(config);
        let theirs = player.collision_box(config);

        if theirs.y1 != own.y1 {
            return false;
        }

        let margin = config.player_collision_offset;
        own.spans_x(theirs.x1 + margin) || own.spans_x(theirs.x2 - margin)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Position,
    /// Where the player returns to after a crossing or a collision.
    pub initial: Position,
    pub sprite: Sprite,
}

impl Player {
    pub fn new(row: u32, col: u32, config: &GridConfig) -> Self {
        let pos = Position::from_cell(row, col, config);
        Self {
            pos,
            initial: pos,
            sprite: Sprite::CharBoy,
        }
    }

    pub fn reset_position(&mut self) {
        self.pos = self.initial;
    }

    pub fn collision_box(&self, config: &GridConfig) -> CollisionBox {
        self.pos.collision_box(config)
    }

    /// The topmost (goal) row is the only one drawn above the canvas origin.
    pub fn is_on_first_row(&self) -> bool {
        self.pos.y < 0.0
    }

    pub fn is_next_move_out_of_bounds(&self, direction: Direction, config: &GridConfig) -> bool {
        let Position { x, y } = self.pos;
        match direction {
            Direction::Left => x - config.dx < 0.0,
            Direction::Right => x + config.dx >= config.canvas_width,
            Direction::Up => y - config.dy < -config.offset,
            Direction::Down => y + config.dy + config.offset >= config.rows as f64 * config.dy,
            Direction::Unrecognized => false,
        }
    }

    /// Step one cell in `direction` unless that would leave the board.
    /// Returns whether the player moved.
    pub fn handle_input(&mut self, direction: Direction, config: &GridConfig) -> bool {
        if self.is_next_move_out_of_bounds(direction, config) {
            return false;
        }

        match direction {
            Direction::Left => self.pos.x -= config.dx,
            Direction::Right => self.pos.x += config.dx,
            Direction::Up => self.pos.y -= config.dy,
            Direction::Down => self.pos.y += config.dy,
            Direction::Unrecognized => return false,
        }
        true
    }
}

// ── Collectible ───────────────────────────────────────────────────────────────

/// A pickup sitting on one enemy-lane cell until the player steps on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub pos: Position,
    pub sprite: Sprite,
}

impl Collectible {
    pub fn new(row: u32, col: u32, config: &GridConfig) -> Self {
        Self {
            pos: Position::from_cell(row, col, config),
            sprite: Sprite::Gem,
        }
    }

    /// Player and collectible occupy the same cell.
    pub fn is_touched_by(&self, player: &Player) -> bool {
        self.pos == player.pos
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one game owns. The loop driver holds the only instance and
/// passes it to the rule functions explicitly.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GridConfig,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub collectible: Option<Collectible>,
    /// Unbounded; goes negative after enough collisions.
    pub score: i32,
    /// Goal-row arrivals so far.
    pub crossings: u32,
    /// Enemy hits so far.
    pub collisions: u32,
    pub frame: u64,
}

impl GameState {
    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn decrease_score(&mut self) {
        self.score -= 1;
    }

    /// Apply the same additive speed change to every enemy.
    pub fn change_all_enemy_speed(&mut self, modifier: f64) {
        for enemy in &mut self.enemies {
            enemy.increase_speed(modifier);
        }
    }
}
