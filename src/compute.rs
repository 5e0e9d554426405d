//! Game rules.
//!
//! The public entry points (`init_state`, `handle_input`, `tick`) take an
//! immutable reference to the current `GameState` and return a new one.
//! `update_enemy` and `update_player` are the in-place steps `tick` is built
//! from; they are public so single rule events can be driven directly.
//! Randomness always comes through an injected `Rng`.

use log::{debug, info};
use rand::Rng;

use crate::config::{self, GridConfig};
use crate::entities::{Collectible, Direction, Enemy, EnemyLayout, GameState, Player, Position};

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Lower and upper bound (exclusive) of randomly rolled enemy speeds.
const RANDOM_SPEED_RANGE: std::ops::Range<f64> = 1.0..3.0;

pub fn classic_enemies(config: &GridConfig) -> Vec<Enemy> {
    config::CLASSIC_ENEMIES
        .iter()
        .map(|&(row, col, speed)| Enemy::new(row, col, speed, config))
        .collect()
}

/// One or two enemies per lane, each at a random column and speed.
pub fn random_enemies(config: &GridConfig, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut enemies = Vec::new();
    for row in config::ENEMY_LANES {
        let count = rng.gen_range(1..=2);
        for _ in 0..count {
            let col = rng.gen_range(1..=config.cols);
            let speed = rng.gen_range(RANDOM_SPEED_RANGE);
            enemies.push(Enemy::new(row, col, speed, config));
        }
    }
    enemies
}

/// A collectible on a random enemy-lane cell.
pub fn random_collectible(config: &GridConfig, rng: &mut impl Rng) -> Collectible {
    let row = rng.gen_range(config::ENEMY_LANES);
    let col = rng.gen_range(1..=config.cols);
    Collectible::new(row, col, config)
}

/// A collectible on a random enemy-lane cell other than `avoid`, so a
/// player standing still cannot pick the same gem up twice.
pub fn relocate_collectible(
    config: &GridConfig,
    avoid: Position,
    rng: &mut impl Rng,
) -> Collectible {
    loop {
        let candidate = random_collectible(config, rng);
        if candidate.pos != avoid {
            return candidate;
        }
    }
}

/// Build the initial game state.
pub fn init_state(
    config: GridConfig,
    layout: EnemyLayout,
    with_collectible: bool,
    rng: &mut impl Rng,
) -> GameState {
    let (row, col) = config::PLAYER_START;
    let enemies = match layout {
        EnemyLayout::Classic => classic_enemies(&config),
        EnemyLayout::Random => random_enemies(&config, rng),
    };
    let collectible = with_collectible.then(|| random_collectible(&config, rng));

    GameState {
        player: Player::new(row, col, &config),
        enemies,
        collectible,
        score: 0,
        crossings: 0,
        collisions: 0,
        frame: 0,
        config,
    }
}

// ── Difficulty feedback ───────────────────────────────────────────────────────

/// Additive enemy-speed change for the current score. Negative scores give
/// negative modifiers, so a losing streak slows the enemies back down.
pub fn speed_modifier(state: &GameState) -> f64 {
    state.score as f64 / state.config.difficulty_modifier
}

/// Rescale every enemy from the score as it stands *after* the event that
/// triggered the call.
fn apply_difficulty(state: &mut GameState) {
    let modifier = speed_modifier(state);
    state.change_all_enemy_speed(modifier);
    debug!("[Rules] Enemy speeds changed by {:+.3}", modifier);
}

// ── Input-driven transitions (pure) ──────────────────────────────────────────

pub fn handle_input(state: &GameState, direction: Direction) -> GameState {
    let mut next = state.clone();
    if !next.player.handle_input(direction, &state.config) && direction != Direction::Unrecognized {
        debug!("[Input] Rejected {:?} move at the board edge", direction);
    }
    next
}

// ── In-place rule steps ──────────────────────────────────────────────────────

/// Advance one enemy and resolve its collision with the player.
/// Returns `true` when this enemy hit the player.
pub fn update_enemy(state: &mut GameState, index: usize, dt: f64) -> bool {
    let config = &state.config;
    let Some(enemy) = state.enemies.get_mut(index) else {
        return false;
    };
    enemy.advance(dt, config);

    if !enemy.is_colliding_with_player(&state.player, config) {
        return false;
    }

    state.decrease_score();
    state.collisions += 1;
    apply_difficulty(state);
    state.player.reset_position();
    info!("[Rules] Player hit by enemy {}, score is now {}", index, state.score);
    true
}

/// Goal and collectible checks for the player.
/// Returns `true` when the player reached the goal row this step.
pub fn update_player(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.player.is_on_first_row() {
        state.increase_score();
        state.crossings += 1;
        apply_difficulty(state);
        state.player.reset_position();
        if state.collectible.is_some() {
            state.collectible = Some(relocate_collectible(&state.config, state.player.pos, rng));
        }
        info!("[Rules] Goal reached, score is now {}", state.score);
        return true;
    }

    let touched = state
        .collectible
        .as_ref()
        .is_some_and(|c| c.is_touched_by(&state.player));
    if touched {
        state.increase_score();
        apply_difficulty(state);
        state.collectible = Some(relocate_collectible(&state.config, state.player.pos, rng));
        info!("[Rules] Collectible picked up, score is now {}", state.score);
    }
    false
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by `dt` seconds: every enemy in list order, then
/// the player. A collision resets the player immediately, so later enemies
/// in the same tick test against the reset position.
pub fn tick(state: &GameState, dt: f64, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    for index in 0..next.enemies.len() {
        update_enemy(&mut next, index, dt);
    }
    update_player(&mut next, rng);

    next
}
