mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crossing_game::compute::{handle_input, init_state, tick};
use crossing_game::config::{self, GridConfig};
use crossing_game::entities::{EnemyLayout, GameState};
use crossing_game::input::direction_from_key;

#[derive(Debug, Parser)]
#[command(author, version, about = "Cross the board without touching the bugs", long_about = None)]
struct CliArgs {
    /// Frames drawn per second.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    fps: u32,
    /// Seed for enemy and collectible placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Points needed before enemies move one extra cell per second.
    #[arg(
        long,
        default_value_t = config::DIFFICULTY_MODIFIER,
        value_parser = config::parse_difficulty_modifier
    )]
    difficulty_modifier: f64,
    /// Place enemies at random columns and speeds instead of the classic layout.
    #[arg(long)]
    random_enemies: bool,
    /// Put a collectible gem on the board.
    #[arg(long)]
    collectible: bool,
    /// Write logs here; the terminal is taken over by the game.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logger(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        // Stderr shares the screen with the game, so stay quiet unless asked.
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Apply every pending key press, skipping non-key events (resize, mouse)
/// without stopping. Returns `true` when the player asked to quit.
fn drain_input(state: &mut GameState, rx: &mpsc::Receiver<Event>) -> bool {
    while let Ok(ev) = rx.try_recv() {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
            continue;
        };
        if kind != KeyEventKind::Press {
            continue;
        }
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            _ => *state = handle_input(state, direction_from_key(&code)),
        }
    }
    false
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Each frame drains pending key presses,
/// advances the simulation by the wall-clock time since the previous frame,
/// then redraws.
fn game_loop<W: Write>(
    out: &mut W,
    mut state: GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> Result<GameState> {
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        if drain_input(&mut state, rx) {
            return Ok(state);
        }

        let dt = frame_start.duration_since(last).as_secs_f64();
        last = frame_start;
        state = tick(&state, dt, rng);

        display::render(out, &state).context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logger(args.log_file.as_ref())?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = GridConfig {
        difficulty_modifier: args.difficulty_modifier,
        ..GridConfig::default()
    };
    let layout = if args.random_enemies {
        EnemyLayout::Random
    } else {
        EnemyLayout::Classic
    };
    let state = init_state(grid, layout, args.collectible, &mut rng);
    info!(
        "[Game] Starting with {} enemies, layout {:?}, collectible {}",
        state.enemies.len(),
        layout,
        args.collectible
    );

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let frame_time = Duration::from_secs_f64(1.0 / args.fps as f64);
    let result = game_loop(&mut out, state, &mut rng, &rx, frame_time);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let state = result?;
    info!(
        "[Game] Finished with score {} ({} crossings, {} hits)",
        state.score, state.crossings, state.collisions
    );
    println!("Final score: {}", state.score);
    Ok(())
}
