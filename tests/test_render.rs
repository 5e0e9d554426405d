use crossing_game::config::GridConfig;
use crossing_game::entities::*;
use crossing_game::render::*;

fn make_state() -> GameState {
    let config = GridConfig::default();
    GameState {
        player: Player::new(6, 3, &config),
        enemies: vec![Enemy::new(2, 1, 1.0, &config), Enemy::new(4, 4, 1.0, &config)],
        collectible: Some(Collectible::new(3, 2, &config)),
        score: -3,
        crossings: 0,
        collisions: 3,
        frame: 7,
        config,
    }
}

fn rendered(state: &GameState) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::default();
    render(state, &mut canvas).expect("recording never fails");
    canvas
}

#[test]
fn board_has_one_tile_per_cell() {
    let canvas = rendered(&make_state());
    assert_eq!(canvas.sprites(Sprite::WaterBlock).count(), 5);
    assert_eq!(canvas.sprites(Sprite::StoneBlock).count(), 15);
    assert_eq!(canvas.sprites(Sprite::GrassBlock).count(), 10);
    // Tiles are not offset.
    assert_eq!(canvas.sprites(Sprite::WaterBlock).next(), Some((0.0, 0.0)));
}

#[test]
fn tiles_by_row() {
    assert_eq!(tile_for_row(1), Sprite::WaterBlock);
    assert_eq!(tile_for_row(2), Sprite::StoneBlock);
    assert_eq!(tile_for_row(4), Sprite::StoneBlock);
    assert_eq!(tile_for_row(5), Sprite::GrassBlock);
    assert_eq!(tile_for_row(6), Sprite::GrassBlock);
}

#[test]
fn entities_drawn_at_their_positions() {
    let canvas = rendered(&make_state());
    let enemies: Vec<_> = canvas.sprites(Sprite::EnemyBug).collect();
    assert_eq!(enemies, vec![(0.0, 59.0), (303.0, 225.0)]);
    assert_eq!(canvas.sprites(Sprite::Gem).collect::<Vec<_>>(), vec![(101.0, 142.0)]);
    assert_eq!(canvas.sprites(Sprite::CharBoy).collect::<Vec<_>>(), vec![(202.0, 391.0)]);
}

#[test]
fn player_drawn_over_enemies_and_score_last() {
    let canvas = rendered(&make_state());
    let n = canvas.calls.len();
    assert!(matches!(
        canvas.calls[n - 2],
        DrawCall::Sprite { sprite: Sprite::CharBoy, .. }
    ));
    assert_eq!(
        canvas.calls[n - 1],
        DrawCall::Text { text: "Score: -3".to_string(), x: 32.0, y: 32.0 }
    );
}

#[test]
fn render_leaves_state_untouched() {
    let state = make_state();
    let before = state.clone();
    let _ = rendered(&state);
    assert_eq!(state.player, before.player);
    assert_eq!(state.enemies, before.enemies);
    assert_eq!(state.score, before.score);
    assert_eq!(state.frame, before.frame);
}

#[test]
fn no_collectible_no_gem_call() {
    let mut state = make_state();
    state.collectible = None;
    assert_eq!(rendered(&state).sprites(Sprite::Gem).count(), 0);
}
