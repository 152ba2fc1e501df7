//! Integration tests - full games driven through the public API

use tetrisweeper::core::{Game, GameConfig, GameSnapshot};
use tetrisweeper::types::GameInput;

/// Board filled wall to wall with hidden mines: every cell action has a
/// deterministic target.
fn minefield_config() -> GameConfig {
    GameConfig {
        seed_rows: 20,
        initial_empty_prob: 0.0,
        initial_opened_prob: 0.0,
        initial_mine_prob: 1.0,
        ..GameConfig::default()
    }
}

#[test]
fn test_replay_is_deterministic() {
    let mut a = Game::new(GameConfig::default(), 20260830).unwrap();
    let mut b = Game::new(GameConfig::default(), 20260830).unwrap();

    for step in 0..2000u32 {
        if step % 7 == 0 {
            a.submit_input(GameInput::Rotate);
            b.submit_input(GameInput::Rotate);
        }
        if step % 11 == 0 {
            a.submit_input(GameInput::MoveLeft);
            b.submit_input(GameInput::MoveLeft);
        }
        if step % 97 == 0 {
            let col = (step % 10) as i32;
            a.submit_cell_action(col, 19, true);
            b.submit_cell_action(col, 19, true);
        }
        a.advance();
        b.advance();
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at step {}", step);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = Game::new(GameConfig::default(), 1).unwrap();
    let mut b = Game::new(GameConfig::default(), 2).unwrap();
    for _ in 0..200 {
        a.advance();
        b.advance();
    }
    assert_ne!(a.snapshot(), b.snapshot());
}

#[test]
fn test_unresolvable_stack_overflows_the_board() {
    // No mines and nothing pre-opened: locked tiles can never resolve, so
    // no line ever clears and the stack must reach the top.
    let config = GameConfig {
        seed_rows: 0,
        mine_prob: 0.0,
        opened_prob: 0.0,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, 5).unwrap();

    let mut ticks = 0u32;
    while game.running() {
        game.advance();
        ticks += 1;
        assert!(ticks < 100_000, "game never ended");
    }

    assert!(game.board().lines_cleared() == 0);
    let snapshot = game.snapshot();
    assert!(!snapshot.running);
}

#[test]
fn test_reveal_mine_ends_game_immediately() {
    let mut game = Game::new(minefield_config(), 3).unwrap();

    game.submit_cell_action(4, 10, false);
    assert!(!game.running());
    // The detonation still runs the sweep: with every row complete the
    // whole grid clears, dead tile included, but the loss stands.
    assert_eq!(game.board().lines_cleared(), 20);

    // Terminal state rejects further play.
    let frozen = game.snapshot();
    game.submit_input(GameInput::SoftDrop);
    game.advance();
    game.submit_cell_action(0, 0, false);
    assert_eq!(game.snapshot(), frozen);
}

#[test]
fn test_flag_sweeps_completed_rows() {
    // Mines count as resolved, so on an all-mine board the first effective
    // flag completes every row and sweeps the whole grid.
    let mut game = Game::new(minefield_config(), 3).unwrap();
    let total_mines = game.board().mine_count();
    assert_eq!(total_mines, 200);

    game.submit_cell_action(0, 0, true);
    assert!(game.running());
    assert_eq!(game.board().lines_cleared(), 20);
    assert_eq!(game.board().mines_cleared(), total_mines);
    assert_eq!(game.board().mine_count(), 0);
}

#[test]
fn test_restart_after_loss_starts_a_fresh_game() {
    let mut game = Game::new(minefield_config(), 8).unwrap();
    game.submit_cell_action(0, 0, false);
    assert!(!game.running());

    game.restart();
    assert!(game.running());
    assert_eq!(game.board().lines_cleared(), 0);
    assert!(game.board().tiles().iter().all(|t| !t.dead));
}

#[test]
fn test_input_applies_before_gravity() {
    let config = GameConfig {
        seed_rows: 0,
        mine_prob: 0.0,
        opened_prob: 0.0,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, 5).unwrap();
    game.advance(); // consume the tick-0 fall
    let x0 = game.piece().x;
    let y0 = game.piece().y;

    game.submit_input(GameInput::MoveRight);
    game.advance();
    assert_eq!(game.piece().x, x0 + 1);
    assert_eq!(game.piece().y, y0); // not a fall tick

    game.advance();
    assert_eq!(game.piece().x, x0 + 1); // buffer was consumed
}

#[test]
fn test_snapshot_serde_round_trip() {
    let mut game = Game::new(GameConfig::default(), 1234).unwrap();
    for _ in 0..100 {
        game.advance();
    }
    let snapshot = game.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_snapshot_into_steady_state_matches_fresh() {
    let mut game = Game::new(GameConfig::default(), 99).unwrap();
    let mut reused = GameSnapshot::default();

    for _ in 0..50 {
        game.advance();
        game.snapshot_into(&mut reused);
    }
    assert_eq!(reused, game.snapshot());
}

#[test]
fn test_config_round_trips_through_serde() {
    let config = GameConfig {
        width: 12,
        mine_prob: 0.5,
        ..GameConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let restored: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);
}
