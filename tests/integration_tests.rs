//! Integration tests for the game controller through the public API.

use tui_stacker::core::{Block, GameConfig, GameState, PlaceOutcome};
use tui_stacker::engine::{apply_place, PlaceError, PlaceReport};
use tui_stacker::types::{Direction, GameAction, RunState, LOSS_MESSAGE, TICK_MS, WIN_MESSAGE};

/// Whole-unit speed and a one-tick spawn delay keep mover positions exact:
/// `k` ticks after a spawn the mover sits at `10 * (k - 1)`.
fn fast_config() -> GameConfig {
    GameConfig {
        mover_speed: 10.0,
        spawn_delay_ms: TICK_MS,
        ..GameConfig::default()
    }
}

fn tick_to(game: &mut GameState, left: f64) {
    for _ in 0..200 {
        game.tick(TICK_MS);
        if game.mover().map(|m| m.left) == Some(left) {
            return;
        }
    }
    panic!("mover never reached left={left}");
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(fast_config());
    assert_eq!(game.run_state(), RunState::Setup);
    assert_eq!(game.level(), 0);
    assert_eq!(game.tower().len(), 1);
    assert!(game.mover().is_none());
    assert!(!game.loop_running());

    assert!(game.start());
    assert_eq!(game.run_state(), RunState::Running);
    assert!(game.loop_running());

    let mover = game.mover().unwrap();
    assert_eq!(mover.left, -220.0);
    assert_eq!(mover.width, 220.0);
    assert_eq!(mover.layer, 1);
    assert_eq!(mover.direction, Direction::Right);

    // Only the first start counts.
    assert!(!game.start());
}

#[test]
fn test_base_block_is_centered() {
    let game = GameState::new(GameConfig::default());
    assert_eq!(
        game.tower().top(),
        Block {
            left: 70.0,
            width: 220.0,
            layer: 0
        }
    );
}

#[test]
fn test_aligned_drop_keeps_full_width() {
    let mut game = GameState::new(fast_config());
    game.start();
    tick_to(&mut game, 70.0);

    match game.place() {
        PlaceOutcome::Stacked { block, trimmed } => {
            assert_eq!(block.left, 70.0);
            assert_eq!(block.width, 220.0);
            assert_eq!(block.layer, 1);
            assert_eq!(trimmed, 0.0);
        }
        other => panic!("expected a stacked block, got {other:?}"),
    }
    assert_eq!(game.level(), 1);
    assert!(game.spawn_pending());
    assert!(game.mover().is_none());

    // Until the next mover arrives, placing again does nothing.
    assert_eq!(game.place(), PlaceOutcome::Ignored);
    assert_eq!(game.level(), 1);

    game.tick(TICK_MS);
    let next = game.mover().unwrap();
    assert_eq!(next.left, 0.0);
    assert_eq!(next.width, 220.0);
    assert_eq!(next.layer, 2);
    assert_eq!(game.mover_id(), 2);
    assert!(!game.spawn_pending());
}

#[test]
fn test_partial_overlap_trims_each_layer() {
    let mut game = GameState::new(fast_config());
    game.start();

    tick_to(&mut game, 100.0);
    assert_eq!(
        game.place(),
        PlaceOutcome::Stacked {
            block: Block {
                left: 100.0,
                width: 190.0,
                layer: 1
            },
            trimmed: 30.0,
        }
    );

    game.tick(TICK_MS);
    assert_eq!(game.mover().unwrap().width, 190.0);

    // Overhanging on the left this time: [80, 270] over [100, 290].
    tick_to(&mut game, 80.0);
    assert_eq!(
        game.place(),
        PlaceOutcome::Stacked {
            block: Block {
                left: 100.0,
                width: 170.0,
                layer: 2
            },
            trimmed: 20.0,
        }
    );
    assert_eq!(game.level(), 2);
}

#[test]
fn test_miss_ends_the_run() {
    let config = GameConfig {
        base_width: 40.0,
        ..fast_config()
    };
    let mut game = GameState::new(config);
    game.start();
    assert_eq!(game.tower().top().left, 160.0);

    game.tick(TICK_MS);
    assert_eq!(game.mover().unwrap().left, 0.0);

    assert_eq!(game.place(), PlaceOutcome::Lost { overlap: -120.0 });
    assert_eq!(game.run_state(), RunState::Ended { win: false });
    assert_eq!(game.message(), Some(LOSS_MESSAGE));
    assert!(game.mover().is_none());
    assert!(!game.loop_running());
    assert_eq!(game.tower().len(), 1);

    // The ended run is frozen.
    assert!(!game.tick(TICK_MS));
    assert_eq!(game.place(), PlaceOutcome::Ignored);
}

#[test]
fn test_reaching_the_target_wins() {
    let config = GameConfig {
        win_target: 2,
        ..fast_config()
    };
    let mut game = GameState::new(config);
    game.start();

    tick_to(&mut game, 70.0);
    assert!(matches!(game.place(), PlaceOutcome::Stacked { .. }));

    game.tick(TICK_MS);
    tick_to(&mut game, 70.0);
    match game.place() {
        PlaceOutcome::Won { block } => assert_eq!(block.layer, 2),
        other => panic!("expected a win, got {other:?}"),
    }

    assert_eq!(game.run_state(), RunState::Ended { win: true });
    assert_eq!(game.message(), Some(WIN_MESSAGE));
    assert_eq!(game.level(), 2);
    assert!(!game.spawn_pending());
    assert!(!game.loop_running());
}

#[test]
fn test_restart_discards_pending_spawn() {
    let mut game = GameState::new(GameConfig::default());
    game.start();
    for _ in 0..30 {
        game.tick(TICK_MS);
    }
    assert!(matches!(game.place(), PlaceOutcome::Stacked { .. }));
    assert!(game.spawn_pending());

    assert!(game.restart());
    assert_eq!(game.episode_id(), 1);
    assert!(!game.spawn_pending());
    assert_eq!(game.tower().len(), 1);
    assert_eq!(game.level(), 0);

    let mover = game.mover().unwrap();
    assert_eq!((mover.left, mover.layer), (-220.0, 1));

    // Well past the old spawn delay: still exactly one mover on layer 1.
    let ids = game.mover_id();
    for _ in 0..20 {
        game.tick(TICK_MS);
    }
    assert_eq!(game.mover_id(), ids);
    assert_eq!(game.mover().unwrap().layer, 1);
}

#[test]
fn test_restart_in_setup_is_ignored() {
    let mut game = GameState::new(GameConfig::default());
    assert!(!game.restart());
    assert_eq!(game.run_state(), RunState::Setup);
    assert_eq!(game.episode_id(), 0);
}

#[test]
fn test_activate_follows_the_run_state() {
    let config = GameConfig {
        base_width: 40.0,
        ..fast_config()
    };
    let mut game = GameState::new(config);

    // Setup: starts.
    assert!(game.apply_action(GameAction::Activate));
    assert!(game.run_state().is_running());

    // Running: places (and misses from off-field).
    assert!(game.apply_action(GameAction::Activate));
    assert_eq!(game.run_state(), RunState::Ended { win: false });

    // Ended: restarts.
    assert!(game.apply_action(GameAction::Activate));
    assert!(game.run_state().is_running());
    assert_eq!(game.episode_id(), 1);
}

#[test]
fn test_apply_place_reports_reasons() {
    let mut game = GameState::new(fast_config());
    assert_eq!(apply_place(&mut game), Err(PlaceError::NotStarted));

    game.start();
    tick_to(&mut game, 70.0);
    assert_eq!(
        apply_place(&mut game),
        Ok(PlaceReport::Stacked {
            level: 1,
            trimmed: 0.0
        })
    );

    let err = apply_place(&mut game).unwrap_err();
    assert_eq!(err, PlaceError::NoMover);
    assert_eq!(err.code(), "no_mover");
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        mover_speed: 0.0,
        ..GameConfig::default()
    };
    assert!(GameState::try_new(config).is_err());

    let config = GameConfig {
        base_width: 400.0,
        ..GameConfig::default()
    };
    assert!(GameState::try_new(config).is_err());
}

#[test]
fn test_placed_blocks_stay_inside_the_field() {
    let config = GameConfig::default();
    let edge = config.field_width + 0.5;

    // Drop after a fixed number of ticks each layer, covering both directions.
    for wait in 1..=120 {
        let mut game = GameState::new(config);
        game.start();
        while game.run_state().is_running() {
            while game.mover().is_none() {
                game.tick(TICK_MS);
            }
            for _ in 0..wait {
                game.tick(TICK_MS);
            }
            game.place();
        }

        for block in game.tower().blocks() {
            assert!(block.left >= 0.0, "wait={wait}: {block:?}");
            assert!(block.right() <= edge, "wait={wait}: {block:?}");
        }
    }
}
