//! Integration tests for starting, saving and resuming a game.

use delver::{
    Action, DelverError, DelverResult, ExitReason, GameConfig, GameState, MessageCategory,
    SaveFile, TurnOutcome, TurnPhase,
};
use tempfile::TempDir;

fn test_config() -> GameConfig {
    GameConfig {
        map_width: 50,
        map_height: 30,
        max_rooms: 10,
        ..GameConfig::default()
    }
}

#[test]
fn test_basic_startup() -> DelverResult<()> {
    let game = GameState::new(&test_config(), 12345)?;

    assert_eq!(game.turn_number, 0);
    assert_eq!(game.phase, TurnPhase::Idle);
    assert_eq!(game.game_world.current_floor, 1);

    let player = game.player().expect("player on floor");
    assert_eq!(player.position, game.game_map.spawn_location);
    assert!(game.game_map.is_walkable(player.position));
    assert!(game.game_map.is_visible(player.position));
    assert!(game.game_map.is_explored(player.position));

    let welcome = game.message_log.last().expect("welcome message");
    assert_eq!(welcome.category, MessageCategory::Welcome);
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        room_min_size: 12,
        room_max_size: 8,
        ..GameConfig::default()
    };
    assert!(matches!(
        GameState::new(&config, 1),
        Err(DelverError::Config(_))
    ));
}

#[test]
fn test_same_seed_same_run() -> DelverResult<()> {
    let mut a = GameState::new(&test_config(), 2024)?;
    let mut b = GameState::new(&test_config(), 2024)?;
    for _ in 0..10 {
        a.handle_player_action(Action::Wait)?;
        b.handle_player_action(Action::Wait)?;
    }
    assert_eq!(a.game_map, b.game_map);
    assert_eq!(a.message_log, b.message_log);
    Ok(())
}

#[test]
fn test_save_resume_and_continue_playing() -> DelverResult<()> {
    let dir = TempDir::new()?;
    let save = SaveFile::new(dir.path().join("savegame.json"));

    let mut game = GameState::new(&test_config(), 77)?;
    for _ in 0..3 {
        game.handle_player_action(Action::Wait)?;
    }
    save.finish(&game, ExitReason::UserQuit)?;
    assert!(save.exists());

    let mut resumed = save.load()?;
    assert_eq!(resumed.turn_number, game.turn_number);
    assert_eq!(resumed.game_map, game.game_map);
    assert_eq!(resumed.message_log, game.message_log);
    assert_eq!(resumed.statistics, game.statistics);
    assert_eq!(resumed.game_world, game.game_world);
    assert_eq!(resumed.phase, TurnPhase::Idle);

    let outcome = resumed.handle_player_action(Action::Wait)?;
    assert!(matches!(outcome, TurnOutcome::Completed | TurnOutcome::GameOver));
    assert_eq!(resumed.turn_number, 4);
    Ok(())
}

#[test]
fn test_bytes_round_trip() -> DelverResult<()> {
    let game = GameState::new(&test_config(), 5)?;
    let restored = GameState::from_bytes(&game.to_bytes()?)?;
    assert_eq!(restored.game_map, game.game_map);
    assert_eq!(restored.player_id, game.player_id);
    Ok(())
}

#[test]
fn test_corrupt_save_fails_cleanly() -> DelverResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("savegame.json");
    std::fs::write(&path, b"{\"game_map\": 3}")?;
    let result = SaveFile::new(&path).load();
    assert!(matches!(result, Err(DelverError::Serde(_))));
    Ok(())
}

#[test]
fn test_game_over_quit_removes_save() -> DelverResult<()> {
    let dir = TempDir::new()?;
    let save = SaveFile::new(dir.path().join("savegame.json"));
    let game = GameState::new(&test_config(), 9)?;
    save.save(&game)?;
    assert!(save.exists());

    save.finish(&game, ExitReason::QuitWithoutSaving)?;
    assert!(!save.exists());
    Ok(())
}
