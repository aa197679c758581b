//! Integration tests for the text renderer and the input boundary.

use delver::{
    new_player, parse_command, DelverResult, Direction, EntityId, GameMap, GameState,
    InputHandler, MonsterKind, PlayerInput, Position, TextDisplay, Tile, TurnOutcome,
};

/// A walled 10x10 room with the player at (3, 3).
fn room_game() -> DelverResult<GameState> {
    let mut map = GameMap::new(10, 10);
    for y in 1..9 {
        for x in 1..9 {
            map.set_tile(Position::new(x, y), Tile::floor());
        }
    }
    let player = new_player(map.allocate_entity_id(), Position::new(3, 3));
    GameState::new_with_map(map, player, 12345)
}

#[test]
fn test_game_state_with_player_visibility() -> DelverResult<()> {
    let game = room_game()?;
    let player_pos = game.player_position().expect("player");

    assert!(game.game_map.is_visible(player_pos));
    assert!(game.game_map.is_explored(player_pos));
    for neighbour in player_pos.adjacent_positions() {
        assert!(game.game_map.is_visible(neighbour));
    }
    Ok(())
}

#[test]
fn test_frame_contains_map_and_status() -> DelverResult<()> {
    let game = room_game()?;
    let mut display = TextDisplay::new(20, 20);
    let frame = display.render_game(&game);

    assert!(frame.contains('@'));
    assert!(frame.contains("##########"));
    assert!(frame.contains("HP: "));
    assert!(frame.contains("Dungeon level: 1"));
    Ok(())
}

#[test]
fn test_typed_commands_drive_the_player() -> DelverResult<()> {
    let mut game = room_game()?;
    let handler = InputHandler::new();

    for line in ["l", "j", "n"] {
        let input = parse_command(line).expect("valid command");
        let action = handler.input_to_action(input, &game)?.expect("turn action");
        assert_eq!(game.handle_player_action(action)?, TurnOutcome::Completed);
    }
    assert_eq!(game.player_position(), Some(Position::new(5, 5)));
    assert_eq!(game.turn_number, 3);
    Ok(())
}

#[test]
fn test_move_into_monster_attacks() -> DelverResult<()> {
    let mut game = room_game()?;
    let orc = MonsterKind::Orc.spawn(EntityId(0), Position::new(0, 0));
    let orc_id = game.game_map.spawn(&orc, Position::new(4, 3));

    let input = PlayerInput::Move(Direction::East);
    let action = InputHandler::new()
        .input_to_action(input, &game)?
        .expect("turn action");
    game.handle_player_action(action)?;

    assert_eq!(game.player_position(), Some(Position::new(3, 3)));
    let orc = game.game_map.entity(orc_id).expect("orc");
    assert_eq!(orc.actor().expect("actor").fighter.hp(), 8);
    Ok(())
}

#[test]
fn test_entities_hidden_outside_fov() -> DelverResult<()> {
    let mut map = GameMap::new(30, 3);
    for x in 1..29 {
        map.set_tile(Position::new(x, 1), Tile::floor());
    }
    let orc = MonsterKind::Orc.spawn(EntityId(0), Position::new(0, 0));
    map.spawn(&orc, Position::new(25, 1));
    let player = new_player(map.allocate_entity_id(), Position::new(2, 1));
    let game = GameState::new_with_map(map, player, 1)?;

    let display = TextDisplay::new(30, 3);
    let lines = display.render_map(&game.game_map);
    assert!(lines[1].contains('@'));
    assert!(!lines[1].contains('o'));
    Ok(())
}
