//! Integration tests for descending through generated floors.

use delver::{Action, DelverResult, EntityId, GameConfig, GameState, TurnOutcome};
use std::collections::HashSet;

fn test_config() -> GameConfig {
    GameConfig {
        map_width: 50,
        map_height: 30,
        max_rooms: 10,
        ..GameConfig::default()
    }
}

/// Puts the player on the stairs and takes them.
fn descend(game: &mut GameState) -> DelverResult<TurnOutcome> {
    let stairs = game.game_map.downstairs_location;
    let player_id = game.player_id;
    if let Some(player) = game.game_map.entity_mut(player_id) {
        player.position = stairs;
    }
    game.handle_player_action(Action::TakeStairs)
}

#[test]
fn test_stairs_lead_to_new_floor() -> DelverResult<()> {
    let mut game = GameState::new(&test_config(), 98765)?;
    let first_floor = game.game_map.clone();

    let outcome = descend(&mut game)?;
    assert_ne!(outcome, TurnOutcome::Rejected("There are no stairs here.".to_string()));
    assert_eq!(game.game_world.current_floor, 2);
    assert_ne!(game.game_map, first_floor);
    assert!(game.game_map.is_walkable(game.game_map.downstairs_location));

    let player = game.player().expect("player moved to the new floor");
    assert_eq!(player.position, game.game_map.spawn_location);
    assert!(game.game_map.is_visible(player.position));
    Ok(())
}

#[test]
fn test_taking_stairs_off_the_stairs_is_rejected() -> DelverResult<()> {
    let mut game = GameState::new(&test_config(), 4321)?;
    let player_id = game.player_id;
    let stairs = game.game_map.downstairs_location;
    let off_stairs = game
        .game_map
        .floor_positions()
        .find(|&p| p != stairs && game.game_map.blocking_entity_at(p).is_none())
        .expect("a free floor cell");
    if let Some(player) = game.game_map.entity_mut(player_id) {
        player.position = off_stairs;
    }

    let outcome = game.handle_player_action(Action::TakeStairs)?;
    assert_eq!(
        outcome,
        TurnOutcome::Rejected("There are no stairs here.".to_string())
    );
    assert_eq!(game.game_world.current_floor, 1);
    assert_eq!(game.turn_number, 0);
    Ok(())
}

#[test]
fn test_descending_many_floors_keeps_ids_unique() -> DelverResult<()> {
    let mut game = GameState::new(&test_config(), 31337)?;
    let mut seen: HashSet<EntityId> = HashSet::new();
    let carried: Vec<EntityId> = game
        .player()
        .and_then(|p| p.actor())
        .map(|a| a.inventory.items.iter().map(|i| i.id).collect())
        .unwrap_or_default();
    seen.insert(game.player_id);
    seen.extend(carried.iter().copied());

    for floor in 2..=6 {
        if descend(&mut game)? == TurnOutcome::GameOver {
            break;
        }
        assert_eq!(game.game_world.current_floor, floor);
        for entity in game.game_map.entities() {
            if entity.id == game.player_id {
                continue;
            }
            assert!(seen.insert(entity.id), "id {} reused on floor {floor}", entity.id);
        }
    }

    assert!(game.statistics.deepest_floor >= 2);
    let inventory = &game.player().and_then(|p| p.actor()).expect("player").inventory;
    let ids: Vec<EntityId> = inventory.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, carried);
    Ok(())
}
