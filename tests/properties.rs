//! Property tests for the simulation invariants.

use delver::{
    new_player, Action, Direction, EntityId, GameConfig, GameMap, GameState, GenerationConfig,
    ItemKind, MonsterKind, Position, RoomCorridorGenerator, Tile, TurnOutcome,
    PLAYER_INVENTORY_CAPACITY,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn small_config() -> GameConfig {
    GameConfig {
        map_width: 40,
        map_height: 25,
        max_rooms: 8,
        ..GameConfig::default()
    }
}

fn open_room(size: i32) -> GameMap {
    let mut map = GameMap::new(size, size);
    for y in 1..size - 1 {
        for x in 1..size - 1 {
            map.set_tile(Position::new(x, y), Tile::floor());
        }
    }
    map
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..8).prop_map(|i| {
            let delta = Direction::all()[i].to_delta();
            Action::Bump {
                dx: delta.x,
                dy: delta.y,
            }
        }),
        (-2i32..=2, -2i32..=2).prop_map(|(dx, dy)| Action::Move { dx, dy }),
        Just(Action::PickUp),
        Just(Action::TakeStairs),
        Just(Action::Wait),
        (0u64..200).prop_map(|id| Action::Drop { item: EntityId(id) }),
        (0u64..200).prop_map(|id| Action::Equip { item: EntityId(id) }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_rejected_actions_change_nothing(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..25),
    ) {
        let mut game = GameState::new(&small_config(), seed).unwrap();
        for action in actions {
            if game.is_game_over() {
                break;
            }
            let map_before = game.game_map.clone();
            let stats_before = game.statistics.clone();
            let turn_before = game.turn_number;
            if let TurnOutcome::Rejected(_) = game.handle_player_action(action).unwrap() {
                prop_assert_eq!(&game.game_map, &map_before);
                prop_assert_eq!(&game.statistics, &stats_before);
                prop_assert_eq!(game.turn_number, turn_before);
            }
        }
    }

    #[test]
    fn prop_explored_never_shrinks(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..8, 1..30),
    ) {
        let mut game = GameState::new(&small_config(), seed).unwrap();
        for index in moves {
            if game.is_game_over() {
                break;
            }
            let before: Vec<bool> = game.game_map.floor_positions()
                .map(|p| game.game_map.is_explored(p))
                .collect();
            let delta = Direction::all()[index].to_delta();
            game.handle_player_action(Action::Bump { dx: delta.x, dy: delta.y }).unwrap();
            let after: Vec<bool> = game.game_map.floor_positions()
                .map(|p| game.game_map.is_explored(p))
                .collect();
            for (was, now) in before.iter().zip(&after) {
                prop_assert!(!was || *now);
            }
        }
    }

    #[test]
    fn prop_damage_is_power_minus_defense(power in 0i32..30, defense in 0i32..30) {
        let mut map = open_room(6);
        let template = MonsterKind::Troll.spawn(EntityId(0), Position::new(0, 0));
        let troll = map.spawn(&template, Position::new(3, 2));
        let player = new_player(map.allocate_entity_id(), Position::new(2, 2));
        let mut game = GameState::new_with_map(map, player, 1).unwrap();
        let player_id = game.player_id;

        game.game_map.entity_mut(player_id).and_then(|e| e.actor_mut()).unwrap().fighter.base_power = power;
        {
            let fighter = &mut game.game_map.entity_mut(troll).and_then(|e| e.actor_mut()).unwrap().fighter;
            fighter.base_defense = defense;
            fighter.max_hp = 100;
            fighter.set_hp(100);
        }

        Action::Melee { dx: 1, dy: 0 }.perform(&mut game, player_id).unwrap();
        let hp = game.game_map.entity(troll).and_then(|e| e.actor()).unwrap().fighter.hp();
        prop_assert_eq!(100 - hp, (power - defense).max(0));
    }

    #[test]
    fn prop_rooms_never_overlap(seed in any::<u64>(), floor in 1u32..10) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (map, rooms) = RoomCorridorGenerator::new()
            .generate_with_rooms(&GenerationConfig::new(floor), &mut rng)
            .unwrap();
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                prop_assert!(!a.intersects(b));
            }
        }
        prop_assert!(map.is_walkable(map.downstairs_location));
        prop_assert!(map.is_walkable(map.spawn_location));
    }

    #[test]
    fn prop_inventory_never_overflows(count in 0usize..40) {
        let mut map = open_room(5);
        let potion = ItemKind::HealthPotion.spawn(EntityId(0), Position::new(0, 0));
        for _ in 0..count {
            map.spawn(&potion, Position::new(2, 2));
        }
        let player = new_player(map.allocate_entity_id(), Position::new(2, 2));
        let mut game = GameState::new_with_map(map, player, 3).unwrap();

        for attempt in 0..count {
            let outcome = game.handle_player_action(Action::PickUp).unwrap();
            if attempt < PLAYER_INVENTORY_CAPACITY {
                prop_assert_eq!(outcome, TurnOutcome::Completed);
            } else {
                prop_assert_eq!(outcome, TurnOutcome::Rejected("Your inventory is full.".to_string()));
            }
        }
        let inventory = &game.player().and_then(|p| p.actor()).unwrap().inventory;
        prop_assert_eq!(inventory.len(), count.min(PLAYER_INVENTORY_CAPACITY));
        prop_assert_eq!(game.game_map.items_at(Position::new(2, 2)).count(), count.saturating_sub(PLAYER_INVENTORY_CAPACITY));
    }
}

#[test]
fn test_bump_dispatches_on_occupancy() {
    let mut map = open_room(6);
    let template = MonsterKind::Orc.spawn(EntityId(0), Position::new(0, 0));
    let orc = map.spawn(&template, Position::new(3, 2));
    let player = new_player(map.allocate_entity_id(), Position::new(2, 2));
    let mut game = GameState::new_with_map(map, player, 1).unwrap();
    let player_id = game.player_id;

    Action::Bump { dx: 1, dy: 0 }.perform(&mut game, player_id).unwrap();
    let orc_hp = game.game_map.entity(orc).and_then(|e| e.actor()).unwrap().fighter.hp();
    assert_eq!(orc_hp, 8);
    assert_eq!(game.player_position(), Some(Position::new(2, 2)));

    Action::Bump { dx: 0, dy: 1 }.perform(&mut game, player_id).unwrap();
    assert_eq!(game.player_position(), Some(Position::new(2, 3)));
}
