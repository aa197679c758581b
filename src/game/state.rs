//! # Game State Module
//!
//! Central game state and the turn scheduler.
//!
//! [`GameState`] owns the current floor, the message log and the random
//! number generator. A turn runs as a fixed sequence of phases:
//!
//! ```text
//! Idle -> PlayerActing -> EnemyTurn -> FovRefresh -> Idle
//!                \-> (impossible) -> Idle
//! ```
//!
//! plus `AwaitingLevelUp` when the player has earned a level, and the terminal
//! `GameOver` once the player dies.

use crate::{
    ai, compute_fov, new_player, Action, ActionError, DelverError, DelverResult, EntityId,
    GameConfig, GameMap, GenerationConfig, Generator, ItemKind, LevelUpChoice, MessageCategory,
    MessageLog, Position, RoomCorridorGenerator,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Where the scheduler is inside a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for player input
    Idle,
    PlayerActing,
    EnemyTurn,
    FovRefresh,
    /// Waiting for a [`LevelUpChoice`]; other actions are rejected
    AwaitingLevelUp,
    /// The player is dead; nothing else happens
    GameOver,
}

/// What came of handing the scheduler a player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action happened and every enemy took its turn
    Completed,
    /// Nothing happened; the reason was logged
    Rejected(String),
    /// The player is dead
    GameOver,
}

/// Game completion state for handling endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// The player was killed
    PlayerDied,
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    pub enemies_defeated: u32,
    pub items_collected: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub deepest_floor: u32,
    pub steps_taken: u64,
}

/// Floor parameters and the floor counter. Only the current floor exists;
/// each descent generates a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWorld {
    pub map_width: i32,
    pub map_height: i32,
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub current_floor: u32,
    /// First id the next generated floor may hand out
    pub next_entity_id: u64,
}

impl GameWorld {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            map_width: config.map_width,
            map_height: config.map_height,
            max_rooms: config.max_rooms,
            room_min_size: config.room_min_size,
            room_max_size: config.room_max_size,
            current_floor: 0,
            next_entity_id: 0,
        }
    }

    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Generation parameters for the floor below the current one.
    pub fn next_floor_config(&self) -> GenerationConfig {
        GenerationConfig {
            map_width: self.map_width,
            map_height: self.map_height,
            max_rooms: self.max_rooms,
            room_min_size: self.room_min_size,
            room_max_size: self.room_max_size,
            current_floor: self.current_floor + 1,
            first_entity_id: self.next_entity_id,
        }
    }

    /// Builds the next floor. The floor counter only advances on success.
    pub fn generate_floor(&mut self, rng: &mut StdRng) -> DelverResult<GameMap> {
        let config = self.next_floor_config();
        let generator = RoomCorridorGenerator::new();
        let map = generator.generate(&config, rng)?;
        generator.validate(&map, &config)?;

        self.current_floor = config.current_floor;
        self.next_entity_id = map.next_entity_id();
        info!(
            "Generated floor {} ({} entities)",
            self.current_floor,
            map.entities().count()
        );
        Ok(map)
    }
}

fn unseeded_rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

/// Central game state containing all game data and systems.
///
/// # Examples
///
/// ```
/// use delver::{GameConfig, GameState, TurnPhase};
///
/// let game = GameState::new(&GameConfig::default(), 42).unwrap();
/// assert_eq!(game.phase, TurnPhase::Idle);
/// assert_eq!(game.game_world.current_floor, 1);
/// assert!(game.game_map.is_visible(game.player_position().unwrap()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// The floor the player is on
    pub game_map: GameMap,
    pub game_world: GameWorld,
    pub message_log: MessageLog,
    pub player_id: EntityId,
    /// Completed turns
    pub turn_number: u64,
    pub phase: TurnPhase,
    pub completion_state: GameCompletionState,
    pub statistics: GameStatistics,
    pub fov_radius: i32,
    /// Random number generator seed
    pub rng_seed: u64,
    #[serde(skip, default = "unseeded_rng")]
    rng: StdRng,
}

impl GameState {
    /// Starts a new game: the player with starting gear on a fresh first floor.
    pub fn new(config: &GameConfig, seed: u64) -> DelverResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = GameWorld::from_config(config);

        let mut player = equipped_player(&mut world);
        let player_id = player.id;
        let mut game_map = world.generate_floor(&mut rng)?;
        player.position = game_map.spawn_location;
        game_map.place_entity(player);

        let mut state = Self {
            game_map,
            game_world: world,
            message_log: MessageLog::new(config.message_log_capacity),
            player_id,
            turn_number: 0,
            phase: TurnPhase::Idle,
            completion_state: GameCompletionState::Playing,
            statistics: GameStatistics {
                deepest_floor: 1,
                ..GameStatistics::default()
            },
            fov_radius: config.fov_radius,
            rng_seed: seed,
            rng,
        };
        state.update_fov();
        state.log(
            "Hello and welcome, adventurer, to yet another dungeon!",
            MessageCategory::Welcome,
        );
        info!("Started new game with seed {seed}");
        Ok(state)
    }

    /// Wraps a hand-built floor. `player` must be an actor; it is placed at its
    /// own position.
    pub fn new_with_map(mut game_map: GameMap, player: crate::Entity, seed: u64) -> DelverResult<Self> {
        if player.actor().is_none() {
            return Err(DelverError::InvalidState(
                "the player entity must be an actor".to_string(),
            ));
        }
        let player_id = player.id;
        game_map.place_entity(player);

        let config = GameConfig::default();
        let mut world = GameWorld::from_config(&config);
        world.map_width = game_map.width;
        world.map_height = game_map.height;
        world.current_floor = 1;
        world.next_entity_id = game_map.next_entity_id();

        let mut state = Self {
            game_map,
            game_world: world,
            message_log: MessageLog::new(config.message_log_capacity),
            player_id,
            turn_number: 0,
            phase: TurnPhase::Idle,
            completion_state: GameCompletionState::Playing,
            statistics: GameStatistics {
                deepest_floor: 1,
                ..GameStatistics::default()
            },
            fov_radius: config.fov_radius,
            rng_seed: seed,
            rng: StdRng::seed_from_u64(seed),
        };
        state.update_fov();
        Ok(state)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Adds a message stamped with the current turn.
    pub fn log(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.message_log.add(text, category, self.turn_number);
    }

    pub fn player(&self) -> Option<&crate::Entity> {
        self.game_map.entity(self.player_id)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player().map(|p| p.position)
    }

    pub fn is_player_alive(&self) -> bool {
        self.player().map_or(false, |p| p.is_alive())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    pub fn level_up_pending(&self) -> bool {
        self.player()
            .and_then(|p| p.actor())
            .map_or(false, |a| a.is_alive() && a.level.requires_level_up())
    }

    /// Runs one full turn starting from a player action.
    ///
    /// Impossible actions are logged and return [`TurnOutcome::Rejected`]
    /// without spending a turn. Fatal errors abort the turn and are returned.
    pub fn handle_player_action(&mut self, action: Action) -> DelverResult<TurnOutcome> {
        match self.phase {
            TurnPhase::GameOver => return Ok(TurnOutcome::GameOver),
            TurnPhase::AwaitingLevelUp => {
                let reason = "Choose a level-up bonus first.".to_string();
                self.log(reason.clone(), MessageCategory::Impossible);
                return Ok(TurnOutcome::Rejected(reason));
            }
            _ => {}
        }

        self.phase = TurnPhase::PlayerActing;
        debug!("Turn {}: player performs {:?}", self.turn_number, action);
        let player_id = self.player_id;
        match action.perform(self, player_id) {
            Ok(()) => {}
            Err(ActionError::Impossible(reason)) => {
                self.log(reason.clone(), MessageCategory::Impossible);
                self.phase = TurnPhase::Idle;
                return Ok(TurnOutcome::Rejected(reason));
            }
            Err(ActionError::Fatal(err)) => {
                self.phase = TurnPhase::Idle;
                return Err(err);
            }
        }

        if self.is_player_alive() {
            self.phase = TurnPhase::EnemyTurn;
            self.handle_enemy_turns();
        }

        self.phase = TurnPhase::FovRefresh;
        self.update_fov();
        self.turn_number += 1;

        if !self.is_player_alive() {
            self.enter_game_over();
            return Ok(TurnOutcome::GameOver);
        }

        self.phase = if self.level_up_pending() {
            TurnPhase::AwaitingLevelUp
        } else {
            TurnPhase::Idle
        };
        Ok(TurnOutcome::Completed)
    }

    /// Every living non-player actor acts once, in placement order.
    fn handle_enemy_turns(&mut self) {
        let enemies: Vec<EntityId> = self
            .game_map
            .living_actors()
            .map(|e| e.id)
            .filter(|&id| id != self.player_id)
            .collect();

        for enemy in enemies {
            if !self.is_player_alive() {
                debug!("Player died; remaining enemies skip their turn");
                break;
            }
            if !self.game_map.entity(enemy).map_or(false, |e| e.is_alive()) {
                continue;
            }
            match ai::take_turn(self, enemy) {
                Ok(()) => {}
                Err(ActionError::Impossible(reason)) => {
                    debug!("{enemy} could not act: {reason}");
                }
                Err(ActionError::Fatal(err)) => {
                    warn!("{enemy} failed during its turn: {err}");
                }
            }
        }
    }

    /// Recomputes what the player can see and marks it explored.
    pub fn update_fov(&mut self) {
        let Some(origin) = self.player_position() else {
            warn!("No player on the current floor; skipping FOV refresh");
            return;
        };
        let visible = compute_fov(&self.game_map, origin, self.fov_radius);
        self.game_map.apply_visibility(visible);
    }

    fn enter_game_over(&mut self) {
        self.phase = TurnPhase::GameOver;
        self.completion_state = GameCompletionState::PlayerDied;
        info!(
            "Game over on floor {} after {} turns",
            self.game_world.current_floor, self.turn_number
        );
    }

    /// Applies a pending level-up.
    pub fn choose_level_up(&mut self, choice: LevelUpChoice) -> DelverResult<()> {
        if self.phase != TurnPhase::AwaitingLevelUp || !self.level_up_pending() {
            return Err(DelverError::InvalidAction(
                "no level-up is pending".to_string(),
            ));
        }
        let player_id = self.player_id;
        let actor = self
            .game_map
            .entity_mut(player_id)
            .and_then(|e| e.actor_mut())
            .ok_or(DelverError::EntityNotFound(player_id))?;
        let message = actor.apply_level_up(choice);
        self.log(message, MessageCategory::Progression);

        self.phase = if self.level_up_pending() {
            TurnPhase::AwaitingLevelUp
        } else {
            TurnPhase::Idle
        };
        Ok(())
    }

    /// Reduces a living actor's hit points and runs the death transition when
    /// they reach zero.
    pub fn apply_damage(
        &mut self,
        target: EntityId,
        amount: i32,
        source: Option<EntityId>,
    ) -> DelverResult<()> {
        let actor = self
            .game_map
            .entity_mut(target)
            .and_then(|e| e.actor_mut())
            .ok_or(DelverError::EntityNotFound(target))?;
        if !actor.is_alive() {
            return Ok(());
        }
        let lost = actor.fighter.take_damage(amount);
        let died = actor.fighter.hp() == 0;

        if target == self.player_id {
            self.statistics.damage_taken += lost as u64;
        } else if source == Some(self.player_id) {
            self.statistics.damage_dealt += lost as u64;
        }

        if died {
            self.kill(target, source)?;
        }
        Ok(())
    }

    fn kill(&mut self, target: EntityId, killer: Option<EntityId>) -> DelverResult<()> {
        let entity = self
            .game_map
            .entity_mut(target)
            .ok_or(DelverError::EntityNotFound(target))?;
        let name = entity.name.clone();
        let xp = entity.actor().map_or(0, |a| a.level.xp_given);
        entity.become_corpse();

        if target == self.player_id {
            self.log("You died!", MessageCategory::PlayerDeath);
            self.completion_state = GameCompletionState::PlayerDied;
        } else {
            self.log(format!("{name} is dead!"), MessageCategory::EnemyDeath);
            if killer == Some(self.player_id) {
                self.statistics.enemies_defeated += 1;
            }
        }

        if let Some(killer) = killer.filter(|&k| k != target) {
            self.award_xp(killer, xp);
        }
        Ok(())
    }

    fn award_xp(&mut self, recipient: EntityId, xp: i32) {
        let Some(actor) = self
            .game_map
            .entity_mut(recipient)
            .and_then(|e| e.actor_mut())
        else {
            return;
        };
        let before = actor.level.current_xp;
        actor.level.add_xp(xp);
        if actor.level.current_xp == before || recipient != self.player_id {
            return;
        }
        let advance = actor
            .level
            .requires_level_up()
            .then(|| actor.level.current_level + 1);

        self.log(
            format!("You gain {xp} experience points."),
            MessageCategory::Progression,
        );
        if let Some(next_level) = advance {
            self.log(
                format!("You advance to level {next_level}!"),
                MessageCategory::Progression,
            );
        }
    }

    /// Replaces the current floor with a newly generated one and moves the
    /// player onto it.
    pub fn descend(&mut self) -> DelverResult<()> {
        if self.player().is_none() {
            return Err(DelverError::EntityNotFound(self.player_id));
        }
        self.game_world.next_entity_id = self
            .game_world
            .next_entity_id
            .max(self.game_map.next_entity_id());

        let mut new_map = self.game_world.generate_floor(&mut self.rng)?;
        let mut player = self
            .game_map
            .remove_entity(self.player_id)
            .ok_or(DelverError::EntityNotFound(self.player_id))?;
        player.position = new_map.spawn_location;
        new_map.place_entity(player);
        self.game_map = new_map;

        self.statistics.deepest_floor = self
            .statistics
            .deepest_floor
            .max(self.game_world.current_floor);
        info!("Player descended to floor {}", self.game_world.current_floor);
        Ok(())
    }

    /// Saves the game state to JSON.
    pub fn save_to_json(&self) -> DelverResult<String> {
        serde_json::to_string_pretty(self).map_err(DelverError::from)
    }

    /// Loads game state from JSON and makes it ready to play.
    pub fn load_from_json(json: &str) -> DelverResult<Self> {
        let mut state: GameState = serde_json::from_str(json)?;
        state.restore_after_load()?;
        Ok(state)
    }

    /// Compact binary-safe save payload.
    pub fn to_bytes(&self) -> DelverResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(DelverError::from)
    }

    pub fn from_bytes(bytes: &[u8]) -> DelverResult<Self> {
        let mut state: GameState = serde_json::from_slice(bytes)?;
        state.restore_after_load()?;
        Ok(state)
    }

    fn restore_after_load(&mut self) -> DelverResult<()> {
        self.game_map.check_layout()?;
        if self.message_log.capacity() == 0 {
            return Err(DelverError::InvalidState(
                "saved message log has no capacity".to_string(),
            ));
        }
        if self.player().is_none() {
            return Err(DelverError::InvalidState(
                "saved game has no player on its floor".to_string(),
            ));
        }
        self.rng = StdRng::seed_from_u64(
            self.rng_seed
                .wrapping_add(self.turn_number.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        );
        self.phase = if !self.is_player_alive() {
            TurnPhase::GameOver
        } else if self.level_up_pending() {
            TurnPhase::AwaitingLevelUp
        } else {
            TurnPhase::Idle
        };
        self.update_fov();
        Ok(())
    }
}

/// The player with a dagger and leather armor already equipped.
fn equipped_player(world: &mut GameWorld) -> crate::Entity {
    let mut player = new_player(world.allocate_entity_id(), Position::new(0, 0));
    let dagger = ItemKind::Dagger.spawn(world.allocate_entity_id(), Position::new(0, 0));
    let armor = ItemKind::LeatherArmor.spawn(world.allocate_entity_id(), Position::new(0, 0));
    if let Some(actor) = player.actor_mut() {
        actor.equipment.weapon = Some(dagger.id);
        actor.equipment.armor = Some(armor.id);
        actor.inventory.items.push(dagger);
        actor.inventory.items.push(armor);
    }
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MonsterKind, Tile};

    fn small_config() -> GameConfig {
        GameConfig {
            map_width: 40,
            map_height: 25,
            max_rooms: 8,
            ..GameConfig::default()
        }
    }

    fn open_room() -> GameState {
        let mut map = GameMap::new(10, 10);
        for y in 1..9 {
            for x in 1..9 {
                map.set_tile(Position::new(x, y), Tile::floor());
            }
        }
        let player = new_player(map.allocate_entity_id(), Position::new(2, 2));
        GameState::new_with_map(map, player, 9).unwrap()
    }

    #[test]
    fn test_new_game_setup() {
        let game = GameState::new(&small_config(), 12345).unwrap();
        assert_eq!(game.turn_number, 0);
        assert_eq!(game.phase, TurnPhase::Idle);
        assert_eq!(game.rng_seed, 12345);

        let player = game.player().unwrap();
        let actor = player.actor().unwrap();
        assert_eq!(actor.power(), 4);
        assert_eq!(actor.defense(), 2);
        assert_eq!(actor.inventory.len(), 2);
        assert_eq!(player.position, game.game_map.spawn_location);
        assert_eq!(
            game.message_log.last().map(|m| m.category),
            Some(MessageCategory::Welcome)
        );
    }

    #[test]
    fn test_same_seed_same_floor() {
        let a = GameState::new(&small_config(), 77).unwrap();
        let b = GameState::new(&small_config(), 77).unwrap();
        assert_eq!(a.game_map, b.game_map);
    }

    #[test]
    fn test_impossible_action_spends_no_turn() {
        let mut game = open_room();
        let outcome = game
            .handle_player_action(Action::Move { dx: -1, dy: -1 })
            .unwrap();
        assert_eq!(outcome, TurnOutcome::Rejected("That way is blocked.".to_string()));
        assert_eq!(game.turn_number, 0);
        assert_eq!(game.phase, TurnPhase::Idle);
        assert_eq!(
            game.message_log.last().map(|m| m.category),
            Some(MessageCategory::Impossible)
        );
    }

    #[test]
    fn test_completed_turn_runs_enemies_and_refreshes_fov() {
        let mut game = open_room();
        let template = MonsterKind::Orc.spawn(EntityId(0), Position::new(0, 0));
        let orc = game.game_map.spawn(&template, Position::new(6, 2));

        let outcome = game.handle_player_action(Action::Wait).unwrap();
        assert_eq!(outcome, TurnOutcome::Completed);
        assert_eq!(game.turn_number, 1);
        assert_eq!(game.game_map.entity(orc).unwrap().position, Position::new(5, 2));
        assert!(game.game_map.is_visible(Position::new(5, 2)));
    }

    #[test]
    fn test_player_death_ends_game() {
        let mut game = open_room();
        let template = MonsterKind::Troll.spawn(EntityId(0), Position::new(0, 0));
        game.game_map.spawn(&template, Position::new(3, 2));
        let player_id = game.player_id;
        game.game_map
            .entity_mut(player_id)
            .unwrap()
            .actor_mut()
            .unwrap()
            .fighter
            .set_hp(1);

        let outcome = game.handle_player_action(Action::Wait).unwrap();
        assert_eq!(outcome, TurnOutcome::GameOver);
        assert!(game.is_game_over());
        assert_eq!(game.completion_state, GameCompletionState::PlayerDied);
        assert_eq!(game.player().unwrap().glyph, '%');

        let again = game.handle_player_action(Action::Wait).unwrap();
        assert_eq!(again, TurnOutcome::GameOver);
        assert_eq!(game.turn_number, 1);
    }

    #[test]
    fn test_level_up_gate() {
        let mut game = open_room();
        let player_id = game.player_id;
        game.game_map
            .entity_mut(player_id)
            .unwrap()
            .actor_mut()
            .unwrap()
            .level
            .add_xp(351);

        assert!(game.choose_level_up(LevelUpChoice::Strength).is_err());
        game.handle_player_action(Action::Wait).unwrap();
        assert_eq!(game.phase, TurnPhase::AwaitingLevelUp);

        let outcome = game.handle_player_action(Action::Wait).unwrap();
        assert!(matches!(outcome, TurnOutcome::Rejected(_)));

        game.choose_level_up(LevelUpChoice::Strength).unwrap();
        assert_eq!(game.phase, TurnPhase::Idle);
        let actor = game.player().unwrap().actor().unwrap();
        assert_eq!(actor.fighter.base_power, 3);
        assert_eq!(actor.level.current_level, 2);
        assert_eq!(game.message_log.last().unwrap().text, "You feel stronger!");
    }

    #[test]
    fn test_descend_builds_new_floor() {
        let mut game = GameState::new(&small_config(), 4).unwrap();
        let stairs = game.game_map.downstairs_location;
        let player_id = game.player_id;
        game.game_map.entity_mut(player_id).unwrap().position = stairs;

        let outcome = game.handle_player_action(Action::TakeStairs).unwrap();
        assert!(matches!(outcome, TurnOutcome::Completed | TurnOutcome::GameOver));
        assert_eq!(game.game_world.current_floor, 2);
        assert_eq!(game.statistics.deepest_floor, 2);
        assert_eq!(game.player_position(), Some(game.game_map.spawn_location));
        let inventory = &game.player().unwrap().actor().unwrap().inventory;
        assert_eq!(inventory.len(), 2);
        assert!(game
            .message_log
            .iter()
            .any(|m| m.text == "You descend the staircase."));
    }

    #[test]
    fn test_json_round_trip_restores_fov() {
        let game = GameState::new(&small_config(), 99).unwrap();
        let json = game.save_to_json().unwrap();
        let loaded = GameState::load_from_json(&json).unwrap();
        assert_eq!(loaded.game_map, game.game_map);
        assert_eq!(loaded.message_log, game.message_log);
        assert_eq!(loaded.phase, TurnPhase::Idle);
        let pos = loaded.player_position().unwrap();
        assert!(loaded.game_map.is_visible(pos));
    }

    fn tampered_save(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let game = GameState::new(&small_config(), 31).unwrap();
        let mut value = serde_json::to_value(&game).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn test_load_rejects_mismatched_map_dimensions() {
        let json = tampered_save(|v| v["game_map"]["width"] = 500.into());
        assert!(matches!(
            GameState::load_from_json(&json),
            Err(DelverError::InvalidState(_))
        ));
    }

    #[test]
    fn test_load_rejects_entity_off_the_map() {
        let json = tampered_save(|v| {
            v["game_map"]["entities"][0]["position"]["x"] = 9_999.into();
        });
        assert!(matches!(
            GameState::load_from_json(&json),
            Err(DelverError::InvalidState(_))
        ));
    }

    #[test]
    fn test_load_rejects_zero_capacity_log() {
        let json = tampered_save(|v| v["message_log"]["capacity"] = 0.into());
        assert!(matches!(
            GameState::load_from_json(&json),
            Err(DelverError::InvalidState(_))
        ));
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(
            GameState::load_from_json("{ not json"),
            Err(DelverError::Serde(_))
        ));
    }
}
