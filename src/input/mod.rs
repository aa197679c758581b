//! # Input Module
//!
//! Input handling and command parsing for player interactions.

pub mod commands;

pub use commands::*;

use crate::{
    Action, DelverError, DelverResult, Direction, Entity, EntityId, GameState, LevelUpChoice,
    Position, Targeting,
};

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move, or attack whatever stands there
    Move(Direction),
    /// Wait/rest for one turn
    Wait,
    /// Pick up item at current position
    PickUp,
    Drop { slot: usize },
    /// Use an item, optionally at a target tile
    Use { slot: usize, target: Option<Position> },
    Equip { slot: usize },
    /// Take the stairs down
    Descend,
    ShowInventory,
    /// Show the full message log
    ViewHistory,
    /// Describe what is at a map position
    Look(Position),
    /// Show level, experience and base stats
    Character,
    LevelUp(LevelUpChoice),
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}

/// Converts player intents into actions for the current game.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{Action, Direction, GameConfig, GameState, InputHandler, PlayerInput};
    ///
    /// let game = GameState::new(&GameConfig::default(), 3).unwrap();
    /// let handler = InputHandler::new();
    /// let action = handler.input_to_action(PlayerInput::Move(Direction::West), &game).unwrap();
    /// assert_eq!(action, Some(Action::Bump { dx: -1, dy: 0 }));
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Converts player input to a game action.
    ///
    /// Inputs that are not turn actions (menus, quitting, level-up choices)
    /// give `Ok(None)`. An empty inventory slot is an error and spends no turn.
    pub fn input_to_action(
        &self,
        input: PlayerInput,
        game_state: &GameState,
    ) -> DelverResult<Option<Action>> {
        let action = match input {
            PlayerInput::Move(direction) => {
                let delta = direction.to_delta();
                Action::Bump {
                    dx: delta.x,
                    dy: delta.y,
                }
            }
            PlayerInput::Wait => Action::Wait,
            PlayerInput::PickUp => Action::PickUp,
            PlayerInput::Descend => Action::TakeStairs,
            PlayerInput::Drop { slot } => Action::Drop {
                item: self.item_in_slot(game_state, slot)?,
            },
            PlayerInput::Use { slot, target } => {
                let item = self.entity_in_slot(game_state, slot)?;
                let targeting = item
                    .item()
                    .and_then(|i| i.consumable())
                    .map_or(Targeting::None, |c| c.targeting());
                if target.is_none() && targeting != Targeting::None {
                    let letter = slot_letter(slot).unwrap_or('?');
                    return Err(DelverError::InvalidAction(format!(
                        "Choose a target: u {letter} <x> <y>"
                    )));
                }
                Action::UseItem {
                    item: item.id,
                    target,
                }
            }
            PlayerInput::Equip { slot } => Action::Equip {
                item: self.item_in_slot(game_state, slot)?,
            },
            PlayerInput::ShowInventory
            | PlayerInput::ViewHistory
            | PlayerInput::Look(_)
            | PlayerInput::Character
            | PlayerInput::LevelUp(_)
            | PlayerInput::Help
            | PlayerInput::Quit => return Ok(None),
        };
        Ok(Some(action))
    }

    fn item_in_slot(&self, game_state: &GameState, slot: usize) -> DelverResult<EntityId> {
        self.entity_in_slot(game_state, slot).map(|item| item.id)
    }

    fn entity_in_slot<'a>(
        &self,
        game_state: &'a GameState,
        slot: usize,
    ) -> DelverResult<&'a Entity> {
        let player = game_state
            .player()
            .and_then(|p| p.actor())
            .ok_or_else(|| DelverError::InvalidState("No player found".to_string()))?;
        player.inventory.slot(slot).ok_or_else(|| {
            let letter = slot_letter(slot).unwrap_or('?');
            DelverError::InvalidAction(format!("There is no item in slot {letter}."))
        })
    }
}
