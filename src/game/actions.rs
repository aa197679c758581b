//! # Action System
//!
//! Every intent, whether it comes from the player's input or from a monster's
//! AI, is an [`Action`] performed on behalf of one actor. An action either
//! succeeds (mutating the [`GameState`]) or fails with
//! [`ActionError::Impossible`], in which case nothing has changed and no turn
//! is spent.

use crate::{
    DelverError, Entity, EntityId, GameState, Item, MessageCategory, Position,
};
use serde::{Deserialize, Serialize};

/// Why an action did not happen.
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    /// A recoverable precondition failure, reported to the player.
    #[error("{0}")]
    Impossible(String),

    /// An unexpected condition such as a dangling entity id.
    #[error(transparent)]
    Fatal(#[from] DelverError),
}

impl ActionError {
    pub fn impossible(reason: impl Into<String>) -> Self {
        ActionError::Impossible(reason.into())
    }
}

/// Result of performing an action.
pub type ActionResult = Result<(), ActionError>;

/// Something an actor can attempt on its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Do nothing for a turn
    Wait,
    /// Attack whatever stands in that direction, or step there
    Bump { dx: i32, dy: i32 },
    Move { dx: i32, dy: i32 },
    Melee { dx: i32, dy: i32 },
    /// Pick up one item from the actor's tile
    PickUp,
    Drop { item: EntityId },
    /// Use an inventory item; the target defaults to the actor's tile
    UseItem {
        item: EntityId,
        target: Option<Position>,
    },
    /// Equip or unequip an inventory item
    Equip { item: EntityId },
    TakeStairs,
}

impl Action {
    /// Resolves the action for `actor`.
    ///
    /// All preconditions are checked before anything is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{new_player, Action, ActionError, EntityId, GameMap, GameState, Position, Tile};
    ///
    /// let mut map = GameMap::new(5, 5);
    /// map.set_tile(Position::new(2, 2), Tile::floor());
    /// let player = new_player(map.allocate_entity_id(), Position::new(2, 2));
    /// let mut state = GameState::new_with_map(map, player, 1).unwrap();
    ///
    /// let player_id = state.player_id;
    /// let result = Action::Move { dx: 1, dy: 0 }.perform(&mut state, player_id);
    /// assert!(matches!(result, Err(ActionError::Impossible(_))));
    /// ```
    pub fn perform(&self, state: &mut GameState, actor: EntityId) -> ActionResult {
        match *self {
            Action::Wait => Ok(()),
            Action::Bump { dx, dy } => perform_bump(state, actor, dx, dy),
            Action::Move { dx, dy } => perform_move(state, actor, dx, dy),
            Action::Melee { dx, dy } => perform_melee(state, actor, dx, dy),
            Action::PickUp => perform_pick_up(state, actor),
            Action::Drop { item } => perform_drop(state, actor, item),
            Action::UseItem { item, target } => perform_use_item(state, actor, item, target),
            Action::Equip { item } => perform_equip(state, actor, item),
            Action::TakeStairs => perform_take_stairs(state, actor),
        }
    }

    /// Whether this action is a step or attack in some direction.
    pub fn direction(&self) -> Option<(i32, i32)> {
        match *self {
            Action::Bump { dx, dy } | Action::Move { dx, dy } | Action::Melee { dx, dy } => {
                Some((dx, dy))
            }
            _ => None,
        }
    }
}

pub(crate) fn entity(state: &GameState, id: EntityId) -> Result<&Entity, ActionError> {
    state
        .game_map
        .entity(id)
        .ok_or(ActionError::Fatal(DelverError::EntityNotFound(id)))
}

pub(crate) fn entity_mut(state: &mut GameState, id: EntityId) -> Result<&mut Entity, ActionError> {
    state
        .game_map
        .entity_mut(id)
        .ok_or(ActionError::Fatal(DelverError::EntityNotFound(id)))
}

fn not_an_actor(id: EntityId) -> ActionError {
    ActionError::Fatal(DelverError::InvalidState(format!("{id} is not an actor")))
}

/// Uppercases the first letter for messages that start with a name.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn perform_bump(state: &mut GameState, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let destination = entity(state, actor)?.position.offset(dx, dy);
    if state.game_map.actor_at(destination).is_some() {
        perform_melee(state, actor, dx, dy)
    } else {
        perform_move(state, actor, dx, dy)
    }
}

fn perform_move(state: &mut GameState, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let destination = entity(state, actor)?.position.offset(dx, dy);
    let map = &state.game_map;
    if !map.in_bounds(destination)
        || !map.is_walkable(destination)
        || map.blocking_entity_at(destination).is_some()
    {
        return Err(ActionError::impossible("That way is blocked."));
    }

    entity_mut(state, actor)?.position = destination;
    if actor == state.player_id {
        state.statistics.steps_taken += 1;
    }
    Ok(())
}

fn perform_melee(state: &mut GameState, actor: EntityId, dx: i32, dy: i32) -> ActionResult {
    let attacker = entity(state, actor)?;
    let destination = attacker.position.offset(dx, dy);
    let power = attacker.actor().ok_or_else(|| not_an_actor(actor))?.power();
    let attacker_name = attacker.name.clone();

    let target = state
        .game_map
        .actor_at(destination)
        .ok_or_else(|| ActionError::impossible("Nothing to attack."))?;
    let target_id = target.id;
    let target_name = target.name.clone();
    let defense = target.actor().ok_or_else(|| not_an_actor(target_id))?.defense();

    let damage = power - defense;
    let description = format!("{} attacks {}", capitalize(&attacker_name), target_name);
    let category = if actor == state.player_id {
        MessageCategory::PlayerAttack
    } else {
        MessageCategory::EnemyAttack
    };

    if damage > 0 {
        state.log(format!("{description} for {damage} hit points."), category);
        state.apply_damage(target_id, damage, Some(actor))?;
    } else {
        state.log(format!("{description} but does no damage."), category);
    }
    Ok(())
}

fn perform_pick_up(state: &mut GameState, actor: EntityId) -> ActionResult {
    let picker = entity(state, actor)?;
    let position = picker.position;
    let full = picker
        .actor()
        .ok_or_else(|| not_an_actor(actor))?
        .inventory
        .is_full();

    let item_id = state
        .game_map
        .items_at(position)
        .map(|item| item.id)
        .next()
        .ok_or_else(|| ActionError::impossible("There is nothing here to pick up."))?;
    if full {
        return Err(ActionError::impossible("Your inventory is full."));
    }

    let item = state
        .game_map
        .remove_entity(item_id)
        .ok_or(ActionError::Fatal(DelverError::EntityNotFound(item_id)))?;
    let name = item.name.clone();
    entity_mut(state, actor)?
        .actor_mut()
        .ok_or_else(|| not_an_actor(actor))?
        .inventory
        .items
        .push(item);

    if actor == state.player_id {
        state.statistics.items_collected += 1;
    }
    state.log(format!("You picked up the {name}!"), MessageCategory::Info);
    Ok(())
}

fn perform_drop(state: &mut GameState, actor: EntityId, item_id: EntityId) -> ActionResult {
    let holder = entity(state, actor)?;
    let position = holder.position;
    let carried = holder
        .actor()
        .ok_or_else(|| not_an_actor(actor))?
        .inventory
        .get(item_id)
        .ok_or_else(|| ActionError::impossible("You are not carrying that."))?;
    let name = carried.name.clone();

    let holder = entity_mut(state, actor)?
        .actor_mut()
        .ok_or_else(|| not_an_actor(actor))?;
    let was_equipped = holder.equipment.unequip(item_id);
    let mut item = holder
        .inventory
        .remove(item_id)
        .ok_or(ActionError::Fatal(DelverError::EntityNotFound(item_id)))?;
    item.position = position;
    state.game_map.place_entity(item);

    if was_equipped {
        state.log(format!("You remove the {name}."), MessageCategory::Info);
    }
    state.log(format!("You dropped the {name}."), MessageCategory::Info);
    Ok(())
}

fn perform_use_item(
    state: &mut GameState,
    actor: EntityId,
    item_id: EntityId,
    target: Option<Position>,
) -> ActionResult {
    let user = entity(state, actor)?;
    let position = user.position;
    let item = user
        .actor()
        .ok_or_else(|| not_an_actor(actor))?
        .inventory
        .get(item_id)
        .ok_or_else(|| ActionError::impossible("You are not carrying that."))?;

    match item.item() {
        Some(Item::Consumable(consumable)) => {
            let consumable = consumable.clone();
            consumable.activate(state, actor, item_id, target.unwrap_or(position))
        }
        Some(Item::Equippable(_)) => perform_equip(state, actor, item_id),
        None => Err(ActionError::impossible("That cannot be used.")),
    }
}

fn perform_equip(state: &mut GameState, actor: EntityId, item_id: EntityId) -> ActionResult {
    let holder = entity(state, actor)?
        .actor()
        .ok_or_else(|| not_an_actor(actor))?;
    let item = holder
        .inventory
        .get(item_id)
        .ok_or_else(|| ActionError::impossible("You are not carrying that."))?;
    let slot = item
        .item()
        .and_then(Item::equippable)
        .ok_or_else(|| ActionError::impossible("That cannot be equipped."))?
        .slot;
    let name = item.name.clone();
    let previous = holder
        .equipment
        .get(slot)
        .filter(|&id| id != item_id)
        .and_then(|id| holder.inventory.get(id))
        .map(|e| e.name.clone());
    let already_equipped = holder.equipment.get(slot) == Some(item_id);

    let holder = entity_mut(state, actor)?
        .actor_mut()
        .ok_or_else(|| not_an_actor(actor))?;
    if already_equipped {
        holder.equipment.set(slot, None);
        state.log(format!("You remove the {name}."), MessageCategory::Info);
    } else {
        holder.equipment.set(slot, Some(item_id));
        if let Some(previous) = previous {
            state.log(format!("You remove the {previous}."), MessageCategory::Info);
        }
        state.log(format!("You equip the {name}."), MessageCategory::Info);
    }
    Ok(())
}

fn perform_take_stairs(state: &mut GameState, actor: EntityId) -> ActionResult {
    let position = entity(state, actor)?.position;
    if position != state.game_map.downstairs_location {
        return Err(ActionError::impossible("There are no stairs here."));
    }
    if actor != state.player_id {
        return Err(ActionError::impossible("Only the player can take the stairs."));
    }

    state.descend()?;
    state.log("You descend the staircase.", MessageCategory::Descend);
    Ok(())
}
