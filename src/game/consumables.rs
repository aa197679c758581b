//! # Consumables
//!
//! Single-use item effects. Each effect validates its target completely
//! before touching the state; the item is removed from the user's inventory
//! only after the effect has been applied.

use crate::game::actions::{entity, entity_mut};
use crate::{ActionError, ActionResult, Ai, EntityId, GameState, MessageCategory, Position};
use serde::{Deserialize, Serialize};

/// What a consumable does when used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Consumable {
    /// Restores hit points, never beyond the maximum
    Healing { amount: i32 },
    /// Strikes the closest visible actor other than the user
    LightningDamage { damage: i32, max_range: f64 },
    /// Makes the targeted actor stumble around
    Confusion { number_of_turns: i32 },
    /// Damages every actor around the targeted tile, the user included
    FireballDamage { damage: i32, radius: f64 },
}

/// How a front end should pick a target before using an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Targeting {
    /// No target needed
    None,
    /// A single tile holding an actor
    Single,
    /// A tile at the centre of an area
    Area { radius: f64 },
}

impl Consumable {
    pub fn targeting(&self) -> Targeting {
        match *self {
            Consumable::Healing { .. } | Consumable::LightningDamage { .. } => Targeting::None,
            Consumable::Confusion { .. } => Targeting::Single,
            Consumable::FireballDamage { radius, .. } => Targeting::Area { radius },
        }
    }

    /// Applies the effect for `consumer` using the inventory item `item`.
    pub fn activate(
        &self,
        state: &mut GameState,
        consumer: EntityId,
        item: EntityId,
        target: Position,
    ) -> ActionResult {
        match *self {
            Consumable::Healing { amount } => heal(state, consumer, item, amount)?,
            Consumable::LightningDamage { damage, max_range } => {
                lightning(state, consumer, damage, max_range)?
            }
            Consumable::Confusion { number_of_turns } => {
                confuse(state, consumer, target, number_of_turns)?
            }
            Consumable::FireballDamage { damage, radius } => {
                fireball(state, consumer, target, damage, radius)?
            }
        }
        consume(state, consumer, item)
    }
}

fn item_name(state: &GameState, consumer: EntityId, item: EntityId) -> Result<String, ActionError> {
    entity(state, consumer)?
        .actor()
        .and_then(|actor| actor.inventory.get(item))
        .map(|e| e.name.clone())
        .ok_or_else(|| ActionError::impossible("You are not carrying that."))
}

fn heal(state: &mut GameState, consumer: EntityId, item: EntityId, amount: i32) -> ActionResult {
    let name = item_name(state, consumer, item)?;
    let fighter = &mut entity_mut(state, consumer)?
        .actor_mut()
        .ok_or_else(|| ActionError::impossible("Nothing happens."))?
        .fighter;
    if fighter.hp() >= fighter.max_hp {
        return Err(ActionError::impossible("Your health is already full."));
    }
    let recovered = fighter.heal(amount);
    state.log(
        format!("You consume the {name}, and recover {recovered} HP!"),
        MessageCategory::HealthRecovered,
    );
    Ok(())
}

fn lightning(state: &mut GameState, consumer: EntityId, damage: i32, max_range: f64) -> ActionResult {
    let origin = entity(state, consumer)?.position;
    let mut closest_distance = max_range + 1.0;
    let mut target = None;
    for actor in state.game_map.living_actors() {
        if actor.id == consumer || !state.game_map.is_visible(actor.position) {
            continue;
        }
        let distance = origin.euclidean_distance(actor.position);
        if distance < closest_distance {
            closest_distance = distance;
            target = Some((actor.id, actor.name.clone()));
        }
    }

    let (target, name) =
        target.ok_or_else(|| ActionError::impossible("No enemy is close enough to strike."))?;
    state.log(
        format!("A lightning bolt strikes the {name} with a loud thunder, for {damage} damage!"),
        MessageCategory::PlayerAttack,
    );
    state.apply_damage(target, damage, Some(consumer))?;
    Ok(())
}

fn confuse(state: &mut GameState, consumer: EntityId, target: Position, turns: i32) -> ActionResult {
    if !state.game_map.is_visible(target) {
        return Err(ActionError::impossible(
            "You cannot target an area that you cannot see.",
        ));
    }
    let victim = state
        .game_map
        .actor_at(target)
        .ok_or_else(|| ActionError::impossible("You must select an enemy to target."))?;
    if victim.id == consumer {
        return Err(ActionError::impossible("You cannot confuse yourself!"));
    }
    let (victim_id, name) = (victim.id, victim.name.clone());

    let actor = entity_mut(state, victim_id)?
        .actor_mut()
        .ok_or_else(|| ActionError::impossible("You must select an enemy to target."))?;
    if let Some(previous) = actor.ai.take() {
        actor.ai = Some(Ai::Confused {
            previous: Box::new(previous),
            turns_remaining: turns,
        });
    }
    state.log(
        format!("The eyes of the {name} look vacant, as it starts to stumble around!"),
        MessageCategory::StatusEffect,
    );
    Ok(())
}

fn fireball(
    state: &mut GameState,
    consumer: EntityId,
    target: Position,
    damage: i32,
    radius: f64,
) -> ActionResult {
    if !state.game_map.is_visible(target) {
        return Err(ActionError::impossible(
            "You cannot target an area that you cannot see.",
        ));
    }
    let victims: Vec<(EntityId, String)> = state
        .game_map
        .living_actors()
        .filter(|actor| actor.position.euclidean_distance(target) <= radius)
        .map(|actor| (actor.id, actor.name.clone()))
        .collect();
    if victims.is_empty() {
        return Err(ActionError::impossible("There are no targets in the radius."));
    }

    for (victim, name) in victims {
        state.log(
            format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
            MessageCategory::PlayerAttack,
        );
        state.apply_damage(victim, damage, Some(consumer))?;
    }
    Ok(())
}

fn consume(state: &mut GameState, consumer: EntityId, item: EntityId) -> ActionResult {
    if let Some(actor) = entity_mut(state, consumer)?.actor_mut() {
        actor.inventory.remove(item);
    }
    Ok(())
}
