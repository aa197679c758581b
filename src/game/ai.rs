//! # Monster AI
//!
//! Decides what a non-player actor does on its turn and performs it through
//! the same [`Action`] pipeline the player uses.

use crate::game::actions::{capitalize, entity, entity_mut};
use crate::{
    is_visible_from, Action, ActionError, ActionResult, Direction, EntityId, GameState,
    MessageCategory, Position,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Behaviour attached to a living actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ai {
    /// Driven by input; never acts on its own
    PlayerControlled,
    /// Chases and attacks the player, remembering the last path it planned
    Hostile { path: Vec<Position> },
    /// Stumbles randomly, then reverts to `previous`
    Confused {
        previous: Box<Ai>,
        turns_remaining: i32,
    },
}

impl Ai {
    pub fn hostile() -> Self {
        Ai::Hostile { path: Vec::new() }
    }
}

/// Runs one turn for `actor`.
///
/// Dead actors and player-controlled actors do nothing.
pub fn take_turn(state: &mut GameState, actor: EntityId) -> ActionResult {
    let ai = entity(state, actor)?.actor().and_then(|a| a.ai.clone());
    match ai {
        Some(Ai::Hostile { path }) => hostile_turn(state, actor, path),
        Some(Ai::Confused {
            previous,
            turns_remaining,
        }) => confused_turn(state, actor, *previous, turns_remaining),
        Some(Ai::PlayerControlled) | None => Ok(()),
    }
}

fn set_ai(state: &mut GameState, actor: EntityId, ai: Ai) -> ActionResult {
    if let Some(a) = entity_mut(state, actor)?.actor_mut() {
        if a.ai.is_some() {
            a.ai = Some(ai);
        }
    }
    Ok(())
}

fn hostile_turn(state: &mut GameState, actor: EntityId, mut path: Vec<Position>) -> ActionResult {
    let position = entity(state, actor)?.position;
    let target = entity(state, state.player_id)?.position;
    let dx = target.x - position.x;
    let dy = target.y - position.y;

    if is_visible_from(&state.game_map, position, target, state.fov_radius) {
        if position.chebyshev_distance(target) <= 1 {
            return Action::Melee { dx, dy }.perform(state, actor);
        }
        path = state.game_map.cost_grid().find_path(position, target);
        log::debug!("{actor} planned a path of {} steps toward the player", path.len());
    }

    if path.is_empty() {
        set_ai(state, actor, Ai::Hostile { path })?;
        return Action::Wait.perform(state, actor);
    }

    let next = path.remove(0);
    set_ai(state, actor, Ai::Hostile { path })?;
    Action::Move {
        dx: next.x - position.x,
        dy: next.y - position.y,
    }
    .perform(state, actor)
}

fn confused_turn(
    state: &mut GameState,
    actor: EntityId,
    previous: Ai,
    turns_remaining: i32,
) -> ActionResult {
    if turns_remaining <= 0 {
        let name = entity(state, actor)?.name.clone();
        set_ai(state, actor, previous)?;
        state.log(
            format!("The {name} is no longer confused."),
            MessageCategory::StatusEffect,
        );
        return Ok(());
    }

    set_ai(
        state,
        actor,
        Ai::Confused {
            previous: Box::new(previous),
            turns_remaining: turns_remaining - 1,
        },
    )?;
    let direction = *Direction::all()
        .choose(state.rng_mut())
        .ok_or_else(|| ActionError::impossible("No direction to stumble in."))?;
    let delta = direction.to_delta();
    log::debug!("{} stumbles {:?}", capitalize(&entity(state, actor)?.name), direction);
    Action::Bump {
        dx: delta.x,
        dy: delta.y,
    }
    .perform(state, actor)
}
