//! # Entities
//!
//! Everything that stands on a floor or sits in an inventory is an [`Entity`]:
//! a plain value with an id, a position, display metadata and a kind-specific
//! payload. Templates are spawned by copying, so no two entities ever share
//! component state.

use crate::{
    color, Ai, Consumable, EntityId, Equipment, Equippable, Fighter, Inventory, Level, Position,
    Rgb,
};
use serde::{Deserialize, Serialize};

/// Default player inventory size, one slot per letter.
pub const PLAYER_INVENTORY_CAPACITY: usize = 26;

/// Draw order when several entities share a tile; later variants draw on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

/// A game object placed on a floor or held in an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub kind: EntityKind,
}

/// Kind-specific payload of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Actor(Box<Actor>),
    Item(Item),
}

/// Something that fights, carries items and takes turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub fighter: Fighter,
    /// `None` once the actor has died
    pub ai: Option<Ai>,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub level: Level,
}

/// An item is either used up or worn, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Consumable(Consumable),
    Equippable(Equippable),
}

impl Item {
    pub fn equippable(&self) -> Option<&Equippable> {
        match self {
            Item::Equippable(equippable) => Some(equippable),
            Item::Consumable(_) => None,
        }
    }

    pub fn consumable(&self) -> Option<&Consumable> {
        match self {
            Item::Consumable(consumable) => Some(consumable),
            Item::Equippable(_) => None,
        }
    }
}

impl Actor {
    pub fn new(fighter: Fighter, ai: Ai, inventory_capacity: usize, level: Level) -> Self {
        Self {
            fighter,
            ai: Some(ai),
            inventory: Inventory::new(inventory_capacity),
            equipment: Equipment::default(),
            level,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    fn equipped_bonuses(&self) -> impl Iterator<Item = &Equippable> {
        self.equipment
            .equipped_ids()
            .filter_map(|id| self.inventory.get(id))
            .filter_map(|entity| entity.item())
            .filter_map(Item::equippable)
    }

    pub fn power_bonus(&self) -> i32 {
        self.equipped_bonuses().map(|e| e.power_bonus).sum()
    }

    pub fn defense_bonus(&self) -> i32 {
        self.equipped_bonuses().map(|e| e.defense_bonus).sum()
    }

    /// Attack strength including equipment.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{new_player, EntityId, ItemKind, Position};
    ///
    /// let mut player = new_player(EntityId(0), Position::new(1, 1));
    /// let sword = ItemKind::Sword.spawn(EntityId(1), Position::new(1, 1));
    /// let actor = player.actor_mut().unwrap();
    /// assert_eq!(actor.power(), 2);
    /// actor.inventory.items.push(sword);
    /// actor.equipment.weapon = Some(EntityId(1));
    /// assert_eq!(actor.power(), 6);
    /// ```
    pub fn power(&self) -> i32 {
        self.fighter.base_power + self.power_bonus()
    }

    /// Damage reduction including equipment.
    pub fn defense(&self) -> i32 {
        self.fighter.base_defense + self.defense_bonus()
    }

    /// Applies a level-up choice and returns the message describing it.
    pub fn apply_level_up(&mut self, choice: crate::LevelUpChoice) -> &'static str {
        self.level.increase_level();
        match choice {
            crate::LevelUpChoice::Constitution => {
                self.fighter.max_hp += 20;
                self.fighter.heal(20);
                "Your health improves!"
            }
            crate::LevelUpChoice::Strength => {
                self.fighter.base_power += 1;
                "You feel stronger!"
            }
            crate::LevelUpChoice::Agility => {
                self.fighter.base_defense += 1;
                "Your movements are getting swifter!"
            }
        }
    }
}

impl Entity {
    /// Creates a blocking actor entity.
    pub fn new_actor(
        id: EntityId,
        position: Position,
        glyph: char,
        color: Rgb,
        name: impl Into<String>,
        actor: Actor,
    ) -> Self {
        Self {
            id,
            position,
            glyph,
            color,
            name: name.into(),
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            kind: EntityKind::Actor(Box::new(actor)),
        }
    }

    /// Creates a non-blocking item entity.
    pub fn new_item(
        id: EntityId,
        position: Position,
        glyph: char,
        color: Rgb,
        name: impl Into<String>,
        item: Item,
    ) -> Self {
        Self {
            id,
            position,
            glyph,
            color,
            name: name.into(),
            blocks_movement: false,
            render_order: RenderOrder::Item,
            kind: EntityKind::Item(item),
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor.as_ref()),
            EntityKind::Item(_) => None,
        }
    }

    pub fn actor_mut(&mut self) -> Option<&mut Actor> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor.as_mut()),
            EntityKind::Item(_) => None,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.kind {
            EntityKind::Item(item) => Some(item),
            EntityKind::Actor(_) => None,
        }
    }

    /// Living actors only; items and corpses are never alive.
    pub fn is_alive(&self) -> bool {
        self.actor().map_or(false, Actor::is_alive)
    }

    /// A deep copy of this template with a fresh id and position.
    pub fn spawn_copy(&self, id: EntityId, position: Position) -> Entity {
        Entity {
            id,
            position,
            ..self.clone()
        }
    }

    /// Turns a dead actor into a corpse: it stops blocking, loses its AI and
    /// draws beneath items.
    pub fn become_corpse(&mut self) {
        self.glyph = '%';
        self.color = color::CORPSE_RED;
        self.blocks_movement = false;
        self.render_order = RenderOrder::Corpse;
        self.name = format!("remains of {}", self.name);
        if let Some(actor) = self.actor_mut() {
            actor.ai = None;
        }
    }
}

/// Creates the player without starting gear.
pub fn new_player(id: EntityId, position: Position) -> Entity {
    Entity::new_actor(
        id,
        position,
        '@',
        color::WHITE,
        "Player",
        Actor::new(
            Fighter::new(30, 1, 2),
            Ai::PlayerControlled,
            PLAYER_INVENTORY_CAPACITY,
            Level::new(200, 0),
        ),
    )
}
