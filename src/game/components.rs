//! # Actor Components
//!
//! Combat stats, inventory, equipment slots and experience levels. Components
//! are plain data; the rules that move entities between them live in
//! [`crate::game::actions`] and [`crate::game::state`].

use crate::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Hit points and base combat stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub max_hp: i32,
    hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
}

impl Fighter {
    /// Creates a fighter at full health.
    pub fn new(hp: i32, base_defense: i32, base_power: i32) -> Self {
        Self {
            max_hp: hp,
            hp,
            base_defense,
            base_power,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Sets hit points, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.max_hp);
    }

    /// Recovers up to `amount` hit points and returns how many were recovered.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::Fighter;
    ///
    /// let mut fighter = Fighter::new(30, 1, 2);
    /// fighter.set_hp(27);
    /// assert_eq!(fighter.heal(10), 3);
    /// assert_eq!(fighter.hp(), 30);
    /// ```
    pub fn heal(&mut self, amount: i32) -> i32 {
        if amount <= 0 || self.hp >= self.max_hp {
            return 0;
        }
        let before = self.hp;
        self.set_hp(self.hp + amount);
        self.hp - before
    }

    /// Removes up to `amount` hit points and returns how many were lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let before = self.hp;
        self.set_hp(self.hp - amount);
        before - self.hp
    }
}

/// Items carried by an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    pub items: Vec<Entity>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// The item in inventory slot `index` (0 is `a`).
    pub fn slot(&self, index: usize) -> Option<&Entity> {
        self.items.get(index)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}

/// Equipment slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// Stat bonuses granted by an item while it is equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

/// Which inventory items are equipped, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<EntityId>,
    pub armor: Option<EntityId>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<EntityId>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = item,
            EquipmentSlot::Armor => self.armor = item,
        }
    }

    pub fn is_equipped(&self, id: EntityId) -> bool {
        self.weapon == Some(id) || self.armor == Some(id)
    }

    /// Clears whichever slot holds `id`. Returns whether anything changed.
    pub fn unequip(&mut self, id: EntityId) -> bool {
        if self.weapon == Some(id) {
            self.weapon = None;
            true
        } else if self.armor == Some(id) {
            self.armor = None;
            true
        } else {
            false
        }
    }

    pub fn equipped_ids(&self) -> impl Iterator<Item = EntityId> {
        self.weapon.into_iter().chain(self.armor)
    }
}

/// Experience and level progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub current_level: i32,
    pub current_xp: i32,
    pub level_up_base: i32,
    pub level_up_factor: i32,
    /// Experience awarded to whoever kills this actor
    pub xp_given: i32,
}

impl Level {
    pub fn new(level_up_base: i32, xp_given: i32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor: 150,
            xp_given,
        }
    }

    /// Experience needed before the next level-up becomes due.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::Level;
    ///
    /// let level = Level::new(200, 0);
    /// assert_eq!(level.experience_to_next_level(), 350);
    /// ```
    pub fn experience_to_next_level(&self) -> i32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.current_xp > self.experience_to_next_level()
    }

    pub fn add_xp(&mut self, xp: i32) {
        if xp > 0 && self.level_up_base > 0 {
            self.current_xp += xp;
        }
    }

    /// Spends the threshold experience and advances one level.
    pub fn increase_level(&mut self) {
        self.current_xp -= self.experience_to_next_level();
        self.current_level += 1;
    }
}

/// Stat a player can raise when a level-up is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelUpChoice {
    /// +20 max hp, healed by the same amount
    Constitution,
    /// +1 power
    Strength,
    /// +1 defense
    Agility,
}

impl LevelUpChoice {
    pub fn all() -> [LevelUpChoice; 3] {
        [
            LevelUpChoice::Constitution,
            LevelUpChoice::Strength,
            LevelUpChoice::Agility,
        ]
    }

    pub fn description(self) -> &'static str {
        match self {
            LevelUpChoice::Constitution => "Constitution (+20 HP)",
            LevelUpChoice::Strength => "Strength (+1 attack)",
            LevelUpChoice::Agility => "Agility (+1 defense)",
        }
    }
}
