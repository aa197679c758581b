//! # Item Generation
//!
//! Item templates and the floor-scaled tables used to stock rooms.

use crate::generation::{cap_for_floor, choose_weighted, SpawnTable};
use crate::{color, Consumable, Entity, EntityId, EquipmentSlot, Equippable, Item, Position};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-room item cap by floor threshold.
pub const MAX_ITEMS_BY_FLOOR: &[(u32, u32)] = &[(1, 1), (4, 2)];

/// Item weights by floor threshold.
pub const ITEM_TABLE: &SpawnTable<ItemKind> = &[
    (0, &[(ItemKind::HealthPotion, 35)]),
    (2, &[(ItemKind::ConfusionScroll, 10)]),
    (4, &[(ItemKind::LightningScroll, 25), (ItemKind::Sword, 5)]),
    (6, &[(ItemKind::FireballScroll, 25), (ItemKind::ChainMail, 15)]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPotion,
    LightningScroll,
    ConfusionScroll,
    FireballScroll,
    Dagger,
    Sword,
    LeatherArmor,
    ChainMail,
}

impl ItemKind {
    pub fn spawn(self, id: EntityId, position: Position) -> Entity {
        let (glyph, color, name, item) = match self {
            ItemKind::HealthPotion => (
                '!',
                color::POTION_VIOLET,
                "Health Potion",
                Item::Consumable(Consumable::Healing { amount: 4 }),
            ),
            ItemKind::LightningScroll => (
                '~',
                color::LIGHTNING_YELLOW,
                "Lightning Scroll",
                Item::Consumable(Consumable::LightningDamage {
                    damage: 20,
                    max_range: 5.0,
                }),
            ),
            ItemKind::ConfusionScroll => (
                '~',
                color::CONFUSION_PURPLE,
                "Confusion Scroll",
                Item::Consumable(Consumable::Confusion {
                    number_of_turns: 10,
                }),
            ),
            ItemKind::FireballScroll => (
                '~',
                color::FIREBALL_RED,
                "Fireball Scroll",
                Item::Consumable(Consumable::FireballDamage {
                    damage: 12,
                    radius: 3.0,
                }),
            ),
            ItemKind::Dagger => ('/', color::WEAPON_BLUE, "Dagger", weapon(2)),
            ItemKind::Sword => ('/', color::WEAPON_BLUE, "Sword", weapon(4)),
            ItemKind::LeatherArmor => ('[', color::ARMOR_BROWN, "Leather Armor", armor(1)),
            ItemKind::ChainMail => ('[', color::ARMOR_BROWN, "Chain Mail", armor(3)),
        };
        Entity::new_item(id, position, glyph, color, name, item)
    }
}

fn weapon(power_bonus: i32) -> Item {
    Item::Equippable(Equippable {
        slot: EquipmentSlot::Weapon,
        power_bonus,
        defense_bonus: 0,
    })
}

fn armor(defense_bonus: i32) -> Item {
    Item::Equippable(Equippable {
        slot: EquipmentSlot::Armor,
        power_bonus: 0,
        defense_bonus,
    })
}

/// Number of items to place in one room.
pub fn item_count(floor: u32, rng: &mut StdRng) -> u32 {
    rng.gen_range(0..=cap_for_floor(MAX_ITEMS_BY_FLOOR, floor))
}

/// Draws `count` item kinds for `floor`.
pub fn choose_items(floor: u32, count: u32, rng: &mut StdRng) -> Vec<ItemKind> {
    choose_weighted(ITEM_TABLE, floor, count, rng)
}
