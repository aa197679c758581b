//! # Encounter Generation
//!
//! Monster templates and the floor-scaled tables that decide how many and
//! which monsters a room receives.

use crate::generation::{cap_for_floor, choose_weighted, SpawnTable};
use crate::{color, Actor, Ai, Entity, EntityId, Fighter, Level, Position};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-room monster cap by floor threshold.
pub const MAX_MONSTERS_BY_FLOOR: &[(u32, u32)] = &[(1, 2), (4, 3), (6, 5)];

/// Monster weights by floor threshold.
pub const MONSTER_TABLE: &SpawnTable<MonsterKind> = &[
    (0, &[(MonsterKind::Orc, 80)]),
    (3, &[(MonsterKind::Troll, 15)]),
    (5, &[(MonsterKind::Troll, 30)]),
    (7, &[(MonsterKind::Troll, 60)]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Orc,
    Troll,
}

impl MonsterKind {
    /// A fresh hostile monster of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{EntityId, MonsterKind, Position};
    ///
    /// let troll = MonsterKind::Troll.spawn(EntityId(4), Position::new(1, 2));
    /// assert_eq!(troll.glyph, 'T');
    /// assert_eq!(troll.actor().unwrap().fighter.hp(), 16);
    /// ```
    pub fn spawn(self, id: EntityId, position: Position) -> Entity {
        let (glyph, color, name, fighter, xp) = match self {
            MonsterKind::Orc => ('o', color::ORC_GREEN, "Orc", Fighter::new(10, 0, 3), 35),
            MonsterKind::Troll => ('T', color::TROLL_GREEN, "Troll", Fighter::new(16, 1, 4), 100),
        };
        Entity::new_actor(
            id,
            position,
            glyph,
            color,
            name,
            Actor::new(fighter, Ai::hostile(), 0, Level::new(0, xp)),
        )
    }
}

/// Number of monsters to place in one room.
pub fn monster_count(floor: u32, rng: &mut StdRng) -> u32 {
    rng.gen_range(0..=cap_for_floor(MAX_MONSTERS_BY_FLOOR, floor))
}

/// Draws `count` monster kinds for `floor`.
pub fn choose_monsters(floor: u32, count: u32, rng: &mut StdRng) -> Vec<MonsterKind> {
    choose_weighted(MONSTER_TABLE, floor, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::pooled_weights;
    use rand::SeedableRng;

    #[test]
    fn test_monster_stats() {
        let orc = MonsterKind::Orc.spawn(EntityId(1), Position::new(0, 0));
        let actor = orc.actor().unwrap();
        assert_eq!(orc.name, "Orc");
        assert!(orc.blocks_movement);
        assert_eq!((actor.fighter.max_hp, actor.defense(), actor.power()), (10, 0, 3));
        assert_eq!(actor.level.xp_given, 35);
        assert_eq!(actor.ai, Some(Ai::hostile()));
    }

    #[test]
    fn test_trolls_unlock_on_floor_three() {
        assert_eq!(pooled_weights(MONSTER_TABLE, 2), vec![(MonsterKind::Orc, 80)]);
        assert_eq!(
            pooled_weights(MONSTER_TABLE, 7),
            vec![(MonsterKind::Orc, 80), (MonsterKind::Troll, 60)]
        );
    }

    #[test]
    fn test_monster_count_within_cap() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert!(monster_count(1, &mut rng) <= 2);
            assert!(monster_count(6, &mut rng) <= 5);
        }
    }
}
