//! # User Interface Elements
//!
//! Status panel text: health bar, level and experience, floor, inventory and
//! the message log, plus the look and character screens.

use crate::{slot_letter, GameState, LevelUpChoice, MessageLog, Position, TileKind, TurnPhase};

/// Builds the text shown beside or under the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    /// Width of the hp bar in characters, brackets excluded
    pub bar_width: usize,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self { bar_width: 20 }
    }
}

impl StatusPanel {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    /// A filled bar such as `[#####-----]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::StatusPanel;
    ///
    /// assert_eq!(StatusPanel::new(10).bar(15, 30), "[#####-----]");
    /// ```
    pub fn bar(&self, value: i32, maximum: i32) -> String {
        let filled = if maximum > 0 {
            let ratio = value.clamp(0, maximum) as f64 / maximum as f64;
            (ratio * self.bar_width as f64).round() as usize
        } else {
            0
        };
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled.min(self.bar_width))
        )
    }

    /// Player summary lines.
    pub fn render(&self, game_state: &GameState) -> Vec<String> {
        let Some(actor) = game_state.player().and_then(|p| p.actor()) else {
            return vec!["No player".to_string()];
        };
        let fighter = &actor.fighter;
        let level = &actor.level;

        let mut lines = vec![
            format!(
                "HP: {} {}/{}",
                self.bar(fighter.hp(), fighter.max_hp),
                fighter.hp(),
                fighter.max_hp
            ),
            format!(
                "Level {}  XP {}/{}  Power {}  Defense {}",
                level.current_level,
                level.current_xp,
                level.experience_to_next_level(),
                actor.power(),
                actor.defense()
            ),
            format!(
                "Dungeon level: {}  Turn: {}",
                game_state.game_world.current_floor, game_state.turn_number
            ),
        ];

        match game_state.phase {
            TurnPhase::AwaitingLevelUp => lines.extend(self.level_up_prompt()),
            TurnPhase::GameOver => lines.push("You are dead. Press q to quit.".to_string()),
            _ => {}
        }
        lines
    }

    /// Lettered inventory listing with equipped items marked.
    pub fn inventory_lines(&self, game_state: &GameState) -> Vec<String> {
        let Some(actor) = game_state.player().and_then(|p| p.actor()) else {
            return Vec::new();
        };
        if actor.inventory.is_empty() {
            return vec!["(empty)".to_string()];
        }
        actor
            .inventory
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let letter = slot_letter(index).unwrap_or('?');
                if actor.equipment.is_equipped(item.id) {
                    format!("({letter}) {} (E)", item.name)
                } else {
                    format!("({letter}) {}", item.name)
                }
            })
            .collect()
    }

    /// The newest `count` messages, oldest first.
    pub fn message_lines(&self, log: &MessageLog, count: usize) -> Vec<String> {
        log.recent(count).iter().map(|m| m.full_text()).collect()
    }

    /// Names what the player can see at `pos`.
    ///
    /// Entities are listed in drawing order; an empty cell names its tile.
    pub fn look_lines(&self, game_state: &GameState, pos: Position) -> Vec<String> {
        let map = &game_state.game_map;
        if !map.is_visible(pos) {
            return vec!["You cannot see that spot.".to_string()];
        }
        let names: Vec<String> = map
            .renderable_entities()
            .into_iter()
            .filter(|e| e.position == pos)
            .map(|e| capitalize(&e.name))
            .collect();
        if !names.is_empty() {
            return vec![names.join(", ")];
        }
        let tile = match map.tile(pos).map(|t| t.kind) {
            Some(TileKind::Wall) => "A wall.",
            Some(TileKind::Floor) => "Bare floor.",
            Some(TileKind::DownStairs) => "Stairs leading down.",
            None => "Nothing.",
        };
        vec![tile.to_string()]
    }

    /// Level, experience and base attributes.
    pub fn character_lines(&self, game_state: &GameState) -> Vec<String> {
        let Some(actor) = game_state.player().and_then(|p| p.actor()) else {
            return Vec::new();
        };
        let level = &actor.level;
        vec![
            "Character Information".to_string(),
            format!("Level: {}", level.current_level),
            format!("XP: {}", level.current_xp),
            format!(
                "XP for next Level: {}",
                level.experience_to_next_level() - level.current_xp
            ),
            format!("Attack: {}", actor.fighter.base_power),
            format!("Defense: {}", actor.fighter.base_defense),
        ]
    }

    pub fn level_up_prompt(&self) -> Vec<String> {
        let mut lines = vec!["Level up! Select an attribute to raise:".to_string()];
        for (index, choice) in LevelUpChoice::all().iter().enumerate() {
            lines.push(format!("{}) {}", index + 1, choice.description()));
        }
        lines
    }

    pub fn help_lines(&self) -> Vec<&'static str> {
        vec![
            "h j k l y u b n: move or attack",
            ".: wait    g: pick up    >: descend",
            "d <slot>: drop    e <slot>: equip",
            "u <slot> [x y]: use, optionally at a target",
            "i: inventory    v: message history    c: character",
            "x <x> <y>: look    q: quit",
        ]
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
