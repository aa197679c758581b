//! # Command Parsing
//!
//! Turns one line of text into a [`PlayerInput`].
//!
//! | input | meaning |
//! |---|---|
//! | `h j k l y u b n` | move or attack in that direction |
//! | `.` | wait |
//! | `g` | pick up |
//! | `d <slot>` | drop |
//! | `u <slot> [x y]` | use, optionally at a target tile |
//! | `e <slot>` | equip or unequip |
//! | `>` | take the stairs down |
//! | `i` | inventory |
//! | `v` | message history |
//! | `c` | character sheet |
//! | `x <x> <y>` | look at a map position |
//! | `1` `2` `3` | level-up choice |
//! | `?` | help |
//! | `q` | quit |
//!
//! Inventory slots are the letters `a` to `z`.

use crate::{Direction, LevelUpChoice, PlayerInput, Position};

/// Inventory slot letter for an index, `a` for 0.
pub fn slot_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'a' + i))
}

/// Inventory index for a slot letter.
pub fn slot_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

fn vi_direction(key: &str) -> Option<Direction> {
    let direction = match key {
        "k" => Direction::North,
        "j" => Direction::South,
        "h" => Direction::West,
        "l" => Direction::East,
        "y" => Direction::Northwest,
        "u" => Direction::Northeast,
        "b" => Direction::Southwest,
        "n" => Direction::Southeast,
        _ => return None,
    };
    Some(direction)
}

fn parse_slot(word: Option<&str>) -> Option<usize> {
    let mut chars = word?.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    slot_index(letter)
}

/// Parses one input line. Anything unrecognised is `None`.
///
/// # Examples
///
/// ```
/// use delver::{parse_command, Direction, PlayerInput, Position};
///
/// assert_eq!(parse_command("k"), Some(PlayerInput::Move(Direction::North)));
/// assert_eq!(
///     parse_command("u c 10 4"),
///     Some(PlayerInput::Use { slot: 2, target: Some(Position::new(10, 4)) })
/// );
/// assert_eq!(parse_command("dance"), None);
/// ```
pub fn parse_command(line: &str) -> Option<PlayerInput> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    let input = match head {
        "." => PlayerInput::Wait,
        "g" => PlayerInput::PickUp,
        ">" => PlayerInput::Descend,
        "i" => PlayerInput::ShowInventory,
        "v" => PlayerInput::ViewHistory,
        "c" => PlayerInput::Character,
        "x" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            PlayerInput::Look(Position::new(x, y))
        }
        "?" => PlayerInput::Help,
        "q" => PlayerInput::Quit,
        "1" => PlayerInput::LevelUp(LevelUpChoice::Constitution),
        "2" => PlayerInput::LevelUp(LevelUpChoice::Strength),
        "3" => PlayerInput::LevelUp(LevelUpChoice::Agility),
        "d" => PlayerInput::Drop {
            slot: parse_slot(words.next())?,
        },
        "e" => PlayerInput::Equip {
            slot: parse_slot(words.next())?,
        },
        "u" => {
            // A bare `u` is north-east; with a slot it is a use command
            let Some(slot_word) = words.next() else {
                return Some(PlayerInput::Move(Direction::Northeast));
            };
            let slot = parse_slot(Some(slot_word))?;
            let target = match (words.next(), words.next()) {
                (None, _) => None,
                (Some(x), Some(y)) => Some(Position::new(x.parse().ok()?, y.parse().ok()?)),
                (Some(_), None) => return None,
            };
            PlayerInput::Use { slot, target }
        }
        key => PlayerInput::Move(vi_direction(key)?),
    };

    if words.next().is_some() {
        return None;
    }
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(parse_command("h"), Some(PlayerInput::Move(Direction::West)));
        assert_eq!(parse_command(" n "), Some(PlayerInput::Move(Direction::Southeast)));
        assert_eq!(parse_command("u"), Some(PlayerInput::Move(Direction::Northeast)));
    }

    #[test]
    fn test_slot_commands() {
        assert_eq!(parse_command("d a"), Some(PlayerInput::Drop { slot: 0 }));
        assert_eq!(parse_command("e z"), Some(PlayerInput::Equip { slot: 25 }));
        assert_eq!(
            parse_command("u b"),
            Some(PlayerInput::Use {
                slot: 1,
                target: None
            })
        );
    }

    #[test]
    fn test_malformed_commands() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("d"), None);
        assert_eq!(parse_command("d A"), None);
        assert_eq!(parse_command("d ab"), None);
        assert_eq!(parse_command("u a 3"), None);
        assert_eq!(parse_command("u a x y"), None);
        assert_eq!(parse_command("g g"), None);
        assert_eq!(parse_command("w"), None);
    }

    #[test]
    fn test_look_and_character_commands() {
        assert_eq!(parse_command("c"), Some(PlayerInput::Character));
        assert_eq!(
            parse_command("x 12 7"),
            Some(PlayerInput::Look(Position::new(12, 7)))
        );
        assert_eq!(parse_command("x 12"), None);
        assert_eq!(parse_command("x 1 2 3"), None);
        assert_eq!(parse_command("c c"), None);
    }

    #[test]
    fn test_level_up_keys() {
        assert_eq!(
            parse_command("2"),
            Some(PlayerInput::LevelUp(LevelUpChoice::Strength))
        );
    }

    #[test]
    fn test_slot_letters() {
        assert_eq!(slot_letter(0), Some('a'));
        assert_eq!(slot_letter(25), Some('z'));
        assert_eq!(slot_letter(26), None);
        assert_eq!(slot_index('c'), Some(2));
        assert_eq!(slot_index('?'), None);
    }
}
