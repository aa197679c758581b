//! Colour metadata carried by tiles and entities.
//!
//! The core never draws anything; these values exist so that a front end can.

use serde::{Deserialize, Serialize};

/// An sRGB colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
pub const DIM_GREY: Rgb = Rgb(0x80, 0x80, 0x80);
pub const CORPSE_RED: Rgb = Rgb(0xBF, 0x00, 0x00);

pub const ORC_GREEN: Rgb = Rgb(63, 127, 63);
pub const TROLL_GREEN: Rgb = Rgb(0, 127, 0);

pub const POTION_VIOLET: Rgb = Rgb(127, 0, 255);
pub const LIGHTNING_YELLOW: Rgb = Rgb(255, 255, 0);
pub const CONFUSION_PURPLE: Rgb = Rgb(207, 63, 255);
pub const FIREBALL_RED: Rgb = Rgb(255, 0, 0);
pub const WEAPON_BLUE: Rgb = Rgb(0, 191, 255);
pub const ARMOR_BROWN: Rgb = Rgb(139, 69, 19);

pub const WALL_DARK: Rgb = Rgb(0, 0, 100);
pub const WALL_LIGHT: Rgb = Rgb(130, 110, 50);
pub const FLOOR_DARK: Rgb = Rgb(50, 50, 150);
pub const FLOOR_LIGHT: Rgb = Rgb(200, 180, 50);
