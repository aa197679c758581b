//! # Rendering Module
//!
//! Text rendering of the game for terminals. Everything here only reads
//! [`GameState`](crate::GameState).

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
