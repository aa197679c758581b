//! # Delver
//!
//! A turn-based roguelike dungeon crawler built around a headless simulation core.
//!
//! ## Architecture Overview
//!
//! The crate is organised so that everything gameplay-relevant can run without a
//! terminal or window attached:
//!
//! - **Game State**: the turn scheduler, the current floor and the message log
//! - **Entity Model**: plain-value entities with actor and item components
//! - **Action System**: every intent is an [`Action`] resolved against the state
//! - **Generation System**: rooms-and-corridors floors with floor-scaled spawn tables
//! - **Utilities**: field of view, path-finding and line drawing on the tile grid
//! - **Boundaries**: a plain-text renderer and a line-oriented input parser
//!
//! ## Quick start
//!
//! ```
//! use delver::{Action, GameConfig, GameState, TurnOutcome};
//!
//! let mut game = GameState::new(&GameConfig::default(), 7).unwrap();
//! let outcome = game.handle_player_action(Action::Wait).unwrap();
//! assert_eq!(outcome, TurnOutcome::Completed);
//! assert_eq!(game.turn_number, 1);
//! ```

pub mod config;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

// Core module re-exports
pub use config::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

/// Core error type for the Delver game engine.
#[derive(thiserror::Error, Debug)]
pub enum DelverError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// An entity id did not resolve on the current floor
    #[error("Entity {0} not found")]
    EntityNotFound(EntityId),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used throughout the Delver codebase.
pub type DelverResult<T> = Result<T, DelverError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
