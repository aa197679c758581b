//! Save files and exit handling.

use crate::{DelverResult, GameState};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit
    UserQuit,
    /// The session ended on an error
    Abnormal,
    /// Quitting after the player died; nothing is worth keeping
    QuitWithoutSaving,
}

/// A save game on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes `state` through a temporary file so a crash never leaves a
    /// truncated save behind.
    pub fn save(&self, state: &GameState) -> DelverResult<()> {
        let bytes = state.to_bytes()?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        info!("Saved game to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> DelverResult<GameState> {
        let bytes = fs::read(&self.path)?;
        let state = GameState::from_bytes(&bytes)?;
        info!(
            "Loaded game from {} (floor {}, turn {})",
            self.path.display(),
            state.game_world.current_floor,
            state.turn_number
        );
        Ok(state)
    }

    /// Removes the save. A missing file is not an error.
    pub fn delete(&self) -> DelverResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Deleted save {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Applies the exit rules: a live game is saved, a finished one never is
    /// and any old save is removed.
    pub fn finish(&self, state: &GameState, reason: ExitReason) -> DelverResult<()> {
        if reason == ExitReason::QuitWithoutSaving || state.is_game_over() {
            return self.delete();
        }
        if reason == ExitReason::Abnormal {
            warn!("Saving after abnormal exit");
        }
        self.save(state)
    }
}
