use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be at least {}", crate::GameConfig::MIN_SIZE)]
    InvalidBoardSize,
    #[error("Too many items, requested {requested} traps and bonuses but only {available} cells are free")]
    TooManyItems {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Layout has {traps} traps and {bonuses} bonuses, which does not match the configuration")]
    LayoutMismatch { traps: CellCount, bonuses: CellCount },
    #[error("Items overlap each other or the goal")]
    OverlappingItems,
    #[error("Elimination threshold must be at least 1")]
    InvalidThreshold,
    #[error("Checkpoint interval must be at least 1")]
    InvalidInterval,
}

pub type Result<T> = core::result::Result<T, GameError>;
