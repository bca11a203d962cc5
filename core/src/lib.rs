#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod player;
mod snapshot;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side of the square board.
    pub size: Coord,
    pub traps: CellCount,
    pub bonuses: CellCount,
    /// Trap hits after which a player is eliminated.
    pub elimination_threshold: u8,
    pub starting_tokens: CellCount,
    /// Plain moves refresh the checkpoint when the Manhattan distance to it is a multiple of this.
    pub checkpoint_interval: CellCount,
}

impl GameConfig {
    /// The classic 8×8 board with 10 traps and 5 bonuses.
    pub const CLASSIC: Self = Self::new_unchecked(8, 10, 5);

    /// Smallest side where the goal and both starting corners are distinct cells.
    pub const MIN_SIZE: Coord = 3;

    pub const fn new_unchecked(size: Coord, traps: CellCount, bonuses: CellCount) -> Self {
        Self {
            size,
            traps,
            bonuses,
            elimination_threshold: 3,
            starting_tokens: 2,
            checkpoint_interval: 4,
        }
    }

    pub fn new(size: Coord, traps: CellCount, bonuses: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, traps, bonuses);
        config.validate()?;
        Ok(config)
    }

    pub fn with_elimination_threshold(self, elimination_threshold: u8) -> Result<Self> {
        let config = Self {
            elimination_threshold,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_starting_tokens(self, starting_tokens: CellCount) -> Result<Self> {
        let config = Self {
            starting_tokens,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_checkpoint_interval(self, checkpoint_interval: CellCount) -> Result<Self> {
        let config = Self {
            checkpoint_interval,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Rejects configurations the generator could never satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.size < Self::MIN_SIZE {
            return Err(GameError::InvalidBoardSize);
        }
        if self.elimination_threshold == 0 {
            return Err(GameError::InvalidThreshold);
        }
        if self.checkpoint_interval == 0 {
            return Err(GameError::InvalidInterval);
        }

        // one cell always belongs to the goal
        let available = self.total_cells() - 1;
        let requested = u32::from(self.traps) + u32::from(self.bonuses);
        if requested > u32::from(available) {
            return Err(GameError::TooManyItems {
                requested: self.traps.saturating_add(self.bonuses),
                available,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Immutable tile kinds of a board, with the goal fixed at the centre.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    kinds: Array2<TileKind>,
    side: Coord,
    goal: Coord2,
}

impl BoardLayout {
    /// All path except the goal at `(side / 2, side / 2)`.
    pub(crate) fn with_goal(side: Coord) -> Self {
        let goal = (side / 2, side / 2);
        let mut kinds: Array2<TileKind> = Array2::default((side, side).to_nd_index());
        kinds[goal.to_nd_index()] = TileKind::Goal;
        Self { kinds, side, goal }
    }

    pub fn from_item_coords(side: Coord, traps: &[Coord2], bonuses: &[Coord2]) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidBoardSize);
        }

        let mut layout = Self::with_goal(side);
        let items = traps
            .iter()
            .map(|&coords| (coords, TileKind::Trap))
            .chain(bonuses.iter().map(|&coords| (coords, TileKind::Bonus)));

        for (coords, kind) in items {
            let coords = layout.validate_coords(coords)?;
            if !layout.place(coords, kind) {
                return Err(GameError::OverlappingItems);
            }
        }

        Ok(layout)
    }

    /// Puts `kind` on a free path cell, returns false when the cell is taken.
    pub(crate) fn place(&mut self, coords: Coord2, kind: TileKind) -> bool {
        let tile = &mut self.kinds[coords.to_nd_index()];
        if tile.is_path() && coords != self.goal {
            *tile = kind;
            true
        } else {
            false
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.side && coords.1 < self.side {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn side(&self) -> Coord {
        self.side
    }

    pub fn goal(&self) -> Coord2 {
        self.goal
    }

    pub fn kind_at(&self, coords: Coord2) -> TileKind {
        self[coords]
    }

    pub fn count(&self, kind: TileKind) -> CellCount {
        self.kinds
            .iter()
            .filter(|&&tile| tile == kind)
            .count()
            .try_into()
            .expect("cell count fits in CellCount")
    }

    pub fn trap_count(&self) -> CellCount {
        self.count(TileKind::Trap)
    }

    pub fn bonus_count(&self) -> CellCount {
        self.count(TileKind::Bonus)
    }

    pub(crate) fn kinds(&self) -> &Array2<TileKind> {
        &self.kinds
    }
}

impl Index<Coord2> for BoardLayout {
    type Output = TileKind;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.kinds[(row as usize, col as usize)]
    }
}

/// Outcome of a move request
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Rejected: off the board, inactive player or finished game
    NoChange,
    Moved,
    /// Stepped on a trap and was sent back to the checkpoint
    HitTrap,
    /// Stepped on a trap one time too many
    Eliminated,
    PickedBonus,
    ReachedGoal,
}

impl MoveOutcome {
    /// Whether this outcome consumed the turn
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            HitTrap => true,
            Eliminated => true,
            PickedBonus => true,
            ReachedGoal => true,
        }
    }
}

/// Outcome of spending a memory token
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenOutcome {
    NoChange,
    Revealed,
}

impl TokenOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed)
    }
}
