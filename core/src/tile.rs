use serde::{Deserialize, Serialize};

/// What lies on a cell. Fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Path,
    Trap,
    Bonus,
    Goal,
}

impl TileKind {
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Path
    }
}

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Set once a player steps on the tile, never cleared.
    pub revealed: bool,
    /// Set by a memory token, cleared after the next committed move.
    pub temporarily_revealed: bool,
}

impl Tile {
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            revealed: false,
            temporarily_revealed: false,
        }
    }

    pub const fn is_visible(self) -> bool {
        self.revealed || self.temporarily_revealed
    }

    /// The kind if it may be shown, `None` while hidden.
    pub const fn visible_kind(self) -> Option<TileKind> {
        if self.is_visible() {
            Some(self.kind)
        } else {
            None
        }
    }
}
