//! Players and their identities.

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// The game is played by exactly two players.
pub const PLAYER_COUNT: usize = 2;

/// Zero-based player index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player whose turn it is at `turn_index`.
    pub const fn for_turn(turn_index: u32) -> Self {
        Self((turn_index % PLAYER_COUNT as u32) as u8)
    }

    /// The opponent in a two-player game.
    pub const fn other(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Colour identity handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Blue,
    Red,
}

impl PlayerColor {
    pub const fn for_player(id: PlayerId) -> Self {
        match id.0 % 2 {
            0 => Self::Blue,
            _ => Self::Red,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
    pub position: Coord2,
    /// Where a trap sends the player back to.
    pub checkpoint: Coord2,
    pub memory_tokens: CellCount,
    pub trap_hits: u8,
    pub active: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor, start: Coord2, tokens: CellCount) -> Self {
        Self {
            name: name.into(),
            color,
            position: start,
            checkpoint: start,
            memory_tokens: tokens,
            trap_hits: 0,
            active: true,
        }
    }

    /// The two players of a fresh game, on opposite corners.
    pub fn starting_pair(config: &GameConfig) -> [Player; PLAYER_COUNT] {
        let far = config.size.saturating_sub(1);
        let corners = [(0, 0), (far, far)];
        let tokens = config.starting_tokens;
        [0u8, 1].map(|i| {
            let id = PlayerId(i);
            Player::new(
                alloc::format!("{id}"),
                PlayerColor::for_player(id),
                corners[id.index()],
                tokens,
            )
        })
    }

    /// Moves onto a safe cell and refreshes the checkpoint every `interval` Manhattan steps.
    pub(crate) fn walk_to(&mut self, coords: Coord2, interval: CellCount) {
        self.position = coords;
        if manhattan(self.position, self.checkpoint) % interval == 0 {
            self.checkpoint = self.position;
        }
    }
}
