use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where to draw an active player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMarker {
    pub id: PlayerId,
    pub color: PlayerColor,
    pub position: Coord2,
}

/// Status line for the player whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingPlayer {
    pub id: PlayerId,
    pub name: String,
    pub memory_tokens: CellCount,
    pub trap_hits: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub id: PlayerId,
    pub name: String,
}

/// Everything the presentation layer may show for one frame.
///
/// Tile kinds are only present where the tile is revealed or temporarily revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord,
    pub tiles: Array2<Option<TileKind>>,
    pub markers: Vec<PlayerMarker>,
    pub acting: ActingPlayer,
    pub winner: Option<Winner>,
    pub turn_index: u32,
}

impl Snapshot {
    pub fn from_game(game: &MazeGame) -> Self {
        let size = game.size();
        let mut tiles = Array2::from_elem((size, size).to_nd_index(), None);
        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                tiles[coords.to_nd_index()] = game.tile_at(coords).visible_kind();
            }
        }

        let markers = PlayerId::all()
            .map(|id| (id, game.player(id)))
            .filter(|(_, player)| player.active)
            .map(|(id, player)| PlayerMarker {
                id,
                color: player.color,
                position: player.position,
            })
            .collect();

        let acting_id = game.acting_id();
        let acting_player = game.player(acting_id);
        let acting = ActingPlayer {
            id: acting_id,
            name: acting_player.name.clone(),
            memory_tokens: acting_player.memory_tokens,
            trap_hits: acting_player.trap_hits,
        };

        let winner = game.winner().map(|id| Winner {
            id,
            name: game.player(id).name.clone(),
        });

        Self {
            size,
            tiles,
            markers,
            acting,
            winner,
            turn_index: game.turn_index(),
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Option<TileKind> {
        self.tiles[coords.to_nd_index()]
    }

    pub fn marker_at(&self, coords: Coord2) -> Option<&PlayerMarker> {
        self.markers.iter().find(|marker| marker.position == coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_game(size: Coord, traps: &[Coord2]) -> MazeGame {
        let config = GameConfig::new(size, traps.len() as CellCount, 0)
            .unwrap()
            .with_elimination_threshold(1)
            .unwrap();
        let layout = BoardLayout::from_item_coords(size, traps, &[]).unwrap();
        MazeGame::new(config, layout).unwrap()
    }

    #[test]
    fn fresh_board_is_fully_hidden() {
        let snapshot = open_game(3, &[]).snapshot();

        assert_eq!(snapshot.size, 3);
        assert!(snapshot.tiles.iter().all(Option::is_none));
        assert_eq!(snapshot.markers.len(), 2);
        assert_eq!(snapshot.acting.name, "Player 1");
        assert_eq!(snapshot.acting.memory_tokens, 2);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.marker_at((2, 2)).map(|m| m.color), Some(PlayerColor::Red));
    }

    #[test]
    fn shows_revealed_and_token_tiles() {
        let mut game = open_game(4, &[(1, 1)]);
        game.move_player(Direction::Right);
        game.use_token();

        let snapshot = game.snapshot();

        assert_eq!(snapshot.tile_at((0, 1)), Some(TileKind::Path));
        // player 2 is at (3, 3), the token shows its surroundings
        assert_eq!(snapshot.tile_at((2, 2)), Some(TileKind::Goal));
        assert_eq!(snapshot.tile_at((3, 2)), Some(TileKind::Path));
        assert_eq!(snapshot.tile_at((1, 1)), None);
        assert_eq!(snapshot.acting.id, PlayerId(1));
        assert_eq!(snapshot.acting.memory_tokens, 1);
        assert_eq!(snapshot.turn_index, 1);
    }

    #[test]
    fn eliminated_player_has_no_marker() {
        let mut game = open_game(3, &[(0, 1)]);
        game.move_player(Direction::Right);

        let snapshot = game.snapshot();

        assert_eq!(snapshot.markers.len(), 1);
        assert_eq!(snapshot.markers[0].id, PlayerId(1));
        assert_eq!(snapshot.tile_at((0, 1)), Some(TileKind::Trap));
        assert_eq!(
            snapshot.winner,
            Some(Winner {
                id: PlayerId(1),
                name: "Player 2".into()
            })
        );
    }

    #[test]
    fn snapshot_serializes() {
        let snapshot = open_game(3, &[]).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
