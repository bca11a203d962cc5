use std::fmt::Write as _;
use std::io;

use memory_maze_core::{PlayerColor, Snapshot, TileKind};

fn tile_glyph(tile: Option<TileKind>) -> char {
    match tile {
        None => '#',
        Some(TileKind::Path) => '.',
        Some(TileKind::Trap) => 'X',
        Some(TileKind::Bonus) => '+',
        Some(TileKind::Goal) => 'G',
    }
}

fn marker_glyph(color: PlayerColor) -> char {
    match color {
        PlayerColor::Blue => 'B',
        PlayerColor::Red => 'R',
    }
}

/// Text grid plus the status lines shown under it.
pub fn text(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for row in 0..snapshot.size {
        let line: Vec<String> = (0..snapshot.size)
            .map(|col| {
                let coords = (row, col);
                match snapshot.marker_at(coords) {
                    Some(marker) => marker_glyph(marker.color),
                    None => tile_glyph(snapshot.tile_at(coords)),
                }
                .to_string()
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    let acting = &snapshot.acting;
    writeln!(
        out,
        "{}'s turn | Tokens: {} | Traps hit: {}",
        acting.name, acting.memory_tokens, acting.trap_hits
    )
    .expect("writing to a String cannot fail");
    if let Some(winner) = &snapshot.winner {
        writeln!(out, "{} wins! Press r to replay or q to quit.", winner.name)
            .expect("writing to a String cannot fail");
    }
    out
}

pub fn print(out: &mut impl io::Write, snapshot: &Snapshot, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, snapshot)?;
        writeln!(out)
    } else {
        write!(out, "{}", text(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use memory_maze_core::{BoardLayout, Direction, GameConfig, MazeGame};

    use super::*;

    fn small_game() -> MazeGame {
        let config = GameConfig::new(3, 1, 0).unwrap();
        let layout = BoardLayout::from_item_coords(3, &[(0, 2)], &[]).unwrap();
        MazeGame::new(config, layout).unwrap()
    }

    #[test]
    fn hidden_board_with_markers() {
        let rendered = text(&small_game().snapshot());

        assert_eq!(
            rendered,
            "B # #\n# # #\n# # R\nPlayer 1's turn | Tokens: 2 | Traps hit: 0\n"
        );
    }

    #[test]
    fn shows_revealed_tiles_and_winner() {
        let mut game = small_game();
        game.move_player(Direction::Right);
        game.move_player(Direction::Left);
        game.move_player(Direction::Down);

        let rendered = text(&game.snapshot());

        assert_eq!(
            rendered,
            "# . #\n# B #\n# R #\nPlayer 2's turn | Tokens: 2 | Traps hit: 0\nPlayer 1 wins! Press r to replay or q to quit.\n"
        );
    }

    #[test]
    fn json_is_one_line() {
        let mut buf = Vec::new();
        print(&mut buf, &small_game().snapshot(), true).unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.starts_with('{'));
    }
}
