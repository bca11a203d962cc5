use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side and positions.
pub type Coord = u8;

/// Count type used for item counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Manhattan distance between two cells.
pub const fn manhattan(a: Coord2, b: Coord2) -> CellCount {
    (a.0.abs_diff(b.0) as CellCount) + (a.1.abs_diff(b.1) as CellCount)
}

/// One of the four unit steps a player can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Target cell of a step from `coords`, `None` when it leaves a `side × side` board.
    pub fn step(self, coords: Coord2, side: Coord) -> Option<Coord2> {
        apply_delta(coords, self.delta(), (side, side))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds 8-neighbourhood of a cell, excluding the cell itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            bounds: (side, side),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// The 3×3 block centred on `center`, clipped to the board.
pub fn block_around(center: Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    core::iter::once(center).chain(NeighborIter::new(center, side))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn neighbors_are_clipped_at_corners() {
        let corner: Vec<_> = NeighborIter::new((0, 0), 3).collect();
        assert_eq!(corner, [(0, 1), (1, 0), (1, 1)]);

        let far: Vec<_> = NeighborIter::new((2, 2), 3).collect();
        assert_eq!(far, [(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn block_includes_center() {
        let block: Vec<_> = block_around((1, 1), 3).collect();
        assert_eq!(block.len(), 9);
        assert_eq!(block[0], (1, 1));
    }

    #[test]
    fn direction_steps_stay_in_bounds() {
        assert_eq!(Direction::Up.step((0, 0), 4), None);
        assert_eq!(Direction::Left.step((0, 0), 4), None);
        assert_eq!(Direction::Down.step((3, 3), 4), None);
        assert_eq!(Direction::Right.step((3, 3), 4), None);
        assert_eq!(Direction::Down.step((0, 0), 4), Some((1, 0)));
        assert_eq!(Direction::Right.step((0, 0), 4), Some((0, 1)));
        assert_eq!(Direction::Up.step((2, 1), 4), Some((1, 1)));
        assert_eq!(Direction::Left.step((2, 1), 4), Some((2, 0)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan((0, 0), (0, 0)), 0);
        assert_eq!(manhattan((0, 0), (2, 2)), 4);
        assert_eq!(manhattan((3, 1), (1, 4)), 5);
    }
}
