//! Board structure and neighbor geometry

use super::{Pos, Stone};

/// Orthogonal neighbor offsets (row, col)
const DIRECTIONS: [(i32, i32); 4] = [
    (-1, 0), // Up
    (1, 0),  // Down
    (0, -1), // Left
    (0, 1),  // Right
];

/// Square Go board.
///
/// Cells are stored row-major. Indexing a position outside the board is a
/// caller bug and panics; use [`Board::contains`] to check first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone without any rule processing
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Orthogonally adjacent positions, clipped at the edges
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let size = self.size;
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let r = pos.row as i32 + dr;
            let c = pos.col as i32 + dc;
            Pos::is_valid(r, c, size).then(|| Pos::new(r as u8, c as u8))
        })
    }

    /// Every position on the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Number of stones of one color on the board
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len() - self.count(Stone::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Canonical packed encoding of the cells
    pub fn snapshot(&self) -> Snapshot {
        let mut packed = vec![0u8; self.cells.len().div_ceil(4)];
        for (i, stone) in self.cells.iter().enumerate() {
            packed[i / 4] |= stone.to_bits() << ((i % 4) * 2);
        }
        Snapshot(packed.into_boxed_slice())
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {} is off a {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.to_index(self.size)
    }

    /// Build a board from text rows: `X` black, `O` white, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut board = Board::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'X' => Stone::Black,
                    'O' => Stone::White,
                    _ => Stone::Empty,
                };
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for stone in row {
                let ch = match stone {
                    Stone::Empty => '.',
                    Stone::Black => 'X',
                    Stone::White => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Packed board contents, two bits per intersection.
///
/// Two snapshots of same-sized boards are equal exactly when every
/// intersection matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(Box<[u8]>);

impl Snapshot {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
