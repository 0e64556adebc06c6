//! Zobrist hashing for position identification
//!
//! Each (intersection, color) pair gets a fixed random key; a position's
//! hash is the XOR of the keys of every stone on it. Placing or removing a
//! stone is a single XOR, so the hash of a candidate position can be
//! derived from the committed one without rescanning the board.
//!
//! # Example
//!
//! ```
//! use goban::board::{Board, Pos, Stone};
//! use goban::rules::ZobristTable;
//!
//! let zt = ZobristTable::new(9);
//! let mut board = Board::new(9);
//! let empty = zt.hash(&board);
//!
//! let pos = Pos::new(4, 4);
//! board.place_stone(pos, Stone::Black);
//!
//! assert_eq!(zt.toggle(empty, pos, Stone::Black), zt.hash(&board));
//! ```

use crate::board::{Board, Pos, Stone};

/// Zobrist key table for one board size.
#[derive(Debug, Clone)]
pub struct ZobristTable {
    size: usize,
    /// Random values for black stones at each position
    black: Vec<u64>,
    /// Random values for white stones at each position
    white: Vec<u64>,
}

impl ZobristTable {
    /// Create a table with deterministic keys for a `size`x`size` board.
    ///
    /// Keys come from a fixed-seed LCG so hashes are reproducible across runs.
    #[must_use]
    pub fn new(size: usize) -> Self {
        // Knuth's MMIX LCG constants
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Low bits of an LCG are weak; fold the high half in.
            seed ^ (seed >> 32)
        };

        let cells = size * size;
        let mut black = Vec::with_capacity(cells);
        let mut white = Vec::with_capacity(cells);
        for _ in 0..cells {
            black.push(next_rand());
            white.push(next_rand());
        }

        Self { size, black, white }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Full hash of a board. The empty board hashes to zero.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        debug_assert_eq!(board.size(), self.size);
        board
            .positions()
            .fold(0u64, |h, pos| self.toggle(h, pos, board.get(pos)))
    }

    /// XOR a stone in or out of `hash`. XOR is its own inverse, so the same
    /// call handles both placement and removal.
    #[inline]
    #[must_use]
    pub fn toggle(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => hash ^ self.black[idx],
            Stone::White => hash ^ self.white[idx],
            Stone::Empty => hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::new(9);
        assert_eq!(zt.hash(&Board::new(9)), 0);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let a = ZobristTable::new(19);
        let b = ZobristTable::new(19);
        let mut board = Board::new(19);
        board.place_stone(Pos::new(3, 3), Stone::Black);
        board.place_stone(Pos::new(15, 15), Stone::White);
        assert_eq!(a.hash(&board), b.hash(&board));
    }

    #[test]
    fn test_zobrist_colors_differ() {
        let zt = ZobristTable::new(9);
        let pos = Pos::new(2, 2);
        assert_ne!(zt.toggle(0, pos, Stone::Black), zt.toggle(0, pos, Stone::White));
    }

    #[test]
    fn test_zobrist_place_remove_roundtrip() {
        let zt = ZobristTable::new(9);
        let pos = Pos::new(4, 4);
        let h = zt.toggle(0, pos, Stone::White);
        assert_ne!(h, 0);
        assert_eq!(zt.toggle(h, pos, Stone::White), 0);
    }

    #[test]
    fn test_zobrist_incremental_matches_full() {
        let zt = ZobristTable::new(9);
        let mut board = Board::new(9);
        let mut h = 0;

        for (pos, stone) in [
            (Pos::new(0, 0), Stone::Black),
            (Pos::new(0, 1), Stone::White),
            (Pos::new(8, 8), Stone::Black),
        ] {
            board.place_stone(pos, stone);
            h = zt.toggle(h, pos, stone);
        }
        board.remove_stone(Pos::new(0, 1));
        h = zt.toggle(h, Pos::new(0, 1), Stone::White);

        assert_eq!(h, zt.hash(&board));
    }

    #[test]
    fn test_zobrist_order_independent() {
        let zt = ZobristTable::new(9);
        let a = zt.toggle(zt.toggle(0, Pos::new(1, 1), Stone::Black), Pos::new(2, 2), Stone::White);
        let b = zt.toggle(zt.toggle(0, Pos::new(2, 2), Stone::White), Pos::new(1, 1), Stone::Black);
        assert_eq!(a, b);
    }
}
