//! Positional repetition tracking
//!
//! Every committed position is kept for the life of the game. Lookups go
//! through a Zobrist-hash index first and then compare packed snapshots,
//! so a hash collision can never reject a legal move.

use std::collections::HashMap;

use crate::board::Snapshot;

/// Ordered record of committed positions
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    snapshots: Vec<Snapshot>,
    /// Zobrist hash -> indices into `snapshots`
    index: HashMap<u64, Vec<usize>>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this exact position has been committed before
    pub fn contains(&self, snapshot: &Snapshot, hash: u64) -> bool {
        self.index
            .get(&hash)
            .is_some_and(|slots| slots.iter().any(|&i| self.snapshots[i] == *snapshot))
    }

    /// Append a committed position
    pub fn push(&mut self, snapshot: Snapshot, hash: u64) {
        self.index.entry(hash).or_default().push(self.snapshots.len());
        self.snapshots.push(snapshot);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Most recently committed position
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos, Stone};

    fn board_with(stones: &[(Pos, Stone)]) -> Board {
        let mut board = Board::new(5);
        for &(pos, stone) in stones {
            board.place_stone(pos, stone);
        }
        board
    }

    #[test]
    fn test_empty_history_contains_nothing() {
        let history = PositionHistory::new();
        assert!(history.is_empty());
        assert!(!history.contains(&Board::new(5).snapshot(), 0));
    }

    #[test]
    fn test_push_then_contains() {
        let mut history = PositionHistory::new();
        let board = board_with(&[(Pos::new(2, 2), Stone::Black)]);
        history.push(board.snapshot(), 42);

        assert_eq!(history.len(), 1);
        assert!(history.contains(&board.snapshot(), 42));
        assert_eq!(history.last(), Some(&board.snapshot()));
    }

    #[test]
    fn test_hash_collision_is_not_a_repeat() {
        let mut history = PositionHistory::new();
        let a = board_with(&[(Pos::new(0, 0), Stone::Black)]);
        let b = board_with(&[(Pos::new(0, 0), Stone::White)]);

        // Same hash, different stones
        history.push(a.snapshot(), 7);
        assert!(!history.contains(&b.snapshot(), 7));
        assert!(history.contains(&a.snapshot(), 7));
    }

    #[test]
    fn test_older_positions_still_found() {
        let mut history = PositionHistory::new();
        let boards: Vec<Board> = (0..5u8)
            .map(|i| board_with(&[(Pos::new(i, i), Stone::Black)]))
            .collect();
        for (i, board) in boards.iter().enumerate() {
            history.push(board.snapshot(), i as u64);
        }

        assert!(history.contains(&boards[0].snapshot(), 0));
        assert!(!history.contains(&boards[0].snapshot(), 1));
    }
}
