//! Connected groups and their liberties
//!
//! A group is a maximal set of same-colored stones joined by orthogonal
//! adjacency. Its liberties are the distinct empty intersections touching
//! any member. Groups are derived on demand and never stored.

use std::collections::{HashSet, VecDeque};

use crate::board::{Board, Pos, Stone};

/// A connected group found by [`find_group`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Color of every member, `Stone::Empty` for the empty group
    pub color: Stone,
    /// Member positions in visit order
    pub stones: Vec<Pos>,
    /// Distinct empty intersections adjacent to the group
    pub liberties: HashSet<Pos>,
}

impl Group {
    #[inline]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// A group with no liberties left is captured
    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.stones.is_empty() && self.liberties.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.stones.contains(&pos)
    }
}

/// Breadth-first search for the group containing `start`.
///
/// Starting on an empty intersection yields an empty group with zero
/// liberties.
pub fn find_group(board: &Board, start: Pos) -> Group {
    let color = board.get(start);
    if color == Stone::Empty {
        return Group::default();
    }

    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut stones = Vec::new();
    let mut liberties = HashSet::new();

    while let Some(pos) = queue.pop_front() {
        stones.push(pos);

        for next in board.neighbors(pos) {
            let stone = board.get(next);
            if stone == Stone::Empty {
                liberties.insert(next);
            } else if stone == color && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Group {
        color,
        stones,
        liberties,
    }
}

/// Liberty count of the group at `pos` (zero for an empty intersection)
#[inline]
pub fn count_liberties(board: &Board, pos: Pos) -> usize {
    find_group(board, pos).liberty_count()
}
