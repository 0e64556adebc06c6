//! Area scoring
//!
//! Every maximal region of empty intersections is flood-filled once. A
//! region bordered by stones of a single color is that color's territory;
//! regions touching both colors (dame) or no stones at all count for no one.
//!
//! Final totals:
//! - Black: black territory + white stones Black captured
//! - White: white territory + black stones White captured + komi

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos, Stone};

/// Default komi (compensation for White moving second)
pub const DEFAULT_KOMI: f64 = 6.5;

/// Who won on points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    /// Equal totals. Only reachable with an integral komi.
    Draw,
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Winner::Black,
            Player::White => Winner::White,
        }
    }
}

/// Final score of a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub black: f64,
    pub white: f64,
    pub winner: Winner,
    /// Absolute gap between the two totals
    pub difference: f64,
}

impl Score {
    fn from_totals(black: f64, white: f64) -> Self {
        let winner = if black > white {
            Winner::Black
        } else if white > black {
            Winner::White
        } else {
            Winner::Draw
        };

        Self {
            black,
            white,
            winner,
            difference: (black - white).abs(),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Winner::Draw => write!(f, "Draw ({} - {})", self.black, self.white),
            Winner::Black => write!(f, "B+{}", self.difference),
            Winner::White => write!(f, "W+{}", self.difference),
        }
    }
}

/// Territory counts per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: usize,
    pub white: usize,
    /// Empty points credited to nobody
    pub neutral: usize,
}

impl Territory {
    #[inline]
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// A maximal connected set of empty intersections
#[derive(Debug, Clone)]
struct Region {
    points: Vec<Pos>,
    touches_black: bool,
    touches_white: bool,
}

impl Region {
    /// The single color bordering this region, if there is exactly one
    fn owner(&self) -> Option<Player> {
        match (self.touches_black, self.touches_white) {
            (true, false) => Some(Player::Black),
            (false, true) => Some(Player::White),
            _ => None,
        }
    }
}

/// Flood-fill every empty region exactly once
fn empty_regions(board: &Board) -> Vec<Region> {
    let size = board.size();
    let mut checked = vec![false; size * size];
    let mut regions = Vec::new();

    for start in board.positions() {
        if !board.is_empty(start) || checked[start.to_index(size)] {
            continue;
        }

        checked[start.to_index(size)] = true;
        let mut queue = VecDeque::from([start]);
        let mut region = Region {
            points: Vec::new(),
            touches_black: false,
            touches_white: false,
        };

        while let Some(pos) = queue.pop_front() {
            region.points.push(pos);

            for next in board.neighbors(pos) {
                match board.get(next) {
                    Stone::Empty => {
                        let idx = next.to_index(size);
                        if !checked[idx] {
                            checked[idx] = true;
                            queue.push_back(next);
                        }
                    }
                    Stone::Black => region.touches_black = true,
                    Stone::White => region.touches_white = true,
                }
            }
        }

        regions.push(region);
    }

    regions
}

/// Count territory for both sides
pub fn territory(board: &Board) -> Territory {
    let mut result = Territory::default();

    for region in empty_regions(board) {
        let points = region.points.len();
        match region.owner() {
            Some(Player::Black) => result.black += points,
            Some(Player::White) => result.white += points,
            None => result.neutral += points,
        }
    }

    result
}

/// Territory owner of every intersection, row-major.
///
/// Stones and neutral points map to `None`.
pub fn territory_map(board: &Board) -> Vec<Option<Player>> {
    let size = board.size();
    let mut map = vec![None; size * size];

    for region in empty_regions(board) {
        if let Some(owner) = region.owner() {
            for pos in region.points {
                map[pos.to_index(size)] = Some(owner);
            }
        }
    }

    map
}

/// Score a position.
///
/// `captures[p]` is the number of opponent stones player `p` has removed,
/// indexed Black then White.
pub fn score(board: &Board, captures: [u32; 2], komi: f64) -> Score {
    let territory = territory(board);

    let black = territory.black as f64 + f64::from(captures[Player::Black.index()]);
    let white = territory.white as f64 + f64::from(captures[Player::White.index()]) + komi;

    Score::from_totals(black, white)
}
