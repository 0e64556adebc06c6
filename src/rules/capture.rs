//! Capture resolution
//!
//! After a stone is placed, every opponent group touching it that has no
//! liberties left is removed. One move may capture several groups; a group
//! reached through two different neighbors is only removed once.

use std::collections::HashSet;

use crate::board::{Board, Pos, Player};

use super::group::find_group;

/// Find opponent stones that die once `player`'s stone stands at `pos`.
///
/// The stone must already be on `board`. Returned positions are distinct.
pub fn get_captured_positions(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let opponent = player.opponent().stone();
    let mut seen: HashSet<Pos> = HashSet::new();
    let mut captured = Vec::new();

    for next in board.neighbors(pos) {
        if board.get(next) != opponent || seen.contains(&next) {
            continue;
        }

        let group = find_group(board, next);
        seen.extend(group.stones.iter().copied());
        if group.is_dead() {
            captured.extend(group.stones);
        }
    }

    captured
}

/// Remove every opponent group left without liberties by the stone at `pos`.
///
/// Returns the removed positions.
pub fn execute_captures(board: &mut Board, pos: Pos, player: Player) -> Vec<Pos> {
    let captured = get_captured_positions(board, pos, player);

    for &cap_pos in &captured {
        board.remove_stone(cap_pos);
    }

    if !captured.is_empty() {
        log::trace!("{} at {} captures {} stone(s)", player, pos, captured.len());
    }

    captured
}

/// Check if the stone at `pos` captures anything.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, player: Player) -> bool {
    !get_captured_positions(board, pos, player).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_capture_single_stone() {
        let mut board = Board::from_rows(&[
            ".....",
            "..X..",
            ".XOX.",
            ".....",
            ".....",
        ]);
        board.place_stone(Pos::new(3, 2), Stone::Black);

        let captured = execute_captures(&mut board, Pos::new(3, 2), Player::Black);
        assert_eq!(captured, vec![Pos::new(2, 2)]);
        assert!(board.is_empty(Pos::new(2, 2)));
    }

    #[test]
    fn test_no_capture_with_liberty_left() {
        let mut board = Board::from_rows(&[
            ".....",
            ".....",
            ".XOX.",
            ".....",
            ".....",
        ]);
        board.place_stone(Pos::new(3, 2), Stone::Black);

        assert!(!has_capture(&board, Pos::new(3, 2), Player::Black));
        let captured = execute_captures(&mut board, Pos::new(3, 2), Player::Black);
        assert!(captured.is_empty());
        assert_eq!(board.get(Pos::new(2, 2)), Stone::White);
    }

    #[test]
    fn test_capture_group_reached_twice_removed_once() {
        // The white group touches (2, 1) from above and from the right
        let mut board = Board::from_rows(&[
            ".XX..",
            "XOOX.",
            "..OX.",
            "..X..",
            ".....",
        ]);
        board.place_stone(Pos::new(2, 1), Stone::Black);

        let captured = execute_captures(&mut board, Pos::new(2, 1), Player::Black);
        assert_eq!(captured.len(), 3);
        assert!(board.is_empty(Pos::new(1, 1)));
        assert!(board.is_empty(Pos::new(1, 2)));
        assert!(board.is_empty(Pos::new(2, 2)));
    }

    #[test]
    fn test_one_move_captures_two_groups() {
        let mut board = Board::from_rows(&[
            ".X.X.",
            "XO.OX",
            ".X.X.",
            ".....",
            ".....",
        ]);
        board.place_stone(Pos::new(1, 2), Stone::Black);

        let captured = execute_captures(&mut board, Pos::new(1, 2), Player::Black);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Pos::new(1, 1)));
        assert!(captured.contains(&Pos::new(1, 3)));
    }

    #[test]
    fn test_distant_dead_group_ignored() {
        // The white corner stone has no liberties but does not touch the new stone
        let mut board = Board::from_rows(&[
            "OX...",
            "X....",
            ".....",
            ".....",
            ".....",
        ]);
        board.place_stone(Pos::new(3, 3), Stone::Black);

        let captured = execute_captures(&mut board, Pos::new(3, 3), Player::Black);
        assert!(captured.is_empty());
        assert_eq!(board.get(Pos::new(0, 0)), Stone::White);
    }
}
