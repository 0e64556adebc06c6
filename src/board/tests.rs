use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_player_stone() {
    assert_eq!(Player::Black.stone(), Stone::Black);
    assert_eq!(Player::White.stone(), Stone::White);
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Stone::White.player(), Some(Player::White));
    assert_eq!(Stone::Empty.player(), None);
}

#[test]
fn test_pos_xy() {
    let pos = Pos::from_xy(3, 1);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 3);
    assert_eq!(pos.x(), 3);
    assert_eq!(pos.y(), 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 4); // Center of 9x9
    assert_eq!(pos.to_index(9), 40);

    let pos2 = Pos::from_index(40, 9);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 9));
    assert!(Pos::is_valid(8, 8, 9));
    assert!(!Pos::is_valid(-1, 0, 9));
    assert!(!Pos::is_valid(0, -1, 9));
    assert!(!Pos::is_valid(9, 0, 9));
    assert!(!Pos::is_valid(0, 9, 9));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_neighbors_corner_edge_center() {
    let board = Board::new(5);

    let corner: Vec<_> = board.neighbors(Pos::new(0, 0)).collect();
    assert_eq!(corner.len(), 2);
    assert!(corner.contains(&Pos::new(1, 0)));
    assert!(corner.contains(&Pos::new(0, 1)));

    assert_eq!(board.neighbors(Pos::new(0, 2)).count(), 3);
    assert_eq!(board.neighbors(Pos::new(4, 4)).count(), 2);
    assert_eq!(board.neighbors(Pos::new(2, 2)).count(), 4);
}

#[test]
fn test_board_place_remove() {
    let mut board = Board::new(9);
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(2, 3), Stone::Black);
    assert_eq!(board.get(Pos::new(2, 3)), Stone::Black);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(Pos::new(2, 3));
    assert!(board.is_empty(Pos::new(2, 3)));
    assert!(board.is_board_empty());
}

#[test]
fn test_board_contains() {
    let board = Board::new(9);
    assert!(board.contains(Pos::new(8, 8)));
    assert!(!board.contains(Pos::new(9, 0)));
    assert!(!board.contains(Pos::new(0, 9)));
}

#[test]
#[should_panic]
fn test_get_off_board_panics() {
    let board = Board::new(9);
    board.get(Pos::new(9, 9));
}

#[test]
fn test_snapshot_distinguishes_colors() {
    let mut black = Board::new(9);
    let mut white = Board::new(9);
    black.place_stone(Pos::new(4, 4), Stone::Black);
    white.place_stone(Pos::new(4, 4), Stone::White);

    assert_ne!(black.snapshot(), white.snapshot());
    assert_ne!(black.snapshot(), Board::new(9).snapshot());

    let mut again = Board::new(9);
    again.place_stone(Pos::new(4, 4), Stone::Black);
    assert_eq!(black.snapshot(), again.snapshot());
}

#[test]
fn test_snapshot_packs_four_cells_per_byte() {
    assert_eq!(Board::new(9).snapshot().as_bytes().len(), 21);
    assert_eq!(Board::new(19).snapshot().as_bytes().len(), 91);
}

#[test]
fn test_display() {
    let board = Board::from_rows(&["X.O", "...", ".OX"]);
    assert_eq!(board.to_string(), "X.O\n...\n.OX\n");
}
