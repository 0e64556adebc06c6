//! Randomized checks over arbitrary move sequences

use proptest::prelude::*;

use super::*;
use crate::rules::find_group;

const SIZE: u8 = 5;

fn any_move() -> impl Strategy<Value = (u8, u8, bool)> {
    (0..SIZE, 0..SIZE, any::<bool>())
}

fn player_of(black: bool) -> Player {
    if black {
        Player::Black
    } else {
        Player::White
    }
}

/// No group on a committed board may be without liberties
fn assert_all_groups_alive(board: &Board) {
    for pos in board.positions() {
        if !board.is_empty(pos) {
            assert!(
                find_group(board, pos).liberty_count() > 0,
                "dead group at {}\n{}",
                pos,
                board
            );
        }
    }
}

proptest! {
    #[test]
    fn rejected_moves_leave_no_trace(moves in prop::collection::vec(any_move(), 1..80)) {
        let mut engine = Engine::new(SIZE as usize).unwrap();

        for (row, col, black) in moves {
            let player = player_of(black);
            let board = engine.board().clone();
            let tallies = (engine.captures(Player::Black), engine.captures(Player::White));
            let history = engine.history_len();

            let outcome = engine.attempt_move(Pos::new(row, col), player).unwrap();

            if outcome.is_success() {
                prop_assert_eq!(engine.history_len(), history + 1);
                let gained = outcome.captured().len() as u32;
                let after = (engine.captures(Player::Black), engine.captures(Player::White));
                let expected = match player {
                    Player::Black => (tallies.0 + gained, tallies.1),
                    Player::White => (tallies.0, tallies.1 + gained),
                };
                prop_assert_eq!(after, expected);
                assert_all_groups_alive(engine.board());
            } else {
                prop_assert_eq!(engine.board(), &board);
                prop_assert_eq!((engine.captures(Player::Black), engine.captures(Player::White)), tallies);
                prop_assert_eq!(engine.history_len(), history);
            }
        }
    }

    #[test]
    fn attempt_is_deterministic(
        setup in prop::collection::vec(any_move(), 0..60),
        probe in any_move(),
    ) {
        let mut engine = Engine::new(SIZE as usize).unwrap();
        for (row, col, black) in setup {
            engine.attempt_move(Pos::new(row, col), player_of(black)).unwrap();
        }

        let (row, col, black) = probe;
        let pos = Pos::new(row, col);
        let player = player_of(black);

        let predicted = engine.check_move(pos, player).unwrap();
        let mut a = engine.clone();
        let mut b = engine.clone();
        let first = a.attempt_move(pos, player).unwrap();
        let second = b.attempt_move(pos, player).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.violation(), predicted);

        if !first.is_success() {
            prop_assert_eq!(engine.attempt_move(pos, player).unwrap(), first);
        }
    }

    #[test]
    fn score_totals_are_consistent(moves in prop::collection::vec(any_move(), 0..80)) {
        let mut engine = Engine::new(SIZE as usize).unwrap();
        for (row, col, black) in moves {
            engine.attempt_move(Pos::new(row, col), player_of(black)).unwrap();
        }

        let territory = scoring::territory(engine.board());
        let empty = engine.board().count(Stone::Empty);
        prop_assert_eq!(territory.black + territory.white + territory.neutral, empty);

        let score = engine.calculate_score();
        prop_assert_eq!(score.difference, (score.black - score.white).abs());
        prop_assert!(score.white >= engine.komi());
    }
}
