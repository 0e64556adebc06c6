//! Go rules engine
//!
//! [`Engine`] owns the board, the capture tallies and the history of
//! committed positions for one game. Its only mutating operation is
//! [`Engine::attempt_move`], which runs the legality pipeline on a scratch
//! copy of the board and commits the result atomically:
//!
//! 1. **Occupied**: the target intersection must be empty
//! 2. **Captures**: opponent groups left without liberties are removed
//! 3. **Suicide**: the mover's own group must have a liberty afterwards
//! 4. **Repetition**: the resulting position must never have been committed
//!
//! The first failing check decides the rejection. A rejected move leaves
//! the engine untouched.
//!
//! # Example
//!
//! ```
//! use goban::{Engine, Player, Pos, Violation};
//!
//! let mut engine = Engine::new(9).unwrap();
//!
//! let outcome = engine.attempt_move(Pos::from_xy(4, 4), Player::Black).unwrap();
//! assert!(outcome.is_success());
//!
//! let outcome = engine.attempt_move(Pos::from_xy(4, 4), Player::White).unwrap();
//! assert_eq!(outcome.violation(), Some(Violation::OccupiedIntersection));
//!
//! let score = engine.calculate_score();
//! println!("{} - {} ({:?} wins)", score.black, score.white, score.winner);
//! ```
//!
//! The engine does not track turns and is not synchronized; share one
//! game across threads behind a single lock.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{
    Board, Player, Pos, Snapshot, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::rules::{execute_captures, find_group, PositionHistory, ZobristTable};
use crate::scoring::{self, Score, DEFAULT_KOMI};

/// Rule violation that rejects a move.
///
/// These are ordinary game events: the caller reports them to the player
/// and asks for another move.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    #[error("intersection is already occupied")]
    OccupiedIntersection,
    #[error("move is suicide")]
    SuicideMove,
    #[error("move repeats an earlier board position")]
    RepeatedPosition,
}

/// Caller contract violations.
///
/// Unlike [`Violation`], these indicate a bug in the caller, not an
/// illegal move.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("position {pos} is off the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },
    #[error("board size {0} is outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),
    #[error("komi must be finite, got {0}")]
    InvalidKomi(f64),
}

/// Result of [`Engine::attempt_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move committed; `captured` lists the opponent stones removed
    Accepted { captured: Vec<Pos> },
    /// Move refused; the engine is unchanged
    Rejected(Violation),
}

impl MoveOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    /// Human-readable rejection reason, `None` on success
    pub fn message(&self) -> Option<String> {
        self.violation().map(|v| v.to_string())
    }

    #[inline]
    pub fn violation(&self) -> Option<Violation> {
        match self {
            MoveOutcome::Accepted { .. } => None,
            MoveOutcome::Rejected(v) => Some(*v),
        }
    }

    /// Stones removed by this move (empty when rejected)
    pub fn captured(&self) -> &[Pos] {
        match self {
            MoveOutcome::Accepted { captured } => captured,
            MoveOutcome::Rejected(_) => &[],
        }
    }
}

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length
    pub size: usize,
    /// Points added to White's total at scoring
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_komi(mut self, komi: f64) -> Self {
        self.komi = komi;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(EngineError::InvalidBoardSize(self.size));
        }
        if !self.komi.is_finite() {
            return Err(EngineError::InvalidKomi(self.komi));
        }
        Ok(())
    }
}

/// Scratch position produced by a legal move, ready to commit
struct Candidate {
    board: Board,
    captured: Vec<Pos>,
    snapshot: Snapshot,
    hash: u64,
}

/// Rules engine for a single game
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    /// Opponent stones removed by each player: [black, white]
    captures: [u32; 2],
    history: PositionHistory,
    zobrist: ZobristTable,
    /// Zobrist hash of `board`
    hash: u64,
}

impl Engine {
    /// Create an engine for an empty `size`x`size` board with default komi
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Self::with_config(GameConfig::new(size))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::debug!("new {}x{} game, komi {}", config.size, config.size, config.komi);
        Ok(Self::build(config))
    }

    /// `config` must already be valid
    fn build(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.size),
            captures: [0; 2],
            history: PositionHistory::new(),
            zobrist: ZobristTable::new(config.size),
            hash: 0,
        }
    }

    /// Try to place `player`'s stone at `pos`.
    ///
    /// Rule violations come back as [`MoveOutcome::Rejected`]; only an
    /// off-board position is an error.
    pub fn attempt_move(&mut self, pos: Pos, player: Player) -> Result<MoveOutcome, EngineError> {
        self.ensure_on_board(pos)?;

        let candidate = match self.evaluate(pos, player) {
            Ok(candidate) => candidate,
            Err(violation) => {
                log::debug!("{} at {} rejected: {}", player, pos, violation);
                return Ok(MoveOutcome::Rejected(violation));
            }
        };

        let Candidate {
            board,
            captured,
            snapshot,
            hash,
        } = candidate;

        self.board = board;
        self.hash = hash;
        self.captures[player.index()] += captured.len() as u32;
        self.history.push(snapshot, hash);

        log::debug!(
            "{} at {} accepted, {} captured, move {}",
            player,
            pos,
            captured.len(),
            self.history.len()
        );

        Ok(MoveOutcome::Accepted { captured })
    }

    /// Run the legality checks without committing anything.
    ///
    /// Returns the violation `attempt_move` would report, if any.
    pub fn check_move(&self, pos: Pos, player: Player) -> Result<Option<Violation>, EngineError> {
        self.ensure_on_board(pos)?;
        Ok(self.evaluate(pos, player).err())
    }

    /// Whether `player` may play at `pos`. Off-board positions are never legal.
    pub fn is_legal(&self, pos: Pos, player: Player) -> bool {
        matches!(self.check_move(pos, player), Ok(None))
    }

    /// Every legal move for `player`, row-major
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal(pos, player))
            .collect()
    }

    /// Score the current position with the configured komi
    pub fn calculate_score(&self) -> Score {
        self.calculate_score_with_komi(self.config.komi)
    }

    /// Score the current position with an explicit komi
    pub fn calculate_score_with_komi(&self, komi: f64) -> Score {
        scoring::score(&self.board, self.captures, komi)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.size
    }

    #[inline]
    pub fn komi(&self) -> f64 {
        self.config.komi
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Opponent stones captured by `player` so far
    #[inline]
    pub fn captures(&self, player: Player) -> u32 {
        self.captures[player.index()]
    }

    /// Number of accepted moves
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Zobrist hash of the committed position
    #[inline]
    pub fn position_hash(&self) -> u64 {
        self.hash
    }

    fn ensure_on_board(&self, pos: Pos) -> Result<(), EngineError> {
        if self.board.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                pos,
                size: self.config.size,
            })
        }
    }

    /// Legality pipeline on a scratch board. `pos` must be on the board.
    fn evaluate(&self, pos: Pos, player: Player) -> Result<Candidate, Violation> {
        if !self.board.is_empty(pos) {
            return Err(Violation::OccupiedIntersection);
        }

        let stone = player.stone();
        let mut board = self.board.clone();
        board.place_stone(pos, stone);
        let mut hash = self.zobrist.toggle(self.hash, pos, stone);

        let captured = execute_captures(&mut board, pos, player);
        let opponent = player.opponent().stone();
        for &cap in &captured {
            hash = self.zobrist.toggle(hash, cap, opponent);
        }

        if find_group(&board, pos).liberty_count() == 0 {
            return Err(Violation::SuicideMove);
        }

        let snapshot = board.snapshot();
        if self.history.contains(&snapshot, hash) {
            return Err(Violation::RepeatedPosition);
        }

        debug_assert_eq!(board.get(pos), Stone::from(player));
        Ok(Candidate {
            board,
            captured,
            snapshot,
            hash,
        })
    }
}

impl Default for Engine {
    /// Empty 19x19 game with komi 6.5
    fn default() -> Self {
        Self::build(GameConfig::default())
    }
}

#[cfg(test)]
mod proptests;
