//! Go rules engine
//!
//! Board state, move legality and area scoring for the game of Go:
//! - Square boards from 2x2 up to 25x25 (19x19 by default)
//! - Captures of every opponent group left without liberties
//! - Suicide forbidden unless the move captures first
//! - Positional superko: no move may recreate an earlier position
//! - Area scoring with configurable komi (6.5 by default)
//!
//! # Architecture
//!
//! - [`board`]: Board representation, geometry and snapshots
//! - [`rules`]: Group/liberty search, capture resolution, repetition history
//! - [`scoring`]: Territory flood-fill and final score
//! - [`engine`]: The rules engine tying the pieces together
//! - [`ui`]: egui front-end used by the `goban` binary
//!
//! # Quick Start
//!
//! ```
//! use goban::{Engine, Player, Pos};
//!
//! let mut engine = Engine::new(9).unwrap();
//!
//! // Turn order is up to the caller
//! let outcome = engine.attempt_move(Pos::from_xy(2, 2), Player::Black).unwrap();
//! assert!(outcome.is_success());
//!
//! let outcome = engine.attempt_move(Pos::from_xy(2, 2), Player::White).unwrap();
//! if let Some(reason) = outcome.message() {
//!     println!("rejected: {}", reason);
//! }
//!
//! let score = engine.calculate_score();
//! println!("Black {} - White {}", score.black, score.white);
//! ```

pub mod board;
pub mod engine;
pub mod rules;
pub mod scoring;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use engine::{Engine, EngineError, GameConfig, MoveOutcome, Violation};
pub use scoring::{Score, Winner, DEFAULT_KOMI};
