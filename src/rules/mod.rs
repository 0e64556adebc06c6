//! Game rules for Go
//!
//! This module implements the rule set enforced by the engine:
//! - Group and liberty search
//! - Capture resolution
//! - Positional repetition (superko) tracking

pub mod capture;
pub mod group;
pub mod history;
pub mod zobrist;

// Re-exports for convenient access
pub use capture::{execute_captures, get_captured_positions, has_capture};
pub use group::{count_liberties, find_group, Group};
pub use history::PositionHistory;
pub use zobrist::ZobristTable;
