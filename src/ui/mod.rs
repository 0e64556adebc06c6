//! GUI module for the Go board
//!
//! A native egui/eframe front-end. It only talks to the engine through
//! `attempt_move` and `calculate_score`.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GoApp;
pub use game_state::{GameState, Turn};
