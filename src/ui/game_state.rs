//! Game state management for the Go GUI
//!
//! The engine only judges single moves. Everything a match needs on top of
//! that (turn order, passing, ending the game, undo) lives here.

use std::time::{Duration, Instant};

use crate::scoring::territory_map;
use crate::{Engine, GameConfig, Player, Pos, Score};

/// One entry of the move record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Play(Pos, Player),
    Pass(Player),
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub engine: Engine,
    pub current_turn: Player,
    /// Final score once both players have passed in a row
    pub game_over: Option<Score>,
    pub last_move: Option<Pos>,
    /// Stones removed by the last move, for the capture flash
    pub last_captured: Vec<Pos>,
    pub move_history: Vec<Turn>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    consecutive_passes: u8,
}

impl GameState {
    /// Start a game. Invalid configs fall back to the default board.
    pub fn new(config: GameConfig) -> Self {
        let engine = Engine::with_config(config).unwrap_or_else(|e| {
            log::warn!("{}; starting a default game", e);
            Engine::default()
        });
        log::info!("new {}x{} game, komi {}", engine.size(), engine.size(), engine.komi());

        Self {
            engine,
            current_turn: Player::Black,
            game_over: None,
            last_move: None,
            last_captured: Vec::new(),
            move_history: Vec::new(),
            move_timer: MoveTimer::default(),
            message: None,
            consecutive_passes: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(*self.engine.config());
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.engine.size()
    }

    /// Whether the side to move may play at `pos` (used for hover previews)
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.game_over.is_none() && self.engine.is_legal(pos, self.current_turn)
    }

    /// Attempt to place a stone for the side to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        let player = self.current_turn;
        let outcome = self
            .engine
            .attempt_move(pos, player)
            .map_err(|e| e.to_string())?;

        if let Some(reason) = outcome.message() {
            return Err(reason);
        }

        self.last_captured = outcome.captured().to_vec();
        self.last_move = Some(pos);
        self.record(Turn::Play(pos, player));
        self.consecutive_passes = 0;
        Ok(())
    }

    /// Pass the turn. Two passes in a row end the game.
    pub fn pass(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        self.record(Turn::Pass(self.current_turn));
        self.last_move = None;
        self.last_captured.clear();
        self.consecutive_passes += 1;

        if self.consecutive_passes >= 2 {
            self.finish();
        }
    }

    /// Score the board and end the game
    pub fn finish(&mut self) {
        let score = self.engine.calculate_score();
        log::info!("game over after {} turns: {}", self.move_history.len(), score);
        self.game_over = Some(score);
    }

    /// Territory owner per intersection, once the game is scored
    pub fn territory(&self) -> Option<Vec<Option<Player>>> {
        self.game_over
            .as_ref()
            .map(|_| territory_map(self.engine.board()))
    }

    fn record(&mut self, turn: Turn) {
        self.move_history.push(turn);
        self.move_timer.stop();
        self.current_turn = self.current_turn.opponent();
        self.move_timer.start();
        self.message = None;
    }

    /// Undo the last turn by replaying the rest on a fresh engine
    pub fn undo(&mut self) {
        if self.move_history.pop().is_none() {
            return;
        }
        let turns = std::mem::take(&mut self.move_history);
        let config = *self.engine.config();

        *self = Self::new(config);
        for turn in turns {
            match turn {
                Turn::Play(pos, player) => {
                    self.current_turn = player;
                    if let Err(reason) = self.try_place_stone(pos) {
                        log::warn!("replay of {} at {} failed: {}", player, pos, reason);
                    }
                }
                Turn::Pass(player) => {
                    self.current_turn = player;
                    self.pass();
                }
            }
        }
    }
}
