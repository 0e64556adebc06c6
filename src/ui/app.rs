//! Main application for the Go GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{column_label, BoardFrame, BoardView};
use super::game_state::{GameState, Turn};
use super::theme::*;
use crate::{GameConfig, Player, Pos, Score, Winner};

/// Board sizes offered in the Game menu
const MENU_SIZES: [usize; 3] = [9, 13, 19];

/// Main Go application
pub struct GoApp {
    state: GameState,
    board_view: BoardView,
    /// Komi used for games started from the menu
    komi: f64,
}

impl Default for GoApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl GoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            komi: config.komi,
        }
    }

    fn new_game(&mut self, size: usize) {
        self.state = GameState::new(GameConfig::new(size).with_komi(self.komi));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for size in MENU_SIZES {
                        if ui.button(format!("New Game ({}x{})", size, size)).clicked() {
                            self.new_game(size);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Pass").clicked() {
                        self.state.pass();
                        ui.close_menu();
                    }
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Score Now").clicked() {
                        self.state.finish();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.size();
                    ui.label(format!("{}x{} - komi {}", size, size, self.state.engine.komi()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_captures_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(score) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_score_card(ui, &score);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOBAN").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("囲碁").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Player::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { BLACK_STONE };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("To play - {:.0}s", secs), STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render captures card
    fn render_captures_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in [Player::Black, Player::White] {
                let symbol = if player == Player::Black { "●" } else { "○" };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(player.to_string()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.state.engine.captures(player);
                        ui.label(RichText::new(count.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                for (label, action) in [("Pass", Action::Pass), ("↩ Undo", Action::Undo), ("New", Action::New)] {
                    btn_frame.show(ui, |ui| {
                        let text = RichText::new(label).size(12.0).color(TEXT_PRIMARY);
                        if ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked() {
                            self.apply(action);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

            ui.add_space(8.0);
            let summary = match self.state.move_history.last() {
                Some(Turn::Play(pos, player)) => {
                    let row = self.state.size() - pos.row as usize;
                    format!("{} {}{}", player, column_label(pos.col as usize), row)
                }
                Some(Turn::Pass(player)) => format!("{} passed", player),
                None => "No moves yet".to_string(),
            };
            ui.label(
                RichText::new(format!("Move #{} - {}", self.state.move_history.len(), summary))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the final score card
    fn render_score_card(&mut self, ui: &mut egui::Ui, score: &Score) {
        let headline = match score.winner {
            Winner::Black => "BLACK WINS",
            Winner::White => "WHITE WINS",
            Winner::Draw => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(score.to_string()).size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(6.0);
                    ui.label(RichText::new(format!("Black {}", score.black)).size(12.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(format!("White {}", score.white)).size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let text = RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY);
                            if ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(STATUS_WARNING));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            let territory = self.state.territory();
            let frame = BoardFrame {
                board: self.state.engine.board(),
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                last_captured: &self.state.last_captured,
                territory: territory.as_deref(),
            };

            let state = &self.state;
            let is_legal = |pos| state.is_legal(pos);
            let input: Option<&dyn Fn(Pos) -> bool> = if state.game_over.is_none() {
                Some(&is_legal)
            } else {
                None
            };

            let clicked = self.board_view.show(ui, &frame, input);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Pass => self.state.pass(),
            Action::Undo => self.state.undo(),
            Action::New => self.state.reset(),
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let actions: Vec<Action> = ctx.input(|i| {
            [
                (egui::Key::P, Action::Pass),
                (egui::Key::U, Action::Undo),
                (egui::Key::N, Action::New),
            ]
            .into_iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .map(|(_, action)| action)
            .collect()
        });

        for action in actions {
            self.apply(action);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Pass,
    Undo,
    New,
}

impl eframe::App for GoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the move timer ticking
        if self.state.game_over.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
