//! Go board GUI
//!
//! A hotseat interface for two players sharing one screen.

use goban::ui::GoApp;
use goban::GameConfig;

/// Read `GOBAN_SIZE` / `GOBAN_KOMI`, keeping defaults for anything unusable
fn config_from_env() -> GameConfig {
    let mut config = GameConfig::default();

    if let Ok(raw) = std::env::var("GOBAN_SIZE") {
        match raw.trim().parse() {
            Ok(size) => config.size = size,
            Err(_) => log::warn!("ignoring GOBAN_SIZE={:?}: not a number", raw),
        }
    }
    if let Ok(raw) = std::env::var("GOBAN_KOMI") {
        match raw.trim().parse() {
            Ok(komi) => config.komi = komi,
            Err(_) => log::warn!("ignoring GOBAN_KOMI={:?}: not a number", raw),
        }
    }

    if let Err(e) = config.validate() {
        log::warn!("{}; using defaults", e);
        return GameConfig::default();
    }
    config
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let config = config_from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Goban"),
        ..Default::default()
    };

    eframe::run_native(
        "Goban",
        options,
        Box::new(move |cc| Ok(Box::new(GoApp::new(cc, config)))),
    )
}
