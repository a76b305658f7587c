//! Desktop window for the day reachability calculator — macroquad entry point.
//!
//! Usage: `dayreach-gui [--export <path>] [--dark]`

use std::path::PathBuf;

use macroquad::prelude::*;

use dr_core::ReachConfig;
use dr_gui::app::{AppState, DEFAULT_EXPORT_PATH};
use dr_gui::heading::random_heading;
use dr_gui::screen::MainScreen;
use dr_gui::theme::{WINDOW_H, WINDOW_W};

fn window_conf() -> Conf {
    Conf {
        window_title: "Day-Based Probability Checker".to_owned(),
        window_width: WINDOW_W as i32,
        window_height: WINDOW_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    dr_core::logging::init_tracing();

    // Parse CLI args: --export <path>, --dark
    let args: Vec<String> = std::env::args().collect();
    let export_path = args
        .windows(2)
        .find(|w| w[0] == "--export")
        .map(|w| PathBuf::from(&w[1]))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
    let dark = args.iter().any(|a| a == "--dark");

    let heading = random_heading(&mut ::rand::rng());
    let mut app = AppState::new(ReachConfig::default(), heading, export_path);
    app.dark_mode = dark;
    tracing::info!(export = %app.export_path.display(), dark, "window opened");

    let mut screen = MainScreen::new();

    loop {
        screen.update(&mut app);
        screen.draw(&app);

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
