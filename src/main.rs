#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cardboard::{
    gui::CardBoardApp,
    persistence::{
        load_json_or_default,
        BoardSettings,
        SETTINGS_FILE,
    },
};
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_json_or_default::<BoardSettings>(SETTINGS_FILE);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    let res = eframe::run_native(
        "Card Board",
        native_options,
        Box::new(|cc| Ok(Box::new(CardBoardApp::new(cc, settings)))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
