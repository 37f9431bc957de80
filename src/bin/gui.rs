// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use rankview::config::state::AppState;
use rankview::gui;

fn main() {
    // Window geometry comes from GuiState defaults.
    if let Err(e) = gui::run(AppState::default()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
