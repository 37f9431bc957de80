// src/gui/pages/keywords.rs
use eframe::egui;

use super::Tab;
use crate::config::options::TabKind;
use crate::gui::{app::App, components};

pub struct KeywordsTab;
pub static TAB: KeywordsTab = KeywordsTab;

impl Tab for KeywordsTab {
    fn kind(&self) -> TabKind {
        TabKind::Keywords
    }

    fn title(&self) -> &'static str {
        "Keywords"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let App {
            keywords,
            state,
            out_dir_text,
            out_dir_dirty,
            status,
            ..
        } = app;
        components::table_page(
            ui,
            keywords,
            &mut state.options.export,
            out_dir_text,
            out_dir_dirty,
            status,
        );
    }
}
