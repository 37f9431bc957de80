// src/gui/pages/competitors.rs
use eframe::egui;

use super::Tab;
use crate::config::options::TabKind;
use crate::gui::{app::App, components};

pub struct CompetitorsTab;
pub static TAB: CompetitorsTab = CompetitorsTab;

impl Tab for CompetitorsTab {
    fn kind(&self) -> TabKind {
        TabKind::Competitors
    }

    fn title(&self) -> &'static str {
        "Competitors"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let App {
            competitors,
            state,
            out_dir_text,
            out_dir_dirty,
            status,
            ..
        } = app;
        components::table_page(
            ui,
            competitors,
            &mut state.options.export,
            out_dir_text,
            out_dir_dirty,
            status,
        );
    }
}
