// src/gui/pages/site_pages.rs
//
// The "Pages" tab (pages of the tracked site). Module named site_pages to
// stay clear of the gui::pages module itself.

use eframe::egui;

use super::Tab;
use crate::config::options::TabKind;
use crate::gui::{app::App, components};

pub struct SitePagesTab;
pub static TAB: SitePagesTab = SitePagesTab;

impl Tab for SitePagesTab {
    fn kind(&self) -> TabKind {
        TabKind::Pages
    }

    fn title(&self) -> &'static str {
        "Pages"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let App {
            pages,
            state,
            out_dir_text,
            out_dir_dirty,
            status,
            ..
        } = app;
        components::table_page(
            ui,
            pages,
            &mut state.options.export,
            out_dir_text,
            out_dir_dirty,
            status,
        );
    }
}
