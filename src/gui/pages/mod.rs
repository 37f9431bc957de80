// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::TabKind;
use crate::gui::app::App;

pub mod competitors;
pub mod keywords;
pub mod overview;
pub mod site_pages;

/// One top-level tab. Tabular tabs delegate to the shared pane components;
/// Overview draws its own summary.
pub trait Tab: Send + Sync + 'static {
    fn kind(&self) -> TabKind;
    fn title(&self) -> &'static str;
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
