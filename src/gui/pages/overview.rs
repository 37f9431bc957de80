// src/gui/pages/overview.rs
//
// Summary tab: active domain, dataset sizes, settings documents.
// No table view of its own.

use eframe::egui::{self, RichText};

use super::Tab;
use crate::config::options::TabKind;
use crate::gui::app::App;

pub struct OverviewTab;
pub static TAB: OverviewTab = OverviewTab;

impl Tab for OverviewTab {
    fn kind(&self) -> TabKind {
        TabKind::Overview
    }

    fn title(&self) -> &'static str {
        "Overview"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading(RichText::new(&app.state.options.export.domain).strong());

        ui.add_space(8.0);

        egui::Grid::new("overview_counts").num_columns(2).show(ui, |ui| {
            ui.label("Competitors:");
            ui.label(format!("{}", app.competitors.view.dataset_len()));
            ui.end_row();

            ui.label("Keywords:");
            ui.label(format!("{}", app.keywords.view.dataset_len()));
            ui.end_row();

            ui.label("Pages:");
            ui.label(format!("{}", app.pages.view.dataset_len()));
            ui.end_row();

            ui.label("Tracked domains:");
            ui.label(format!("{}", app.domains.len()));
            ui.end_row();

            ui.label("Tag colors:");
            ui.label(format!("{}", app.tag_colors.len()));
            ui.end_row();
        });

        ui.add_space(8.0);

        if let Ok(next) = app.state.options.export.out_path() {
            ui.weak(format!("Next export: {}", next.display()));
        }

        if ui.button("Reload data").clicked() {
            logf!("UI: Reload requested");
            app.reload_datasets();
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    }
}
