// src/gui/components/mod.rs

use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::config::options::ExportOptions;
use crate::gui::app::Pane;

pub mod data_table;
pub mod export_bar;
pub mod search_bar;
pub mod tabs;

/// The shared layout of every tabular tab: search bar, export bar, table.
/// Only the row body and the count badge change when the view recomputes;
/// the search input keeps its widget state across re-filters.
pub fn table_page<R>(
    ui: &mut egui::Ui,
    pane: &mut Pane<R>,
    export: &mut ExportOptions,
    out_dir_text: &mut String,
    out_dir_dirty: &mut bool,
    status: &Arc<Mutex<String>>,
) {
    pane.search.draw(ui, &mut pane.view);

    ui.separator();

    export_bar::draw(ui, &mut pane.view, export, out_dir_text, out_dir_dirty, status);

    ui.separator();

    data_table::draw(ui, &mut pane.view);
}
