// src/gui/components/search_bar.rs
//
// Search input + row count badge. The typed text is widget state; the
// view's query only changes once the debouncer's quiet window elapses,
// so a fast typist triggers one re-filter, not one per keystroke.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::consts::SEARCH_DEBOUNCE_MS;
use crate::view::{Debouncer, TableView};

pub struct SearchBox {
    pub text: String,
    debounce: Debouncer<String>,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            text: s!(),
            debounce: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
        }
    }

    /// Programmatic query (cross-view navigation): applies immediately and
    /// drops any pending debounced input.
    pub fn seed<R>(&mut self, query: &str, view: &mut TableView<R>) {
        self.text = s!(query);
        self.debounce.cancel();
        view.set_query(query);
    }

    pub fn draw<R>(&mut self, ui: &mut egui::Ui, view: &mut TableView<R>) {
        ui.horizontal(|ui| {
            ui.label("Search:");

            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.text)
                    .hint_text("Filter rows…")
                    .desired_width(240.0),
            );
            if resp.changed() {
                self.debounce.submit(self.text.clone());
            }

            if let Some(q) = self.debounce.poll() {
                logd!("UI: query applied '{}'", q);
                view.set_query(q);
            }
            if let Some(left) = self.debounce.time_left(Instant::now()) {
                // Wake up when the pending query falls due.
                ui.ctx().request_repaint_after(left);
            }

            if view.is_loaded() {
                ui.label(format!("{} / {} rows", view.len(), view.dataset_len()));
            } else {
                ui.weak("no data");
            }
        });
    }
}
