// src/gui/components/tabs.rs
//
// Renders the top tab strip and performs the tab switch itself.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let tabs = router::all_tabs();
        let cur = app.current_index();

        for (idx, tab) in tabs.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                let prev = app.current_tab_kind();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, tab.kind());
            }
        }
    });
}
