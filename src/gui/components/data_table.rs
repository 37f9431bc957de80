// src/gui/components/data_table.rs
//
// Draws the live table for one view: clickable sortable headers, numeric
// columns centered, activatable cells as links. Sort/activate clicks are
// collected during the draw and applied to the view afterwards, once the
// row borrows are gone.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::view::TableView;

pub fn draw<R>(ui: &mut egui::Ui, view: &mut TableView<R>) {
    if !view.is_loaded() {
        ui.weak("No data loaded yet.");
        return;
    }
    if view.dataset_len() == 0 {
        ui.weak("Dataset is empty.");
        return;
    }

    let columns = view.columns();
    let sort_key = view.sort_key();
    let sort_dir = view.sort_dir();
    let nrows = view.len();

    let mut clicked_sort: Option<&'static str> = None;
    let mut activated: Option<String> = None;

    let avail_h = ui.available_height();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .id_salt(("data_table", columns.len()));

    for col in columns {
        let w = if col.numeric { 70.0 } else { 200.0 };
        table = table.column(TableColumn::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for col in columns {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                    let sorted_here = sort_key == Some(col.key);
                    let label = if sorted_here {
                        format!("{} {}", col.label, sort_dir.arrow())
                    } else {
                        s!(col.label)
                    };

                    let widget = egui::Label::new(RichText::new(label).strong())
                        .selectable(false)
                        .sense(Sense::click());

                    let resp = if col.numeric {
                        ui.centered_and_justified(|ui| ui.add(widget)).inner
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| ui.add(widget))
                            .inner
                    };
                    if resp.clicked() {
                        clicked_sort = Some(col.key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, nrows, |mut row| {
                let row_idx = row.index();
                let Some(rec) = view.row(row_idx) else { return };

                for col in columns {
                    let val = col.value(rec);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let text = val.display();

                        if col.activatable && !val.is_missing() {
                            if ui.link(&text).clicked() {
                                activated = Some(text.clone());
                            }
                        } else if col.numeric {
                            ui.centered_and_justified(|ui| {
                                ui.label(&text);
                            });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(&text);
                            });
                        }
                    });
                }
            });
        });

    if nrows == 0 {
        ui.weak("No rows match the current search.");
    }

    if let Some(key) = clicked_sort {
        logf!("UI: sort by '{}'", key);
        view.sort_by(key);
    }
    if let Some(word) = activated {
        view.activate_keyword(word);
    }
}
