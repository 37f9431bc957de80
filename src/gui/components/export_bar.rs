// src/gui/components/export_bar.rs

use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::config::options::ExportOptions;
use crate::csv;
use crate::file;
use crate::view::{NoticeKind, TableView};

pub fn draw<R>(
    ui: &mut egui::Ui,
    view: &mut TableView<R>,
    export: &mut ExportOptions,
    out_dir_text: &mut String,
    out_dir_dirty: &mut bool,
    status: &Arc<Mutex<String>>,
) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(out_dir_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            *out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", out_dir_text);
        }

        // Copy
        if ui.button("Copy").clicked() {
            if view.is_empty() {
                logd!("Copy: Clicked, but there's nothing to copy");
                view.notify(NoticeKind::Error, "Nothing to copy");
            } else {
                let txt = csv::to_clipboard_string(&view.header_labels(), &view.export_rows());
                logf!("Copy: rows={}", view.len());
                ui.ctx().copy_text(txt);
                view.notify(NoticeKind::Success, "Copied to clipboard");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            if *out_dir_dirty {
                export.set_dir(out_dir_text);
                logf!("Export: Out dir set → {}", export.out_dir().display());
                *out_dir_dirty = false;
            }

            if view.is_empty() {
                // Precondition failure, not a fault: surfaced, nothing written.
                logd!("Export: Clicked, but there's nothing to export");
                view.notify(NoticeKind::Error, "Nothing to export");
            } else {
                let rows = view.export_rows();
                logf!(
                    "Export: Begin domain='{}', rows={}",
                    export.domain,
                    rows.len()
                );
                match file::write_export(
                    export.out_dir(),
                    &export.domain,
                    &view.header_labels(),
                    &rows,
                ) {
                    Ok(path) => {
                        logf!("Export: OK → {}", path.display());
                        view.notify(
                            NoticeKind::Success,
                            format!("Exported {} row(s) → {}", rows.len(), path.display()),
                        );
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        view.notify(NoticeKind::Error, format!("Export error: {e}"));
                    }
                }
            }
        }

        let msg = status.lock().unwrap().clone();
        ui.label(format!("Status: {msg}"));
    });
}
