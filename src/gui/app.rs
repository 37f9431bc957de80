// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use serde::de::DeserializeOwned;

use crate::{
    config::{
        options::TabKind,
        state::AppState,
    },
    record::{
        Column, CompetitorRecord, KeywordRecord, PageRecord, COMPETITOR_COLUMNS, KEYWORD_COLUMNS,
        PAGE_COLUMNS,
    },
    store::{DatasetKind, DomainEntry, Store, TagColors},
    view::{NoticeKind, TableView, ViewEvent},
};

use super::{components::search_bar::SearchBox, pages::Tab, router};

pub fn run(state: AppState) -> Result<(), Box<dyn Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            state.gui.window_w as f32,
            state.gui.window_h as f32,
        ]),
        ..Default::default()
    };
    eframe::run_native(
        "Rankview",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// One tabular tab: the view core plus its search box widget state.
/// The search text lives here, not in the view, so re-filtering never
/// rebuilds the input widget (cursor and IME state survive).
pub struct Pane<R: 'static> {
    pub view: TableView<R>,
    pub search: SearchBox,
}

impl<R> Pane<R> {
    pub fn new(columns: &'static [Column<R>]) -> Self {
        Self {
            view: TableView::new(columns),
            search: SearchBox::new(),
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // one pane per tabular tab
    pub competitors: Pane<CompetitorRecord>,
    pub keywords: Pane<KeywordRecord>,
    pub pages: Pane<PageRecord>,

    // settings documents (read at startup, replaced wholesale on save)
    pub domains: Vec<DomainEntry>,
    pub tag_colors: TagColors,

    // output dir text field UX (maps <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    pub status: Arc<Mutex<String>>,

    store: Store,
}

fn load_pane<R: DeserializeOwned>(
    store: &Store,
    kind: DatasetKind,
    pane: &mut Pane<R>,
    status: &mut String,
) {
    match store.load_dataset::<R>(kind) {
        Ok(rows) => {
            if rows.is_empty() {
                logd!("Store: {:?} is empty", kind);
                pane.view.load(Some(Vec::new()));
            } else {
                logf!("Store: Loaded {:?} (rows={})", kind, rows.len());
                pane.view.load(Some(rows));
                *status = s!("Loaded local data");
            }
        }
        Err(e) => {
            loge!("Store: Failed to load {:?}: {}", kind, e);
        }
    }
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");
        let store = Store::default();

        let domains = store.load_domains().unwrap_or_else(|e| {
            loge!("Store: domains load failed: {}", e);
            Vec::new()
        });
        let tag_colors = store.load_tag_colors().unwrap_or_else(|e| {
            loge!("Store: tag_colors load failed: {}", e);
            TagColors::new()
        });

        // Active project domain drives the export filename.
        if let Some(first) = domains.first() {
            state.options.export.domain = first.name.clone();
        }

        let mut competitors = Pane::new(COMPETITOR_COLUMNS);
        let mut keywords = Pane::new(KEYWORD_COLUMNS);
        let mut pages = Pane::new(PAGE_COLUMNS);

        load_pane(&store, DatasetKind::Competitors, &mut competitors, &mut status);
        load_pane(&store, DatasetKind::Keywords, &mut keywords, &mut status);
        load_pane(&store, DatasetKind::Pages, &mut pages, &mut status);

        logf!(
            "Init: domains={}, domain='{}', default tab={:?}",
            domains.len(),
            state.options.export.domain,
            TabKind::Overview
        );

        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        Self {
            state,
            competitors,
            keywords,
            pages,
            domains,
            tag_colors,
            out_dir_text,
            out_dir_dirty: false,
            status: Arc::new(Mutex::new(status)),
            store,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_tab_index
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_tab_index = idx;
    }

    #[inline]
    pub fn current_tab(&self) -> &'static dyn Tab {
        router::all_tabs()[self.current_index()]
    }

    #[inline]
    pub fn current_tab_kind(&self) -> TabKind {
        self.current_tab().kind()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Re-read all three datasets from the store.
    pub fn reload_datasets(&mut self) {
        let mut status = s!("Reloaded");
        load_pane(&self.store, DatasetKind::Competitors, &mut self.competitors, &mut status);
        load_pane(&self.store, DatasetKind::Keywords, &mut self.keywords, &mut status);
        load_pane(&self.store, DatasetKind::Pages, &mut self.pages, &mut status);
        self.status(status);
    }

    /// Cross-view navigation: jump to the Keywords tab pre-filtered to
    /// one keyword.
    fn goto_keyword(&mut self, word: &str) {
        logf!("UI: keyword activated '{}', routing to Keywords", word);
        self.set_current_index(router::index_of(TabKind::Keywords));
        self.keywords.search.seed(word, &mut self.keywords.view);
    }

    /// Drain the typed event queues of all panes. Notifications land in
    /// the status line; keyword activations route across views.
    fn route_events(&mut self) {
        let mut goto: Option<String> = None;
        let status = self.status.clone();

        for ev in drain(&mut self.competitors.view)
            .chain(drain(&mut self.keywords.view))
            .chain(drain(&mut self.pages.view))
        {
            match ev {
                ViewEvent::Notification(n) => {
                    match n.kind {
                        NoticeKind::Success => logf!("Notice: {}", n.message),
                        NoticeKind::Error => loge!("Notice: {}", n.message),
                    }
                    *status.lock().unwrap() = n.message;
                }
                ViewEvent::KeywordActivated(w) => goto = Some(w),
            }
        }

        if let Some(w) = goto {
            self.goto_keyword(&w);
        }
    }
}

fn drain<R>(view: &mut TableView<R>) -> impl Iterator<Item = ViewEvent> {
    let mut out = Vec::new();
    while let Some(ev) = view.poll_event() {
        out.push(ev);
    }
    out.into_iter()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let tab = self.current_tab();
            tab.draw(ui, self);
        });

        self.route_events();
    }
}
