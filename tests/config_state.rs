// tests/config_state.rs

use rankview::config::state::{AppState, GuiState};

#[test]
fn default_window_geometry_is_sane() {
    // gui::run builds the viewport from these; keep them nonzero.
    let gui = GuiState::default();
    assert!(gui.window_w >= 640);
    assert!(gui.window_h >= 480);
}

#[test]
fn default_state_opens_on_the_first_tab() {
    let state = AppState::default();
    assert_eq!(state.gui.current_tab_index, 0);
}
