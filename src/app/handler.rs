//! Maps key and mouse events onto tree view operations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::Action;
use crate::core::item::FileItem;
use crate::core::menu::MenuAction;
use crate::core::render::{RowKind, VisualRow};
use crate::ui::context_menu::{item_at, menu_rect};
use crate::ui::layout::point_in_rect;

use super::listener::PointerListener;
use super::state::AppState;

/// Process a key event.  While the context menu is open it takes the keys.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Only process Press events (ignore Release/Repeat on supported terminals).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.view.menu().is_visible() {
        handle_menu_key(state, key);
    } else {
        handle_tree_key(state, key);
    }
    finish_event(state);
}

// ── Tree (configurable bindings) ────────────────────────────────

fn handle_tree_key(state: &mut AppState, key: KeyEvent) {
    // Navigation keys that should always work in tree view.
    match key.code {
        KeyCode::Home => {
            state.viewport.cursor = 0;
            state.viewport.offset = 0;
            return;
        }
        KeyCode::End => {
            let count = state.rows().len();
            state.viewport.cursor = count.saturating_sub(1);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    let rows = state.rows();

    match action {
        Action::Quit => state.should_quit = true,
        Action::MoveUp | Action::FocusPrev => state.viewport.select_prev(),
        Action::MoveDown | Action::FocusNext => state.viewport.select_next(rows.len()),
        Action::Activate => {
            if let Some(row) = rows.get(state.viewport.cursor) {
                activate_row(state, row);
            }
        }
        Action::Select => {
            // Space selects files only; on folders it does nothing.
            if let Some(row) = rows.get(state.viewport.cursor) {
                if row.is_file() {
                    state.view.select_file(&row.path);
                }
            }
        }
        Action::OpenMenu => {
            let cursor = state.viewport.cursor;
            if let Some(row) = rows.get(cursor) {
                open_menu_at_row(state, cursor, row);
            }
        }
    }
}

// ── Context menu (hardcoded keys) ───────────────────────────────

fn handle_menu_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.view.close_context_menu(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            state.view.menu_mut().move_highlight(-1);
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.view.menu_mut().move_highlight(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(action) = state.view.menu().highlighted() {
                state.view.dispatch(action);
            }
        }
        KeyCode::Char(c) => {
            if let Some(action) = MenuAction::from_hotkey(c) {
                state.view.dispatch(action);
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => left_click(state, mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Right) => right_click(state, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => state.viewport.select_prev(),
        MouseEventKind::ScrollDown => {
            let count = state.rows().len();
            state.viewport.select_next(count);
        }
        _ => return,
    }
    finish_event(state);
}

fn left_click(state: &mut AppState, col: u16, row: u16) {
    // Clicks inside the menu never reach the rows or the listeners.
    if let Some((x, y)) = state.view.menu().anchor() {
        let rect = menu_rect(x, y, state.terminal_area);
        if point_in_rect(rect, col, row) {
            if let Some(action) = item_at(rect, col, row) {
                state.view.dispatch(action);
            }
            return;
        }
    }

    let rows = state.rows();
    let hit = row_under(state, &rows, col, row);

    for listener in state.document.listeners() {
        match listener {
            PointerListener::OutsideClick => {
                let on_file = hit.is_some_and(|i| rows[i].is_file());
                if !on_file {
                    state.view.close_context_menu();
                }
            }
        }
    }

    if let Some(index) = hit {
        state.viewport.cursor = index;
        activate_row(state, &rows[index]);
    }
}

fn right_click(state: &mut AppState, col: u16, row: u16) {
    if let Some((x, y)) = state.view.menu().anchor() {
        if point_in_rect(menu_rect(x, y, state.terminal_area), col, row) {
            return;
        }
    }

    let rows = state.rows();
    let Some(index) = row_under(state, &rows, col, row) else {
        return;
    };
    let target = &rows[index];
    if let RowKind::File { meta, .. } = &target.kind {
        state.viewport.cursor = index;
        let file = FileItem {
            name: target.label.clone(),
            meta: meta.clone(),
        };
        state.view.open_context_menu(col, row, &target.path, &file);
    }
}

// ── Resize ──────────────────────────────────────────────────────

/// Track the new terminal size and keep the cursor row on screen.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.terminal_area = Rect::new(0, 0, width, height);
    finish_event(state);
}

// ── helpers ─────────────────────────────────────────────────────

/// Primary activation: folders toggle, files get selected.
fn activate_row(state: &mut AppState, row: &VisualRow) {
    match row.kind {
        RowKind::Folder { .. } => state.view.toggle(&row.path),
        RowKind::File { .. } => state.view.select_file(&row.path),
    }
}

/// Keyboard secondary activation: open the menu below the row's glyph.
fn open_menu_at_row(state: &mut AppState, index: usize, row: &VisualRow) {
    let RowKind::File { meta, .. } = &row.kind else {
        return;
    };
    let rows_area = state.layout().tree_rows_area();
    state.viewport.clamp_scroll(rows_area.height as usize);
    let Some(rect) = state
        .viewport
        .row_rect(rows_area, index, row.depth, state.config.indent_width)
    else {
        return;
    };
    let file = FileItem {
        name: row.label.clone(),
        meta: meta.clone(),
    };
    state.view.open_context_menu(rect.x, rect.y + 1, &row.path, &file);
}

/// Index of the rendered row under `(col, row)`, if any.
fn row_under(state: &AppState, rows: &[VisualRow], col: u16, row: u16) -> Option<usize> {
    let rows_area = state.layout().tree_rows_area();
    if !point_in_rect(rows_area, col, row) {
        return None;
    }
    state
        .viewport
        .row_at(rows_area, row)
        .filter(|&index| index < rows.len())
}

/// Bookkeeping after every handled event.
fn finish_event(state: &mut AppState) {
    state.sync_menu_listener();
    let count = state.rows().len();
    let height = state.layout().tree_rows_area().height as usize;
    state.viewport.clamp_cursor(count);
    state.viewport.clamp_scroll(height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::actions::{ActionError, ActionReport, FileActions};
    use crate::core::item::{ExplorerItem, NodePath};
    use crate::core::menu::MenuTarget;
    use crate::ui::tree_widget::TreeViewport;

    fn tree() -> ExplorerItem {
        ExplorerItem::folder(
            "src",
            vec![
                ExplorerItem::file("index.ts", "2KB"),
                ExplorerItem::folder("utils", vec![ExplorerItem::file("math.ts", "500B")]),
            ],
        )
    }

    fn app() -> AppState {
        AppState::new(tree(), AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        handle_mouse(state, mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    }

    fn right_click(state: &mut AppState, column: u16, row: u16) {
        handle_mouse(state, mouse(MouseEventKind::Down(MouseButton::Right), column, row));
    }

    fn labels(state: &AppState) -> Vec<String> {
        state.rows().into_iter().map(|r| r.label).collect()
    }

    fn index_ts() -> NodePath {
        NodePath::from("/src/index.ts")
    }

    // Rows start at screen row 1 (inside the pane border).

    #[test]
    fn initial_state_shows_collapsed_root() {
        let state = app();
        assert_eq!(labels(&state), vec!["src"]);
        assert!(!state.view.menu().is_visible());
        assert!(!state.outside_click_subscribed());
        assert_eq!(state.document.listener_count(), 0);
    }

    #[test]
    fn click_scenario_expand_select_menu_delete() {
        let mut state = app();

        click(&mut state, 5, 1);
        assert_eq!(labels(&state), vec!["src", "index.ts", "utils"]);

        click(&mut state, 5, 2);
        assert!(state.view.is_selected(&index_ts()));
        assert!(state.view.is_focused(&index_ts()));

        right_click(&mut state, 10, 2);
        assert_eq!(state.view.menu().anchor(), Some((10, 2)));
        assert_eq!(state.view.menu().target().map(|t| &t.path), Some(&index_ts()));
        assert_eq!(state.document.listener_count(), 1);

        // Menu occupies (10, 2, 16, 5); "Delete" is its second entry.
        click(&mut state, 12, 4);
        assert!(!state.view.menu().is_visible());
        assert_eq!(state.document.listener_count(), 0);
        assert!(state.view.is_selected(&index_ts()));
        assert_eq!(labels(&state), vec!["src", "index.ts", "utils"]);

        let (status, is_error) = state.status_line();
        assert!(status.ends_with("Delete action triggered for file: index.ts"));
        assert!(!is_error);
    }

    #[test]
    fn outside_click_closes_menu_without_touching_selection() {
        let mut state = app();
        click(&mut state, 5, 1);
        right_click(&mut state, 10, 2);
        assert!(state.view.menu().is_visible());

        click(&mut state, 60, 20);
        assert!(!state.view.menu().is_visible());
        assert!(!state.outside_click_subscribed());
        assert!(state.view.selection().selected().is_none());
    }

    #[test]
    fn clicking_a_folder_row_closes_menu_and_toggles() {
        let mut state = app();
        click(&mut state, 5, 1);
        right_click(&mut state, 5, 2);
        // Menu sits at (5, 2); the utils row at y = 3 is under it, so use a
        // column to its right.
        click(&mut state, 40, 3);
        assert!(!state.view.menu().is_visible());
        assert!(state.view.is_expanded(&NodePath::from("/src/utils")));
    }

    #[test]
    fn clicking_a_file_row_selects_and_closes_menu() {
        let mut state = app();
        click(&mut state, 5, 1);
        click(&mut state, 5, 3);
        assert_eq!(labels(&state), vec!["src", "index.ts", "utils", "math.ts"]);

        right_click(&mut state, 50, 4);
        click(&mut state, 5, 2);
        assert!(!state.view.menu().is_visible());
        assert!(state.view.is_selected(&index_ts()));
        assert_eq!(state.document.listener_count(), 0);
    }

    #[test]
    fn right_click_on_another_file_retargets() {
        let mut state = app();
        click(&mut state, 5, 1);
        click(&mut state, 5, 3);

        right_click(&mut state, 50, 2);
        right_click(&mut state, 5, 4);
        assert_eq!(
            state.view.menu().target().map(|t| t.path.as_str()),
            Some("/src/utils/math.ts")
        );
        assert_eq!(state.view.menu().anchor(), Some((5, 4)));
        assert_eq!(state.document.listener_count(), 1);
    }

    #[test]
    fn right_click_on_folder_or_empty_space_does_nothing() {
        let mut state = app();
        right_click(&mut state, 5, 1);
        right_click(&mut state, 5, 15);
        assert!(!state.view.menu().is_visible());
        assert!(!state.outside_click_subscribed());
    }

    #[test]
    fn keyboard_enter_space_and_tab() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.view.is_expanded(&NodePath::from("/src")));

        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.view.is_expanded(&NodePath::from("/src")));

        handle_key(&mut state, key(KeyCode::Tab));
        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(state.view.is_selected(&index_ts()));

        handle_key(&mut state, key(KeyCode::Tab));
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(labels(&state), vec!["src", "index.ts", "utils", "math.ts"]);

        handle_key(&mut state, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.viewport.cursor, 1);
    }

    #[test]
    fn menu_key_anchors_below_the_row() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Menu));

        // index.ts: depth 1, row y = 2, glyph at x = 1 + 2.
        assert_eq!(state.view.menu().anchor(), Some((3, 3)));
        assert!(state.outside_click_subscribed());

        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.view.menu().is_visible());
        assert!(!state.outside_click_subscribed());
        assert!(state.status_line().0.contains("Delete action"));
    }

    #[test]
    fn menu_key_on_folder_is_ignored() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Menu));
        assert!(!state.view.menu().is_visible());
    }

    #[test]
    fn menu_hotkeys_and_escape() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Down));

        handle_key(&mut state, key(KeyCode::Char('m')));
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.view.menu().is_visible());
        assert!(state.view.last_outcome().is_none());

        handle_key(&mut state, key(KeyCode::Char('m')));
        handle_key(&mut state, key(KeyCode::Char('r')));
        assert!(!state.view.menu().is_visible());
        assert!(state.status_line().0.contains("Rename action"));

        // `q` is a menu no-op but quits from the tree.
        handle_key(&mut state, key(KeyCode::Char('m')));
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(!state.should_quit);
        handle_key(&mut state, key(KeyCode::Esc));
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn right_click_on_the_menu_is_swallowed() {
        let mut state = app();
        click(&mut state, 5, 1);
        click(&mut state, 5, 3);
        right_click(&mut state, 50, 2);
        // (50, 4) is inside the menu, above the math.ts row.
        right_click(&mut state, 50, 4);
        assert_eq!(state.view.menu().target().map(|t| &t.path), Some(&index_ts()));
    }

    #[test]
    fn clicks_respect_scroll_offset() {
        let mut state = app();
        state.terminal_area = Rect::new(0, 0, 40, 5);

        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.viewport, TreeViewport { cursor: 3, offset: 2 });

        // Top visible row is now "utils".
        click(&mut state, 5, 1);
        assert_eq!(labels(&state), vec!["src", "index.ts", "utils"]);
        assert_eq!(state.viewport, TreeViewport { cursor: 2, offset: 2 });

        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.viewport, TreeViewport::default());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = app();
        let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        handle_key(&mut state, release);
        assert!(!state.view.is_expanded(&NodePath::from("/src")));
    }

    fn long_tree() -> ExplorerItem {
        let files = (0..20)
            .map(|i| ExplorerItem::file(format!("f{i}.txt"), ""))
            .collect();
        ExplorerItem::folder("r", files)
    }

    #[test]
    fn menu_key_after_shrinking_anchors_below_the_cursor_row() {
        let mut state = AppState::new(long_tree(), AppConfig::default());
        click(&mut state, 5, 1);
        for _ in 0..10 {
            handle_key(&mut state, key(KeyCode::Down));
        }
        assert_eq!(state.viewport.cursor, 10);
        assert_eq!(state.viewport.offset, 0);

        // Rows area shrinks to (1, 1, 78, 3).
        state.terminal_area = Rect::new(0, 0, 80, 6);
        handle_key(&mut state, key(KeyCode::Char('m')));

        assert_eq!(state.viewport.offset, 8);
        assert_eq!(state.view.menu().anchor(), Some((3, 4)));
        assert_eq!(
            state.view.menu().target().map(|t| t.path.as_str()),
            Some("/r/f9.txt")
        );
    }

    #[test]
    fn resize_keeps_the_cursor_row_visible() {
        let mut state = AppState::new(long_tree(), AppConfig::default());
        click(&mut state, 5, 1);
        for _ in 0..10 {
            handle_key(&mut state, key(KeyCode::Down));
        }

        handle_resize(&mut state, 80, 6);
        assert_eq!(state.terminal_area, Rect::new(0, 0, 80, 6));
        assert_eq!(state.viewport, TreeViewport { cursor: 10, offset: 8 });
    }

    struct Refusing;

    impl FileActions for Refusing {
        fn copy(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
            Ok(ActionReport::new(MenuAction::Copy, target))
        }
        fn delete(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
            Err(ActionError::Failed {
                action: MenuAction::Delete,
                path: target.path.to_string(),
                reason: "read-only tree".into(),
            })
        }
        fn rename(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
            Err(ActionError::Unsupported {
                action: MenuAction::Rename,
                path: target.path.to_string(),
            })
        }
    }

    #[test]
    fn backend_failures_reach_the_status_bar() {
        let mut state = AppState::with_actions(tree(), AppConfig::default(), Box::new(Refusing));
        click(&mut state, 5, 1);
        right_click(&mut state, 10, 2);
        click(&mut state, 12, 4);

        assert!(!state.view.menu().is_visible());
        assert_eq!(
            state.status_line(),
            ("Delete failed for /src/index.ts: read-only tree".to_string(), true)
        );
    }

    #[test]
    fn ctrl_c_quits_even_with_menu_open() {
        let mut state = app();
        click(&mut state, 5, 1);
        right_click(&mut state, 5, 2);
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit);
    }
}
