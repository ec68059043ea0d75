//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::actions::{FileActions, LoggingActions};
use crate::core::item::ExplorerItem;
use crate::core::render::{render_tree, VisualRow};
use crate::core::view::TreeView;
use crate::ui::layout::AppLayout;
use crate::ui::tree_widget::TreeViewport;

use super::listener::{Document, PointerListener, Subscription};

/// Top-level application state.
pub struct AppState {
    /// The explorer tree supplied at startup.  Never mutated.
    pub tree: ExplorerItem,
    /// Expansion, selection and context menu state.
    pub view: TreeView,
    /// Cursor row and scroll offset of the tree pane.
    pub viewport: TreeViewport,
    /// Screen-level pointer listeners.
    pub document: Document,
    /// Held while the context menu is visible.
    outside_click: Option<Subscription>,
    /// User-configurable keybindings and display options.
    pub config: AppConfig,
    /// Title of the tree pane.
    pub title: String,
    /// Last known terminal size, used for mouse hit testing.
    pub terminal_area: Rect,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    /// State backed by the logging [`LoggingActions`] stub.
    pub fn new(tree: ExplorerItem, config: AppConfig) -> Self {
        Self::with_actions(tree, config, Box::new(LoggingActions))
    }

    pub fn with_actions(tree: ExplorerItem, config: AppConfig, actions: Box<dyn FileActions>) -> Self {
        let title = tree.name().to_string();
        Self {
            tree,
            view: TreeView::new(actions),
            viewport: TreeViewport::default(),
            document: Document::new(),
            outside_click: None,
            config,
            title,
            terminal_area: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    /// Rows for the current state, recomputed on every call.
    pub fn rows(&self) -> Vec<VisualRow> {
        render_tree(&self.tree, self.view.render_state())
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::from_area(self.terminal_area)
    }

    /// Install or release the outside-click listener so that it exists
    /// exactly while the context menu is visible.
    pub fn sync_menu_listener(&mut self) {
        let visible = self.view.menu().is_visible();
        match (visible, self.outside_click.is_some()) {
            (true, false) => {
                self.outside_click = Some(self.document.subscribe(PointerListener::OutsideClick));
            }
            (false, true) => {
                self.outside_click = None;
            }
            _ => return,
        }
        tracing::debug!(listeners = self.document.listener_count(), "menu listener synced");
    }

    pub fn outside_click_subscribed(&self) -> bool {
        self.outside_click.is_some()
    }

    /// Status bar text and whether it reports an error.
    pub fn status_line(&self) -> (String, bool) {
        match self.view.last_outcome() {
            Some(Ok(report)) => (report.to_string(), false),
            Some(Err(err)) => (err.to_string(), true),
            None => match self.view.selection().selected() {
                Some(path) => (format!("{path} | {}", self.config.status_bar_hint()), false),
                None => (self.config.status_bar_hint(), false),
            },
        }
    }
}
