//! The tree view component: owns expansion, selection/focus, and context
//! menu state, and forwards menu actions to a [`FileActions`] backend.
//!
//! Input plumbing (keys, mouse, hit testing) lives in `app::handler`; this
//! type only exposes the operations those events map onto.

use super::actions::{ActionError, ActionReport, FileActions, LoggingActions};
use super::expansion::ExpansionState;
use super::item::{FileItem, NodePath};
use super::menu::{ContextMenu, MenuAction, MenuTarget};
use super::render::RenderState;
use super::selection::SelectionState;

pub struct TreeView {
    expansion: ExpansionState,
    selection: SelectionState,
    menu: ContextMenu,
    actions: Box<dyn FileActions>,
    last_outcome: Option<Result<ActionReport, ActionError>>,
}

impl Default for TreeView {
    fn default() -> Self {
        Self::new(Box::new(LoggingActions))
    }
}

impl TreeView {
    pub fn new(actions: Box<dyn FileActions>) -> Self {
        Self {
            expansion: ExpansionState::new(),
            selection: SelectionState::new(),
            menu: ContextMenu::Hidden,
            actions,
            last_outcome: None,
        }
    }

    // ── expansion ───────────────────────────────────────────────

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expansion.is_expanded(path)
    }

    pub fn toggle(&mut self, path: &NodePath) {
        self.expansion = self.expansion.toggled(path);
        tracing::debug!(
            path = %path,
            expanded = self.is_expanded(path),
            expanded_count = self.expansion.len(),
            "toggle folder"
        );
    }

    // ── selection / focus ───────────────────────────────────────

    /// Select and focus a file.  Also dismisses the context menu.
    pub fn select_file(&mut self, path: &NodePath) {
        self.selection.select(path);
        self.menu.close();
        tracing::debug!(path = %path, "select file");
    }

    pub fn is_selected(&self, path: &NodePath) -> bool {
        self.selection.is_selected(path)
    }

    pub fn is_focused(&self, path: &NodePath) -> bool {
        self.selection.is_focused(path)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ── context menu ────────────────────────────────────────────

    pub fn open_context_menu(&mut self, x: u16, y: u16, path: &NodePath, file: &FileItem) {
        tracing::debug!(path = %path, x, y, "open context menu");
        self.menu.open(
            x,
            y,
            MenuTarget {
                path: path.clone(),
                file: file.clone(),
            },
        );
    }

    pub fn close_context_menu(&mut self) {
        if self.menu.is_visible() {
            tracing::debug!("close context menu");
        }
        self.menu.close();
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut ContextMenu {
        &mut self.menu
    }

    /// Run `action` against the captured target, then hide the menu.
    ///
    /// With no menu open there is no target; the menu simply stays hidden.
    pub fn dispatch(&mut self, action: MenuAction) {
        if let Some(target) = self.menu.target().cloned() {
            let outcome = self.actions.perform(action, &target);
            if let Err(ref err) = outcome {
                tracing::warn!(%err, "file action failed");
            }
            self.last_outcome = Some(outcome);
        }
        self.menu.close();
    }

    /// Result of the most recent dispatch, for the status bar.
    pub fn last_outcome(&self) -> Option<&Result<ActionReport, ActionError>> {
        self.last_outcome.as_ref()
    }

    // ── rendering ───────────────────────────────────────────────

    pub fn render_state(&self) -> RenderState<'_> {
        RenderState {
            expansion: &self.expansion,
            selection: &self.selection,
        }
    }
}
