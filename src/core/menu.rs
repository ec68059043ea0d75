//! Context menu state machine: `Hidden` or `Visible` at a position with a
//! captured target file.

use std::fmt;

use super::item::{FileItem, NodePath};

// ───────────────────────────────────────── actions ───────────

/// Entries offered by the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Copy,
    Delete,
    Rename,
}

impl MenuAction {
    /// Display order in the menu.
    pub const ALL: &[MenuAction] = &[MenuAction::Copy, MenuAction::Delete, MenuAction::Rename];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Copy => "Copy",
            MenuAction::Delete => "Delete",
            MenuAction::Rename => "Rename",
        }
    }

    /// Single-key accelerator shown next to the label.
    pub fn hotkey(self) -> char {
        match self {
            MenuAction::Copy => 'c',
            MenuAction::Delete => 'd',
            MenuAction::Rename => 'r',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.hotkey() == c)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ───────────────────────────────────────── state ─────────────

/// The file a menu was opened on, captured at open time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub path: NodePath,
    pub file: FileItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContextMenu {
    #[default]
    Hidden,
    Visible {
        /// Anchor column (top-left of the menu).
        x: u16,
        /// Anchor row.
        y: u16,
        target: MenuTarget,
        /// Highlighted entry, index into [`MenuAction::ALL`].
        highlighted: usize,
    },
}

impl ContextMenu {
    /// Show the menu at `(x, y)` for `target`.  An already visible menu is
    /// replaced outright.
    pub fn open(&mut self, x: u16, y: u16, target: MenuTarget) {
        *self = ContextMenu::Visible {
            x,
            y,
            target,
            highlighted: 0,
        };
    }

    pub fn close(&mut self) {
        *self = ContextMenu::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ContextMenu::Visible { .. })
    }

    pub fn target(&self) -> Option<&MenuTarget> {
        match self {
            ContextMenu::Visible { target, .. } => Some(target),
            ContextMenu::Hidden => None,
        }
    }

    pub fn anchor(&self) -> Option<(u16, u16)> {
        match self {
            ContextMenu::Visible { x, y, .. } => Some((*x, *y)),
            ContextMenu::Hidden => None,
        }
    }

    pub fn highlighted(&self) -> Option<MenuAction> {
        match self {
            ContextMenu::Visible { highlighted, .. } => MenuAction::ALL.get(*highlighted).copied(),
            ContextMenu::Hidden => None,
        }
    }

    /// Move the highlight by `delta`, clamped to the entry list.
    pub fn move_highlight(&mut self, delta: isize) {
        if let ContextMenu::Visible { highlighted, .. } = self {
            let last = MenuAction::ALL.len() - 1;
            *highlighted = highlighted.saturating_add_signed(delta).min(last);
        }
    }
}
