//! Recursive renderer: explorer tree + view state → flat list of visual rows.
//!
//! This is the only place that decides what is on screen.  It reads a
//! snapshot of the expansion and selection state and never writes to it, so
//! calling it twice with the same inputs yields identical rows.

use super::expansion::ExpansionState;
use super::item::{ExplorerItem, NodePath};
use super::selection::SelectionState;

/// What kind of row is drawn and the affordances it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    File {
        meta: String,
        selected: bool,
        focused: bool,
    },
    Folder {
        expanded: bool,
    },
}

/// One visual row, keyed by the node's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualRow {
    pub path: NodePath,
    pub depth: usize,
    pub label: String,
    pub kind: RowKind,
}

impl VisualRow {
    pub fn is_file(&self) -> bool {
        matches!(self.kind, RowKind::File { .. })
    }
}

/// Read-only state consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderState<'a> {
    pub expansion: &'a ExpansionState,
    pub selection: &'a SelectionState,
}

/// Render the whole tree starting at `root`.
pub fn render_tree(root: &ExplorerItem, state: RenderState<'_>) -> Vec<VisualRow> {
    let mut rows = Vec::new();
    render_node(root, &NodePath::root(), 0, state, &mut rows);
    rows
}

/// Render `item` (living under `parent`) and, for expanded folders, its
/// children.  Collapsed folders are never descended into.
pub fn render_node(
    item: &ExplorerItem,
    parent: &NodePath,
    depth: usize,
    state: RenderState<'_>,
    rows: &mut Vec<VisualRow>,
) {
    let path = parent.child(item.name());

    match item {
        ExplorerItem::File(file) => {
            rows.push(VisualRow {
                depth,
                label: file.name.clone(),
                kind: RowKind::File {
                    meta: file.meta.clone(),
                    selected: state.selection.is_selected(&path),
                    focused: state.selection.is_focused(&path),
                },
                path,
            });
        }
        ExplorerItem::Folder(folder) => {
            let expanded = state.expansion.is_expanded(&path);
            rows.push(VisualRow {
                path: path.clone(),
                depth,
                label: folder.name.clone(),
                kind: RowKind::Folder { expanded },
            });
            if expanded {
                for child in &folder.children {
                    render_node(child, &path, depth + 1, state, rows);
                }
            }
        }
    }
}
