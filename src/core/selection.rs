//! Selected and focused file tracking.
//!
//! Both are keyed by full [`NodePath`], so `a/notes.txt` and `b/notes.txt`
//! are distinct even though they share a name.

use super::item::NodePath;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<NodePath>,
    focused: Option<NodePath>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select and focus `path`, replacing any previous selection.
    pub fn select(&mut self, path: &NodePath) {
        self.selected = Some(path.clone());
        self.focused = Some(path.clone());
    }

    pub fn is_selected(&self, path: &NodePath) -> bool {
        self.selected.as_ref() == Some(path)
    }

    pub fn is_focused(&self, path: &NodePath) -> bool {
        self.focused.as_ref() == Some(path)
    }

    pub fn selected(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_previous_file() {
        let a = NodePath::from("/src/a.ts");
        let b = NodePath::from("/src/b.ts");
        let mut state = SelectionState::new();
        state.select(&a);
        state.select(&b);

        assert!(state.is_selected(&b));
        assert!(state.is_focused(&b));
        assert!(!state.is_selected(&a));
        assert!(!state.is_focused(&a));
    }

    #[test]
    fn same_name_in_other_folder_is_not_selected() {
        let docs = NodePath::from("/home/docs/notes.txt");
        let work = NodePath::from("/home/work/notes.txt");
        let mut state = SelectionState::new();
        state.select(&docs);

        assert!(state.is_selected(&docs));
        assert!(!state.is_selected(&work));
        assert!(!state.is_focused(&work));
    }
}
