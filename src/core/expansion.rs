//! Which folders are currently expanded.

use std::collections::HashSet;

use super::item::NodePath;

/// Set of expanded folder paths.
///
/// Values are never edited in place: [`ExpansionState::toggled`] hands back a
/// replacement, so holders can tell a change happened by swapping values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<NodePath>,
}

impl ExpansionState {
    /// Fully collapsed tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.contains(path)
    }

    /// A new state with `path`'s membership flipped and everything else kept.
    #[must_use]
    pub fn toggled(&self, path: &NodePath) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(path) {
            expanded.insert(path.clone());
        }
        Self { expanded }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::new();
        assert_eq!(state.len(), 0);
        assert!(!state.is_expanded(&NodePath::from("/src")));
    }

    #[test]
    fn toggle_returns_a_new_value() {
        let before = ExpansionState::new();
        let after = before.toggled(&NodePath::from("/src"));
        assert!(!before.is_expanded(&NodePath::from("/src")));
        assert!(after.is_expanded(&NodePath::from("/src")));
        assert_ne!(before, after);
    }

    #[test]
    fn double_toggle_only_touches_that_path() {
        let docs = NodePath::from("/root/docs");
        let pics = NodePath::from("/root/pics");
        let base = ExpansionState::new().toggled(&pics);

        let once = base.toggled(&docs);
        assert!(once.is_expanded(&docs));
        assert!(once.is_expanded(&pics));

        let twice = once.toggled(&docs);
        assert_eq!(twice, base);
        assert!(twice.is_expanded(&pics));
        assert_eq!(twice.len(), 1);
    }
}
