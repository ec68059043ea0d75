//! The caller-supplied explorer tree and the path identity derived from it.
//!
//! An [`ExplorerItem`] is either a file (leaf) or a folder (ordered children).
//! The tree is owned by the embedding binary and only ever borrowed here;
//! nothing in the view mutates it or caches data onto its nodes.

use std::fmt;

use serde::Deserialize;

// ───────────────────────────────────────── items ─────────────

/// A leaf entry.  `meta` is free-form display text (e.g. `"2KB"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileItem {
    pub name: String,
    #[serde(default)]
    pub meta: String,
}

/// An internal entry whose children keep the caller's order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderItem {
    pub name: String,
    #[serde(rename = "data", default)]
    pub children: Vec<ExplorerItem>,
}

/// One node of the explorer tree.
///
/// Read from JSON with a `type` tag, so documents look like
/// `{"type": "file", "name": "index.ts", "meta": "2KB"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExplorerItem {
    File(FileItem),
    Folder(FolderItem),
}

impl ExplorerItem {
    pub fn file(name: impl Into<String>, meta: impl Into<String>) -> Self {
        Self::File(FileItem {
            name: name.into(),
            meta: meta.into(),
        })
    }

    pub fn folder(name: impl Into<String>, children: Vec<ExplorerItem>) -> Self {
        Self::Folder(FolderItem {
            name: name.into(),
            children,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Folder(folder) => &folder.name,
        }
    }

    /// Direct children in caller order.  Files have none.
    pub fn children(&self) -> &[ExplorerItem] {
        match self {
            Self::File(_) => &[],
            Self::Folder(folder) => &folder.children,
        }
    }

    /// Pre-order descent over the whole tree, starting with `self`.
    ///
    /// Each call returns a fresh iterator, so the walk can be restarted at
    /// will.  Nodes are produced lazily; nothing is collected up front.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(NodePath::root().child(self.name()), self, 0)],
        }
    }
}

// ───────────────────────────────────────── path ──────────────

/// Identity of a node: `/` followed by every ancestor name down to the node.
///
/// The root item `src` lives at `/src`, its child `index.ts` at
/// `/src/index.ts`.  [`NodePath::root`] is the empty ancestor path of the root
/// item itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath(String);

impl NodePath {
    pub const SEPARATOR: char = '/';

    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path of a child called `name` beneath `self`.
    pub fn child(&self, name: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + 1 + name.len());
        path.push_str(&self.0);
        path.push(Self::SEPARATOR);
        path.push_str(name);
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

// ───────────────────────────────────────── walk ──────────────

/// A node visited by [`Walk`].
#[derive(Debug, Clone)]
pub struct WalkEntry<'a> {
    pub path: NodePath,
    pub item: &'a ExplorerItem,
    /// Depth from the root item (root = 0).
    pub depth: usize,
}

/// Iterator returned by [`ExplorerItem::walk`].
pub struct Walk<'a> {
    stack: Vec<(NodePath, &'a ExplorerItem, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, item, depth) = self.stack.pop()?;
        // Reverse push keeps caller order when popping.
        for child in item.children().iter().rev() {
            self.stack.push((path.child(child.name()), child, depth + 1));
        }
        Some(WalkEntry { path, item, depth })
    }
}
