//! Reading an explorer tree from a JSON document.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::item::ExplorerItem;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tree file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tree file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a tree from JSON text.
pub fn parse_tree(json: &str) -> serde_json::Result<ExplorerItem> {
    serde_json::from_str(json)
}

/// Load a tree from a JSON file on disk.
pub fn load_tree(path: &Path) -> Result<ExplorerItem, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_tree(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), nodes = tree.walk().count(), "loaded tree");
    Ok(tree)
}
