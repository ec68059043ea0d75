//! The file-management collaborator behind the context menu.
//!
//! [`LoggingActions`] is the default: it performs nothing and only reports
//! which action was requested for which file.  A real backend implements
//! [`FileActions`] and is handed to the view instead.

use std::fmt;

use chrono::{DateTime, Local};
use thiserror::Error;

use super::menu::{MenuAction, MenuTarget};

/// Outcome of a successfully handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: MenuAction,
    pub file_name: String,
    pub path: String,
    pub at: DateTime<Local>,
}

impl ActionReport {
    pub fn new(action: MenuAction, target: &MenuTarget) -> Self {
        Self {
            action,
            file_name: target.file.name.clone(),
            path: target.path.to_string(),
            at: Local::now(),
        }
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} action triggered for file: {}",
            self.at.format("%H:%M:%S"),
            self.action,
            self.file_name
        )
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{action} is not supported for {path}")]
    Unsupported { action: MenuAction, path: String },

    #[error("{action} failed for {path}: {reason}")]
    Failed {
        action: MenuAction,
        path: String,
        reason: String,
    },
}

/// Operations the context menu can request.
pub trait FileActions {
    fn copy(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError>;
    fn delete(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError>;
    fn rename(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError>;

    fn perform(
        &mut self,
        action: MenuAction,
        target: &MenuTarget,
    ) -> Result<ActionReport, ActionError> {
        match action {
            MenuAction::Copy => self.copy(target),
            MenuAction::Delete => self.delete(target),
            MenuAction::Rename => self.rename(target),
        }
    }
}

/// Stub backend: logs the request and leaves the tree alone.
#[derive(Debug, Default)]
pub struct LoggingActions;

impl LoggingActions {
    fn record(action: MenuAction, target: &MenuTarget) -> Result<ActionReport, ActionError> {
        tracing::info!(
            action = action.label(),
            file = %target.file.name,
            path = %target.path,
            "{action} action triggered for file: {}",
            target.file.name
        );
        Ok(ActionReport::new(action, target))
    }
}

impl FileActions for LoggingActions {
    fn copy(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
        Self::record(MenuAction::Copy, target)
    }

    fn delete(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
        Self::record(MenuAction::Delete, target)
    }

    fn rename(&mut self, target: &MenuTarget) -> Result<ActionReport, ActionError> {
        Self::record(MenuAction::Rename, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::item::{FileItem, NodePath};

    fn target() -> MenuTarget {
        MenuTarget {
            path: NodePath::from("/src/index.ts"),
            file: FileItem {
                name: "index.ts".into(),
                meta: "2KB".into(),
            },
        }
    }

    #[test]
    fn logging_backend_reports_every_action() {
        let mut actions = LoggingActions;
        for &action in MenuAction::ALL {
            let report = actions.perform(action, &target()).unwrap();
            assert_eq!(report.action, action);
            assert_eq!(report.file_name, "index.ts");
            assert_eq!(report.path, "/src/index.ts");
        }
    }

    #[test]
    fn report_text_names_action_and_file() {
        let report = ActionReport::new(MenuAction::Delete, &target());
        let text = report.to_string();
        assert!(text.ends_with("Delete action triggered for file: index.ts"));
    }

    #[test]
    fn error_text_names_path() {
        let err = ActionError::Failed {
            action: MenuAction::Rename,
            path: "/src/index.ts".into(),
            reason: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "Rename failed for /src/index.ts: permission denied");
    }
}
