//! Ratatui widgets for the tree pane, status bar and context menu.
//!
//! This layer takes the rendered rows and view state and turns them into
//! cells on the terminal.  It never mutates application state.

pub mod context_menu;
pub mod layout;
pub mod screen;
pub mod theme;
pub mod tree_widget;
