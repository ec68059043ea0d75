//! Application state, terminal events, and the input handlers that drive the view.

pub mod event;
pub mod handler;
pub mod listener;
pub mod state;
