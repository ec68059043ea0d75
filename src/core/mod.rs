//! Core model – the explorer tree, view state, and the pure renderer.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod actions;
pub mod expansion;
pub mod item;
pub mod load;
pub mod menu;
pub mod render;
pub mod sample;
pub mod selection;
pub mod view;
