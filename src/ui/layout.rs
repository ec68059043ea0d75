//! Screen geometry: the tree pane, the status row, and hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

/// Primary screen layout with tree pane and a bottom status bar.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub tree_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // tree pane (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            tree_area: chunks[0],
            status_area: chunks[1],
        }
    }

    /// Area inside the tree pane's border where rows are drawn.
    pub fn tree_rows_area(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.tree_area)
    }
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}
