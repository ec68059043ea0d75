//! Whole-frame drawing: tree pane, status bar, and the context menu overlay.

use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;

use super::context_menu::ContextMenuWidget;
use super::theme::Theme;
use super::tree_widget::TreeWidget;

/// Draw one frame.  Reads `state` only.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = state.layout();
    let rows = state.rows();

    let tree_block = Block::default()
        .title(format!(" {} ", state.title))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());

    let tree_widget = TreeWidget::new(&rows, state.viewport)
        .indent_width(state.config.indent_width)
        .show_meta(state.config.show_meta)
        .block(tree_block);
    frame.render_widget(tree_widget, layout.tree_area);

    let (status_text, is_error) = state.status_line();
    let status_style = if is_error {
        Theme::status_error_style()
    } else {
        Theme::status_bar_style()
    };
    frame.render_widget(Paragraph::new(status_text).style(status_style), layout.status_area);

    if let Some((x, y)) = state.view.menu().anchor() {
        frame.render_widget(
            ContextMenuWidget {
                x,
                y,
                highlighted: state.view.menu().highlighted(),
            },
            frame.area(),
        );
    }
}
