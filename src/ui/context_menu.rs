//! Floating context menu drawn at the captured pointer position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::menu::MenuAction;

use super::theme::Theme;

const MENU_WIDTH: u16 = 16;

/// Outer rectangle of a menu anchored at `(x, y)`, shifted left/up as needed
/// to stay inside `bounds`.
pub fn menu_rect(x: u16, y: u16, bounds: Rect) -> Rect {
    let w = MENU_WIDTH.min(bounds.width);
    let h = (MenuAction::ALL.len() as u16 + 2).min(bounds.height);
    let max_x = bounds.x + bounds.width.saturating_sub(w);
    let max_y = bounds.y + bounds.height.saturating_sub(h);
    Rect::new(x.clamp(bounds.x, max_x), y.clamp(bounds.y, max_y), w, h)
}

/// The entry under screen position `(col, row)` for a menu occupying `rect`.
pub fn item_at(rect: Rect, col: u16, row: u16) -> Option<MenuAction> {
    if col <= rect.x
        || col + 1 >= rect.x + rect.width
        || row <= rect.y
        || row + 1 >= rect.y + rect.height
    {
        return None;
    }
    MenuAction::ALL.get((row - rect.y - 1) as usize).copied()
}

pub struct ContextMenuWidget {
    pub x: u16,
    pub y: u16,
    pub highlighted: Option<MenuAction>,
}

impl Widget for ContextMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = menu_rect(self.x, self.y, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let label_width = inner.width.saturating_sub(4) as usize;
        let lines: Vec<Line> = MenuAction::ALL
            .iter()
            .map(|&action| {
                let (prefix, style) = if Some(action) == self.highlighted {
                    ("▸ ", Theme::menu_highlight_style())
                } else {
                    ("  ", Theme::menu_style())
                };
                Line::from(vec![
                    Span::styled(format!("{prefix}{:<label_width$}", action.label()), style),
                    Span::styled(format!("{} ", action.hotkey()), Theme::menu_hotkey_style()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
