//! Custom Ratatui widget that draws the rendered [`VisualRow`] list as an
//! indented, collapsible tree.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::core::render::{RowKind, VisualRow};

use super::theme::Theme;

pub const FOLDER_OPEN_GLYPH: &str = "▼ ";
pub const FOLDER_CLOSED_GLYPH: &str = "▶ ";
pub const FILE_GLYPH: &str = "· ";

// ───────────────────────────────────────── viewport ──────────

/// Cursor row and scroll offset of the tree pane.
///
/// The cursor is the row that receives key presses.  It is independent of
/// the selected file: moving it never selects anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeViewport {
    /// Index into the rendered row list.
    pub cursor: usize,
    /// First visible row.
    pub offset: usize,
}

impl TreeViewport {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.cursor < max - 1 {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep the cursor on an existing row after the row list shrank.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    /// Ensure the cursor row is visible within a viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor - height + 1;
        }
    }

    /// Row index under screen row `y`, if `y` is inside `rows_area`.
    pub fn row_at(&self, rows_area: Rect, y: u16) -> Option<usize> {
        if y < rows_area.y || y >= rows_area.y + rows_area.height {
            return None;
        }
        Some((y - rows_area.y) as usize + self.offset)
    }

    /// Screen rectangle of row `index` starting at its glyph, or `None` when
    /// scrolled out of view.
    pub fn row_rect(&self, rows_area: Rect, index: usize, depth: usize, indent_width: usize) -> Option<Rect> {
        let visible = index.checked_sub(self.offset)?;
        if visible >= rows_area.height as usize {
            return None;
        }
        let indent = (depth * indent_width).min(rows_area.width as usize) as u16;
        Some(Rect::new(
            rows_area.x + indent,
            rows_area.y + visible as u16,
            rows_area.width - indent,
            1,
        ))
    }
}

// ───────────────────────────────────────── widget ────────────

/// Draws a slice of rendered rows; built anew for every frame.
pub struct TreeWidget<'a> {
    rows: &'a [VisualRow],
    viewport: TreeViewport,
    indent_width: usize,
    show_meta: bool,
    block: Option<Block<'a>>,
}

impl<'a> TreeWidget<'a> {
    pub fn new(rows: &'a [VisualRow], viewport: TreeViewport) -> Self {
        Self {
            rows,
            viewport,
            indent_width: 2,
            show_meta: true,
            block: None,
        }
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn show_meta(mut self, show: bool) -> Self {
        self.show_meta = show;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row_line(&self, row: &VisualRow) -> Line<'a> {
        let indent = " ".repeat(row.depth * self.indent_width);
        match &row.kind {
            RowKind::Folder { expanded } => {
                let glyph = if *expanded {
                    FOLDER_OPEN_GLYPH
                } else {
                    FOLDER_CLOSED_GLYPH
                };
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(format!("{glyph}{}", row.label), Theme::dir_style()),
                ])
            }
            RowKind::File {
                meta,
                selected,
                focused,
            } => {
                let mut style = if *selected {
                    Theme::selected_style()
                } else {
                    Theme::file_style()
                };
                if *focused {
                    style = style.add_modifier(Theme::focused_modifier());
                }
                let mut spans = vec![
                    Span::raw(indent),
                    Span::styled(format!("{FILE_GLYPH}{}", row.label), style),
                ];
                if self.show_meta && !meta.is_empty() {
                    spans.push(Span::styled(format!("  {meta}"), Theme::meta_style()));
                }
                Line::from(spans)
            }
        }
    }
}

impl Widget for TreeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Resolve the inner area (inside the optional block border).
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let visible_rows = self
            .rows
            .iter()
            .enumerate()
            .skip(self.viewport.offset)
            .take(inner.height as usize);

        for (i, (row_idx, row)) in visible_rows.enumerate() {
            let y = inner.y + i as u16;
            if row_idx == self.viewport.cursor {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), Theme::cursor_style());
            }
            let line = self.row_line(row);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
