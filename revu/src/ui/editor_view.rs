//! Editor panel renderer for revu.
//!
//! Renders the left panel from the buffer's pre-highlighted lines using a
//! List widget with manual virtual scrolling: only
//! `lines[scroll..scroll+viewport_height]` are materialized per frame, making
//! rendering O(viewport) not O(total_lines). The terminal cursor is placed at
//! the buffer cursor while editing.

use ratatui::{
    Frame,
    layout::Position,
    widgets::{List, ListItem},
};

use crate::app::{AppState, Mode, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the editor panel, including the terminal cursor in Insert mode.
///
/// # Arguments
///
/// * `frame` — current render frame
/// * `area` — the `Rect` for the editor panel (includes borders)
/// * `state` — app state supplying the buffer, scroll offset, and mode
/// * `theme` — active color theme
pub fn render_editor(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &AppState,
    theme: &Theme,
) {
    let is_focused = state.focus == PanelFocus::Editor;
    let block = panel_block("Editor", is_focused, theme);
    let inner = inner_rect(area);
    let viewport_height = inner.height as usize;

    frame.render_widget(block, area);

    let lines = state.buffer.highlighted();
    let total = lines.len();
    let visible_start = state.editor_scroll.min(total.saturating_sub(1));
    let visible_end = (visible_start + viewport_height).min(total);

    let items: Vec<ListItem> = lines[visible_start..visible_end]
        .iter()
        .map(|l| ListItem::new(l.clone()))
        .collect();
    frame.render_widget(List::new(items), inner);

    // Hardware cursor: shown only while editing, and only when the cursor row
    // is inside the visible window.
    if state.mode == Mode::Insert && is_focused {
        let (row, col) = state.buffer.cursor();
        if row >= visible_start && row < visible_end {
            let x = inner.x + (col as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (row - visible_start) as u16;
            frame.set_cursor_position(Position { x, y });
        }
    }
}
