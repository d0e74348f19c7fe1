//! Review panel renderer for revu.
//!
//! Renders the right panel from the cached review lines using a List widget
//! with manual virtual scrolling — only the visible window of
//! `state.review_lines` is materialized into ListItems per frame. The cache
//! is recomputed on session transitions, never here: the render path does no
//! parsing or highlighting.

use ratatui::{
    Frame,
    widgets::{List, ListItem},
};

use crate::app::{AppState, PanelFocus};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the review panel from the cached lines.
///
/// # Arguments
///
/// * `frame` — current render frame
/// * `area` — the `Rect` for the review panel (includes borders)
/// * `state` — app state supplying `review_lines` and `review_scroll`
/// * `theme` — active color theme
pub fn render_review_panel(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &AppState,
    theme: &Theme,
) {
    let is_focused = state.focus == PanelFocus::Review;
    let block = panel_block("Review", is_focused, theme);
    let inner = inner_rect(area);
    let viewport_height = inner.height as usize;

    frame.render_widget(block, area);

    let lines = &state.review_lines;
    if lines.is_empty() {
        return;
    }

    let total = lines.len();
    let visible_start = state.review_scroll.min(total.saturating_sub(1));
    let visible_end = (visible_start + viewport_height).min(total);

    let items: Vec<ListItem> = lines[visible_start..visible_end]
        .iter()
        .map(|l| ListItem::new(l.clone()))
        .collect();
    frame.render_widget(List::new(items), inner);
}
