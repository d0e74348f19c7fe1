//! Responsive 2-panel layout engine for revu.
//!
//! This module is pure layout arithmetic — no mutable application state lives
//! here. It is called inside `terminal.draw()` on every render so every frame
//! gets a fresh layout that automatically reflects the current terminal size.
//!
//! # Panel geometry
//!
//! At `>= 80` columns both panels are visible side by side with widths driven
//! by `AppState.left_pct / right_pct` (defaults 50 / 50). Below 80 columns the
//! review panel collapses and the editor fills the full width.
//!
//! `Spacing::Overlap(1)` combined with `Block::merge_borders(MergeStrategy::Fuzzy)`
//! makes the adjacent panel borders share a single column and merge their
//! junction Unicode box-drawing characters automatically.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect, Spacing},
    style::{Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use revu_core::ReviewStatus;

use crate::app::{AppState, Mode, SPINNER_FRAMES};
use crate::theme::Theme;

/// Returns `[editor, review, status_bar]` panel `Rect`s for the current frame.
///
/// Called inside `terminal.draw()` on every render. The returned rects are
/// valid only for the current draw closure — never store them across frames
/// (the cached `panel_rects` copy in `AppState` exists solely for mouse hit
/// testing and is refreshed every frame).
///
/// # Responsive behaviour
///
/// | Terminal width | Layout |
/// |----------------|--------|
/// | `< 80` cols    | Review panel collapsed; editor fills full width |
/// | `>= 80` cols   | 2-panel split using `state.left_pct / right_pct` |
pub fn compute_layout(frame: &Frame, state: &AppState) -> [Rect; 3] {
    let term_width = frame.area().width;

    // Vertical split: main area (fills remaining height) + 1-row status bar.
    let [main_area, status_bar] =
        frame.area().layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]));

    let horizontal = if term_width >= 80 {
        Layout::horizontal([
            Constraint::Percentage(state.left_pct),
            Constraint::Percentage(state.right_pct),
        ])
        .spacing(Spacing::Overlap(1))
    } else {
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(0)])
            .spacing(Spacing::Overlap(1))
    };

    let [editor, review] = main_area.layout(&horizontal);

    [editor, review, status_bar]
}

/// Returns the inner `Rect` of a panel after removing the 1-cell border on
/// each side.
///
/// Used to cache viewport heights in `AppState` before panels are rendered,
/// so that half-page and full-page scroll distances are available at
/// keypress time.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds a bordered `Block` for a panel.
///
/// Applies `BorderType::Thick` when the panel is focused (distinct active
/// border) and `BorderType::Plain` otherwise. Uses `MergeStrategy::Fuzzy`
/// because `Exact` produces incorrect junctions when mixing `Thick` and
/// `Plain` borders.
pub fn panel_block<'a>(title: &'a str, is_focused: bool, theme: &'a Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border_inactive)
    };
    let border_type = if is_focused { BorderType::Thick } else { BorderType::Plain };

    Block::bordered()
        .title(title)
        .border_type(border_type)
        .border_style(border_style)
        .merge_borders(MergeStrategy::Fuzzy)
}

/// Renders the 1-row status bar at the bottom of the terminal.
///
/// Always shows a mode indicator (`NORMAL` or `INSERT`) followed by the
/// review lifecycle indicator. The lifecycle indicator is the only UI
/// surface that distinguishes `Failed` from `Idle` — the review panel shows
/// the same placeholder for both. `HelpOverlay` and `ConfirmQuit` both
/// display `NORMAL` because the underlying mode is `Normal` — the overlay is
/// a transient visual layer, not a mode change.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (mode_text, mode_fg) = match state.mode {
        Mode::Insert => (" INSERT ", theme.status_mode_insert),
        Mode::Normal | Mode::ConfirmQuit | Mode::HelpOverlay => {
            (" NORMAL ", theme.status_mode_normal)
        }
    };

    let (status_text, status_fg) = match state.session.status() {
        ReviewStatus::Idle => (" IDLE ".to_owned(), theme.status_idle),
        ReviewStatus::InFlight => (
            format!(" REVIEWING {} ", SPINNER_FRAMES[state.spinner_frame]),
            theme.status_in_flight,
        ),
        ReviewStatus::Succeeded => (" REVIEWED ".to_owned(), theme.status_succeeded),
        ReviewStatus::Failed => (" FAILED ".to_owned(), theme.status_failed),
    };

    let status_line = Line::from(vec![
        Span::styled(
            mode_text,
            Style::default().fg(mode_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            status_text,
            Style::default().fg(status_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Ctrl-r review   ? help"),
    ]);

    frame.render_widget(
        Paragraph::new(status_line)
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
