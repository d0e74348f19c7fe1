//! Central application state for revu.
//!
//! This module owns all mutable UI state: the current mode, which panel has
//! focus, the source buffer, the review session, the cached review render,
//! per-panel scroll offsets and viewport heights, and panel width
//! percentages. No ratatui rendering logic lives here — `app.rs` is pure
//! state that is read by the render module and mutated by the keybinding
//! dispatcher and the event loop.

use ratatui::layout::Rect;
use ratatui::text::Line;

use revu_core::{ReviewSession, ReviewStatus};

use crate::buffer::{SourceBuffer, DEMO_SNIPPET};
use crate::markdown;
use crate::review::ReviewOutcome;
use crate::theme::Theme;

/// Spinner frames cycled by the logic tick while a request is in flight.
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Editor mode controlling which keybinding set is active.
///
/// The default mode is `Normal`. Transitions are driven by the keybinding
/// dispatcher.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Vim-style navigation mode (default).
    #[default]
    Normal,
    /// Text insertion mode for editing the source buffer.
    Insert,
    /// Full-screen help overlay is shown above all panels.
    HelpOverlay,
    /// Quit-confirmation dialog shown when a review request is in flight.
    ConfirmQuit,
}

/// Which panel currently has keyboard focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Left panel: the editable source buffer.
    #[default]
    Editor,
    /// Right panel: the rendered review.
    Review,
}

impl PanelFocus {
    /// Returns the other panel. With two panels, next and prev coincide.
    pub fn toggle(self) -> Self {
        match self {
            PanelFocus::Editor => PanelFocus::Review,
            PanelFocus::Review => PanelFocus::Editor,
        }
    }
}

/// All mutable UI state passed through every render cycle.
///
/// Scroll state, focus, mode, and panel geometry are bundled here so the
/// render function receives a single mutable reference and the keybinding
/// dispatcher receives a single mutable reference. No logic resides in the
/// render path.
pub struct AppState {
    /// Current editor mode governing which keybindings are active.
    pub mode: Mode,
    /// Which panel currently receives keyboard scroll/navigation events.
    pub focus: PanelFocus,

    /// The editable source buffer (left panel content).
    pub buffer: SourceBuffer,
    /// The review session state machine.
    pub session: ReviewSession,
    /// Cached render of the review panel, recomputed only on session
    /// transitions via [`AppState::refresh_review_lines`].
    pub review_lines: Vec<Line<'static>>,

    /// Vertical scroll offset for the editor panel.
    pub editor_scroll: usize,
    /// Vertical scroll offset for the review panel.
    pub review_scroll: usize,
    /// Vertical scroll offset for the help overlay.
    pub help_scroll: u16,

    /// Inner height of the editor panel after borders, cached after each
    /// render. Used by half-page and full-page scroll calculations and by
    /// cursor-follow scrolling.
    pub editor_viewport_height: u16,
    /// Inner height of the review panel after borders, cached after each
    /// render.
    pub review_viewport_height: u16,

    /// Width percentage allocated to the editor panel. Default: 50.
    pub left_pct: u16,
    /// Width percentage allocated to the review panel. Default: 50.
    pub right_pct: u16,

    /// Outer rects of `[editor, review]` cached after each render, used for
    /// mouse click-to-focus hit testing.
    pub panel_rects: [Rect; 2],

    /// Index into [`SPINNER_FRAMES`], advanced by the logic tick while a
    /// request is in flight.
    pub spinner_frame: usize,
}

impl AppState {
    /// Constructs the startup state: demo snippet loaded, session idle.
    ///
    /// `review_lines` starts empty — the caller refreshes it once with the
    /// active theme before the first frame.
    pub fn new(language: &str) -> Self {
        let mut buffer = SourceBuffer::new(language);
        buffer.set_text(DEMO_SNIPPET);
        Self {
            mode: Mode::default(),
            focus: PanelFocus::default(),
            buffer,
            session: ReviewSession::new(),
            review_lines: Vec::new(),
            editor_scroll: 0,
            review_scroll: 0,
            help_scroll: 0,
            editor_viewport_height: 0,
            review_viewport_height: 0,
            left_pct: 50,
            right_pct: 50,
            panel_rects: [Rect::default(); 2],
            spinner_frame: 0,
        }
    }

    /// Recomputes the cached review render from the current session state.
    ///
    /// Called on every session transition (submit accepted, result applied)
    /// and once at startup — never per frame.
    pub fn refresh_review_lines(&mut self, theme: &Theme) {
        self.review_lines =
            markdown::render_review(self.session.status(), self.session.review_text(), theme);
    }

    /// Applies a delivered review result to the session.
    ///
    /// The session's stale guard decides whether the result is current; a
    /// discarded result leaves all UI state untouched. An applied result
    /// resets the review scroll and refreshes the cached render.
    pub fn apply_review_outcome(&mut self, outcome: ReviewOutcome, theme: &Theme) {
        if self.session.complete(outcome.id, outcome.outcome) {
            self.review_scroll = 0;
            self.refresh_review_lines(theme);
        } else {
            tracing::debug!("discarded stale review result");
        }
    }

    /// Advances the logic tick: spins the status-bar spinner while a request
    /// is in flight.
    pub fn tick(&mut self) {
        if self.session.status() == ReviewStatus::InFlight {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Total line count of the focused panel's content.
    fn focused_total(&self) -> usize {
        match self.focus {
            PanelFocus::Editor => self.buffer.line_count(),
            PanelFocus::Review => self.review_lines.len(),
        }
    }

    /// Scrolls the focused panel down by `lines` rows (saturating, clamped to
    /// the last line).
    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.focused_total().saturating_sub(1);
        match self.focus {
            PanelFocus::Editor => {
                self.editor_scroll = (self.editor_scroll + lines as usize).min(max);
            }
            PanelFocus::Review => {
                self.review_scroll = (self.review_scroll + lines as usize).min(max);
            }
        }
    }

    /// Scrolls the focused panel up by `lines` rows (saturating at 0).
    pub fn scroll_up(&mut self, lines: u16) {
        match self.focus {
            PanelFocus::Editor => {
                self.editor_scroll = self.editor_scroll.saturating_sub(lines as usize);
            }
            PanelFocus::Review => {
                self.review_scroll = self.review_scroll.saturating_sub(lines as usize);
            }
        }
    }

    /// Scrolls the focused panel to the very top.
    pub fn scroll_top(&mut self) {
        match self.focus {
            PanelFocus::Editor => self.editor_scroll = 0,
            PanelFocus::Review => self.review_scroll = 0,
        }
    }

    /// Scrolls the focused panel to its last line.
    pub fn scroll_bottom(&mut self) {
        let bottom = self.focused_total().saturating_sub(1);
        match self.focus {
            PanelFocus::Editor => self.editor_scroll = bottom,
            PanelFocus::Review => self.review_scroll = bottom,
        }
    }

    /// Scrolls the focused panel down by half its visible height.
    ///
    /// Uses the viewport height cached from the previous render. If the
    /// cached height is zero (first frame), scrolls by 1 to avoid a no-op.
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.focused_viewport() / 2).max(1));
    }

    /// Scrolls the focused panel up by half its visible height.
    pub fn half_page_up(&mut self) {
        self.scroll_up((self.focused_viewport() / 2).max(1));
    }

    /// Scrolls the focused panel down by its full visible height (one page).
    pub fn full_page_down(&mut self) {
        self.scroll_down(self.focused_viewport().max(1));
    }

    /// Scrolls the focused panel up by its full visible height (one page).
    pub fn full_page_up(&mut self) {
        self.scroll_up(self.focused_viewport().max(1));
    }

    fn focused_viewport(&self) -> u16 {
        match self.focus {
            PanelFocus::Editor => self.editor_viewport_height,
            PanelFocus::Review => self.review_viewport_height,
        }
    }

    /// Adjusts the editor scroll so the cursor row is inside the viewport.
    ///
    /// Called after the viewport height is cached for the frame, so edits
    /// near the bottom of the screen keep the cursor visible.
    pub fn follow_cursor(&mut self) {
        let (row, _) = self.buffer.cursor();
        let height = self.editor_viewport_height.max(1) as usize;
        if row < self.editor_scroll {
            self.editor_scroll = row;
        } else if row >= self.editor_scroll + height {
            self.editor_scroll = row + 1 - height;
        }
    }

    /// Shrinks the editor panel by 5%, growing the review panel.
    ///
    /// The editor panel will not shrink below 20%.
    pub fn shrink_editor_panel(&mut self) {
        const MIN: u16 = 20;
        const STEP: u16 = 5;
        if self.left_pct <= MIN {
            return;
        }
        let transfer = STEP.min(self.left_pct - MIN);
        self.left_pct -= transfer;
        self.right_pct += transfer;
    }

    /// Grows the editor panel by 5%, shrinking the review panel.
    ///
    /// The editor panel will not grow above 80%.
    pub fn grow_editor_panel(&mut self) {
        const MAX: u16 = 80;
        const STEP: u16 = 5;
        if self.left_pct >= MAX {
            return;
        }
        let transfer = STEP.min(MAX - self.left_pct);
        self.left_pct += transfer;
        self.right_pct -= transfer;
    }
}
