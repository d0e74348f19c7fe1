//! Color theme system for revu.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI
//! surface revu renders. Two built-in themes are provided:
//!
//! - `dark` — uses ANSI 16 colors (`Color::Reset`, `Color::DarkGray`, etc.) so
//!   it works on any terminal including 256-color SSH sessions with no
//!   truecolor support.
//! - `catppuccin_mocha` — Catppuccin Mocha palette in RGB; requires truecolor.
//!
//! Colors carry no behavioral contract — the render pipeline's output shape is
//! identical under every theme.

use ratatui::style::Color;

/// All color values used across revu's UI surfaces.
///
/// Every field is a `ratatui::style::Color`. Callers use `theme.field`
/// directly inside `Style::default().fg(theme.border_active)`.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color for the currently focused panel.
    pub border_active: Color,
    /// Border color for unfocused panels.
    pub border_inactive: Color,

    // Review panel (rendered markdown)
    /// Heading lines (`#` through `######`).
    pub md_heading: Color,
    /// Inline `code` spans and fenced code block delimiters.
    pub md_code: Color,
    /// Blockquote lines (`> ...`).
    pub md_quote: Color,
    /// List bullet / numbering markers.
    pub md_list_marker: Color,
    /// Body text of the review.
    pub md_text: Color,
    /// Placeholder / loading prompt text.
    pub placeholder: Color,

    // Status bar
    /// Status bar background.
    pub status_bar_bg: Color,
    /// Status bar foreground (general text).
    pub status_bar_fg: Color,
    /// Mode indicator color when in NORMAL mode.
    pub status_mode_normal: Color,
    /// Mode indicator color when in INSERT mode.
    pub status_mode_insert: Color,
    /// Review status indicator while idle.
    pub status_idle: Color,
    /// Review status indicator (and spinner) while a request is in flight.
    pub status_in_flight: Color,
    /// Review status indicator after a successful review.
    pub status_succeeded: Color,
    /// Review status indicator after a failed request.
    pub status_failed: Color,

    // General
    /// Application background (used for clearing areas).
    pub background: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    ///
    /// Works on all terminals: 16-color, 256-color, and truecolor. Suitable
    /// as the default when no config is present or color capability is unknown.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            md_heading: Color::Cyan,
            md_code: Color::Yellow,
            md_quote: Color::DarkGray,
            md_list_marker: Color::Blue,
            md_text: Color::Reset,
            placeholder: Color::DarkGray,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode_normal: Color::Cyan,
            status_mode_insert: Color::Green,
            status_idle: Color::White,
            status_in_flight: Color::Yellow,
            status_succeeded: Color::Green,
            status_failed: Color::Red,

            background: Color::Reset,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Requires a truecolor terminal. Falls back gracefully in ratatui —
    /// colors degrade to the nearest ANSI 256-color approximation on
    /// non-truecolor terms, but visual fidelity is reduced. Use `dark()` on
    /// SSH or 256-color terminals.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        // Catppuccin Mocha palette (selected subset)
        let green = Color::Rgb(166, 227, 161);    // #a6e3a1
        let red = Color::Rgb(243, 139, 168);      // #f38ba8
        let yellow = Color::Rgb(249, 226, 175);   // #f9e2af
        let blue = Color::Rgb(137, 180, 250);     // #89b4fa
        let teal = Color::Rgb(148, 226, 213);     // #94e2d5
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90);    // #45475a
        let base = Color::Rgb(30, 30, 46);        // #1e1e2e
        let text = Color::Rgb(205, 214, 244);     // #cdd6f4
        let peach = Color::Rgb(250, 179, 135);    // #fab387

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            md_heading: teal,
            md_code: peach,
            md_quote: overlay1,
            md_list_marker: blue,
            md_text: text,
            placeholder: overlay1,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode_normal: lavender,
            status_mode_insert: green,
            status_idle: text,
            status_in_flight: yellow,
            status_succeeded: green,
            status_failed: red,

            background: base,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup. The fallback is logged to stderr (not a hard error).
    ///
    /// # Arguments
    ///
    /// * `name` — theme name from config, e.g. `"dark"` or `"catppuccin-mocha"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                eprintln!("revu: unknown theme '{}', falling back to 'dark'", other);
                Self::dark()
            }
        }
    }
}
