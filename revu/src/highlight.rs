//! Syntect-based syntax highlighting for ratatui.
//!
//! Used by two consumers: the editor panel (re-highlighting the source buffer
//! on every edit) and the markdown renderer (highlighting fenced code blocks
//! keyed by their language tag). Both go through [`highlight_code`], a pure
//! function from text to owned `Line<'static>` values.
//!
//! The `SyntaxSet` and `ThemeSet` are process-wide `LazyLock` statics —
//! loading them is expensive (tens of milliseconds) and they are immutable
//! after load.

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

static PS: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static TS: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Highlights a block of code into owned ratatui lines.
///
/// `token` is a language hint — an extension or name like `"js"`, `"rust"`,
/// `"python"` — matched against the syntax set; unknown tokens fall back to
/// the plain-text syntax so the function never fails. One input line maps to
/// exactly one output line, so callers can index output by source line number.
///
/// Highlighter state carries across lines (multi-line strings and comments
/// highlight correctly).
pub fn highlight_code(code: &str, token: &str) -> Vec<Line<'static>> {
    let theme = TS.themes.get("base16-ocean.dark").or_else(|| TS.themes.values().next());
    let syntax = PS
        .find_syntax_by_token(token)
        .unwrap_or_else(|| PS.find_syntax_plain_text());

    let Some(theme) = theme else {
        // No theme shipped at all (unusual but possible) — emit plain lines.
        return code.split('\n').map(|l| Line::raw(l.to_owned())).collect();
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    code.split('\n')
        .map(|line| Line::from(build_syntect_spans(line, &mut highlighter, &PS)))
        .collect()
}

/// Builds syntect-highlighted spans for a single line of code.
///
/// Returns owned `Vec<Span<'static>>`. Falls back to a plain unstyled span on
/// highlighter error.
fn build_syntect_spans(
    code: &str,
    h: &mut HighlightLines,
    ps: &SyntaxSet,
) -> Vec<Span<'static>> {
    let ranges = h.highlight_line(code, ps).unwrap_or_default();
    let spans: Vec<Span<'static>> =
        ranges.into_iter().map(|(style, text)| syntect_to_span(style, text)).collect();
    if spans.is_empty() {
        vec![Span::raw(code.to_owned())]
    } else {
        spans
    }
}

/// Converts a syntect (Style, &str) pair to an owned ratatui Span.
///
/// Rebuilds color and modifier fields from syntect types into ratatui types;
/// fully transparent syntect colors (alpha 0) map to "no color set" so the
/// terminal default shows through.
fn syntect_to_span(style: syntect::highlighting::Style, content: &str) -> Span<'static> {
    use syntect::highlighting::Color as SC;
    let to_color = |c: SC| -> Option<Color> {
        if c.a > 0 { Some(Color::Rgb(c.r, c.g, c.b)) } else { None }
    };
    let mut ratatui_style = Style::default();
    if let Some(fg) = to_color(style.foreground) {
        ratatui_style = ratatui_style.fg(fg);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::BOLD) {
        ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::ITALIC) {
        ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(syntect::highlighting::FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.add_modifier(Modifier::UNDERLINED);
    }
    Span::styled(content.to_owned(), ratatui_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_output_line_per_input_line() {
        let code = "function sum() {\n  return 1 + 1\n}";
        let lines = highlight_code(code, "js");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        let lines = highlight_code("", "js");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let lines = highlight_code("whatever content", "no-such-language");
        assert_eq!(lines.len(), 1);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "whatever content");
    }

    #[test]
    fn highlighting_is_idempotent() {
        let code = "let x = 1;";
        assert_eq!(highlight_code(code, "js"), highlight_code(code, "js"));
    }

    #[test]
    fn content_survives_highlighting() {
        let code = "fn main() { println!(\"hi\"); }";
        let lines = highlight_code(code, "rust");
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, code);
    }
}
