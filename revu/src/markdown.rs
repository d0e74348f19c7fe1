//! The render pipeline: review state to displayable lines.
//!
//! A pure function of `(status, review_text)` — no state lives here. The
//! event loop calls [`render_review`] exactly once per session transition and
//! caches the result in `AppState`; the review panel only ever paints that
//! cache.
//!
//! Review text is semi-trusted markdown from the service. It is parsed
//! line-by-line: fenced code blocks are tracked with a toggle and routed
//! through syntect keyed by the fence's language tag; everything else gets
//! block-level styling (headings, lists, quotes, rules) plus inline
//! bold/italic/code spans. Unmatched markers render as plain text — the
//! parser degrades, it never fails.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use revu_core::ReviewStatus;

use crate::highlight;
use crate::theme::Theme;

/// Renders the review panel content for the given session state.
///
/// - `InFlight` — deterministic loading placeholder; never partial or stale
///   review text.
/// - `Succeeded` with non-empty text — the parsed markdown.
/// - `Idle`, `Failed`, or `Succeeded` with empty text — the idle placeholder.
///   Failure is intentionally indistinguishable from "no review yet" here;
///   the status bar and the log carry the failure detail.
///
/// Pure: the same `(status, review_text)` pair always yields identical lines.
pub fn render_review(
    status: ReviewStatus,
    review_text: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match status {
        ReviewStatus::InFlight => loading_lines(theme),
        ReviewStatus::Succeeded if !review_text.is_empty() => {
            markdown_to_lines(review_text, theme)
        }
        _ => placeholder_lines(theme),
    }
}

/// The "no review yet" prompt, shown for Idle, Failed, and empty results.
fn placeholder_lines(theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme.placeholder);
    vec![
        Line::from(Span::styled("No review yet.", style)),
        Line::from(Span::styled(
            "Press Ctrl-r to send the buffer for review.",
            style,
        )),
    ]
}

/// The loading placeholder shown while a request is outstanding.
fn loading_lines(theme: &Theme) -> Vec<Line<'static>> {
    let style = Style::default().fg(theme.placeholder);
    vec![
        Line::from(Span::styled("Reviewing code...", style)),
        Line::from(Span::styled("This can take a few seconds.", style)),
    ]
}

/// Parses review markdown into styled lines.
///
/// Fenced code blocks are collected whole and highlighted in one syntect
/// pass so multi-line constructs highlight correctly; an unclosed fence at
/// end of input is flushed as code rather than dropped.
fn markdown_to_lines(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = Vec::new();
    // (language token, collected lines) while inside a fence.
    let mut fence: Option<(String, Vec<String>)> = None;

    for raw in text.split('\n') {
        let trimmed = raw.trim();

        if trimmed.starts_with("```") {
            match fence.take() {
                Some((lang, block)) => {
                    flush_code_block(&lang, &block, &mut out);
                    out.push(fence_delimiter(trimmed, theme));
                }
                None => {
                    out.push(fence_delimiter(trimmed, theme));
                    let lang = trimmed.trim_start_matches('`').trim().to_owned();
                    fence = Some((lang, Vec::new()));
                }
            }
            continue;
        }

        if let Some((_, block)) = fence.as_mut() {
            block.push(raw.to_owned());
            continue;
        }

        out.push(block_line(raw, trimmed, theme));
    }

    // Unclosed fence: render what was collected.
    if let Some((lang, block)) = fence.take() {
        flush_code_block(&lang, &block, &mut out);
    }

    out
}

/// Highlights a collected fence body and appends its lines.
fn flush_code_block(lang: &str, block: &[String], out: &mut Vec<Line<'static>>) {
    if block.is_empty() {
        return;
    }
    let token = if lang.is_empty() { "txt" } else { lang };
    out.extend(highlight::highlight_code(&block.join("\n"), token));
}

/// Styles a ``` delimiter line.
fn fence_delimiter(trimmed: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        trimmed.to_owned(),
        Style::default().fg(theme.md_quote),
    ))
}

/// Renders one non-fence line with block-level styling.
fn block_line(raw: &str, trimmed: &str, theme: &Theme) -> Line<'static> {
    // Headings are styled whole-line; no inline parsing inside them.
    if trimmed.starts_with('#') {
        return Line::from(Span::styled(
            raw.to_owned(),
            Style::default().fg(theme.md_heading).add_modifier(Modifier::BOLD),
        ));
    }

    // Horizontal rules.
    if is_horizontal_rule(trimmed) {
        return Line::from(Span::styled(
            raw.to_owned(),
            Style::default().fg(theme.md_quote),
        ));
    }

    // Blockquotes: italic quote color for the whole line.
    if trimmed.starts_with("> ") || trimmed == ">" {
        return Line::from(Span::styled(
            raw.to_owned(),
            Style::default().fg(theme.md_quote).add_modifier(Modifier::ITALIC),
        ));
    }

    // Bullet list items: styled marker, inline-parsed content. The indent is
    // measured from the leading side only — trim() also strips trailing
    // whitespace, so its length cannot be used to slice the prefix.
    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        let indent = &raw[..raw.len() - raw.trim_start().len()];
        let mut spans = vec![Span::styled(
            format!("{indent}• "),
            Style::default().fg(theme.md_list_marker),
        )];
        spans.extend(parse_inline_spans(rest, theme));
        return Line::from(spans);
    }

    // Numbered list items keep their own marker.
    if let Some(marker_len) = numbered_marker_len(trimmed) {
        let indent = &raw[..raw.len() - raw.trim_start().len()];
        let mut spans = vec![Span::styled(
            format!("{indent}{}", &trimmed[..marker_len]),
            Style::default().fg(theme.md_list_marker),
        )];
        spans.extend(parse_inline_spans(&trimmed[marker_len..], theme));
        return Line::from(spans);
    }

    Line::from(parse_inline_spans(raw, theme))
}

/// A horizontal rule is three or more of the same rule character and nothing
/// else — `***bold***` is emphasis, not a rule.
fn is_horizontal_rule(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && trimmed.len() >= 3 && chars.all(|c| c == first)
}

/// Returns the byte length of a leading `"1. "`-style marker, if present.
fn numbered_marker_len(trimmed: &str) -> Option<usize> {
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &trimmed[digits..];
    if rest.starts_with(". ") {
        Some(digits + 2)
    } else {
        None
    }
}

/// Parses inline markdown (`**bold**`, `*italic*`, `` `code` ``) into spans.
///
/// Scans left to right and splits on the first *matched* marker pair; the
/// prefix before it can only contain unmatched markers and is emitted as
/// plain text. Unmatched markers anywhere degrade to plain text.
fn parse_inline_spans(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.md_text);
    if text.is_empty() {
        return vec![Span::raw("")];
    }
    if !text.contains(['*', '`']) {
        return vec![Span::styled(text.to_owned(), plain)];
    }

    for (pos, ch) in text.char_indices() {
        let (marker, style): (&str, Style) = match ch {
            '*' if text[pos..].starts_with("**") => {
                ("**", plain.add_modifier(Modifier::BOLD))
            }
            '*' => ("*", plain.add_modifier(Modifier::ITALIC)),
            '`' => ("`", Style::default().fg(theme.md_code)),
            _ => continue,
        };
        let open_end = pos + marker.len();
        let Some(close) = text[open_end..].find(marker).map(|o| open_end + o) else {
            continue;
        };
        // Empty emphasis ("**" "**") is treated as literal text.
        if close == open_end {
            continue;
        }

        let mut spans = Vec::new();
        if pos > 0 {
            spans.push(Span::styled(text[..pos].to_owned(), plain));
        }
        spans.push(Span::styled(text[open_end..close].to_owned(), style));
        spans.extend(parse_inline_spans(&text[close + marker.len()..], theme));
        return spans;
    }

    vec![Span::styled(text.to_owned(), plain)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::dark()
    }

    fn flat_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn rendering_is_idempotent() {
        let theme = theme();
        let text = "# Title\n\nSome **bold** text.\n\n```js\nlet x = 1;\n```";
        let first = render_review(ReviewStatus::Succeeded, text, &theme);
        let second = render_review(ReviewStatus::Succeeded, text, &theme);
        assert_eq!(first, second);
    }

    #[test]
    fn failed_renders_identically_to_idle() {
        let theme = theme();
        let idle = render_review(ReviewStatus::Idle, "", &theme);
        let failed = render_review(ReviewStatus::Failed, "", &theme);
        assert_eq!(idle, failed);
    }

    #[test]
    fn empty_success_renders_the_idle_placeholder() {
        let theme = theme();
        let idle = render_review(ReviewStatus::Idle, "", &theme);
        let empty = render_review(ReviewStatus::Succeeded, "", &theme);
        assert_eq!(idle, empty);
    }

    #[test]
    fn in_flight_shows_the_loading_placeholder() {
        let theme = theme();
        let lines = render_review(ReviewStatus::InFlight, "", &theme);
        assert!(flat_text(&lines).contains("Reviewing code"));
        assert_ne!(lines, render_review(ReviewStatus::Idle, "", &theme));
    }

    #[test]
    fn in_flight_never_shows_stale_text() {
        let theme = theme();
        // Even if stale review text were still present, InFlight ignores it.
        let lines = render_review(ReviewStatus::InFlight, "# Old review", &theme);
        assert!(!flat_text(&lines).contains("Old review"));
    }

    #[test]
    fn plain_review_text_comes_through() {
        let theme = theme();
        let lines = render_review(ReviewStatus::Succeeded, "Looks good.", &theme);
        assert_eq!(flat_text(&lines), "Looks good.");
    }

    #[test]
    fn heading_is_a_single_styled_span() {
        let theme = theme();
        let lines = markdown_to_lines("## Feedback", &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.md_heading));
    }

    #[test]
    fn code_fence_is_highlighted_between_delimiters() {
        let theme = theme();
        let lines = markdown_to_lines("before\n```js\nlet x = 1;\n```\nafter", &theme);
        let text = flat_text(&lines);
        assert!(text.contains("let x = 1;"));
        // Both delimiter lines survive, so fence toggling is visible.
        assert_eq!(text.matches("```").count(), 2);
    }

    #[test]
    fn unclosed_fence_still_renders_its_body() {
        let theme = theme();
        let lines = markdown_to_lines("```python\nprint('hi')", &theme);
        assert!(flat_text(&lines).contains("print('hi')"));
    }

    #[test]
    fn bold_splits_into_styled_spans() {
        let theme = theme();
        let lines = markdown_to_lines("use **const** here", &theme);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content.as_ref(), "const");
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inline_code_span_uses_code_color() {
        let theme = theme();
        let lines = markdown_to_lines("prefer `let` over `var`", &theme);
        let code_spans: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(theme.md_code))
            .collect();
        assert_eq!(code_spans.len(), 2);
        assert_eq!(code_spans[0].content.as_ref(), "let");
        assert_eq!(code_spans[1].content.as_ref(), "var");
    }

    #[test]
    fn unmatched_markers_degrade_to_plain_text() {
        let theme = theme();
        let lines = markdown_to_lines("2 * 3 = 6", &theme);
        assert_eq!(flat_text(&lines), "2 * 3 = 6");
    }

    #[test]
    fn bullet_items_get_a_marker_span() {
        let theme = theme();
        let lines = markdown_to_lines("- first\n- second", &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.md_list_marker));
        assert!(flat_text(&lines).contains("first"));
    }

    #[test]
    fn bullet_with_trailing_whitespace_keeps_its_content() {
        let theme = theme();
        let lines = markdown_to_lines("- item ", &theme);
        assert_eq!(lines[0].spans[0].content.as_ref(), "• ");
        assert_eq!(flat_text(&lines), "• item");
    }

    #[test]
    fn multibyte_bullet_with_trailing_whitespace_renders() {
        let theme = theme();
        // Trailing spaces shift trim()'s length by more than the leading
        // indent; the slice must still land on a char boundary.
        let lines = markdown_to_lines("- é   \n  - naïve  ", &theme);
        let text = flat_text(&lines);
        assert!(text.contains("é"));
        assert!(text.contains("  • naïve"));
    }

    #[test]
    fn rule_requires_only_rule_characters() {
        let theme = theme();
        let lines = markdown_to_lines("---\n***\n***bold***", &theme);
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.md_quote));
        assert_eq!(lines[1].spans[0].style.fg, Some(theme.md_quote));
        // A line that merely starts with rule characters is inline text.
        assert!(lines[2]
            .spans
            .iter()
            .any(|s| s.style.add_modifier.contains(Modifier::BOLD)));
        assert!(flat_text(&lines[2..]).contains("bold"));
    }

    #[test]
    fn numbered_items_keep_their_numbers() {
        let theme = theme();
        let lines = markdown_to_lines("1. alpha\n12. beta", &theme);
        let text = flat_text(&lines);
        assert!(text.contains("1. alpha"));
        assert!(text.contains("12. beta"));
    }

    #[test]
    fn scenario_review_without_code_fence() {
        let theme = theme();
        let lines = render_review(ReviewStatus::Succeeded, "Looks good.", &theme);
        let text = flat_text(&lines);
        assert!(text.contains("Looks good."));
        assert!(!text.contains("```"));
    }
}
