//! Inline text handling: symbol normalization and bold span splitting.

use std::sync::LazyLock;

use regex::Regex;

/// Bullet character used for list items and glyph replacement
pub const BULLET: char = '•';

/// Decorative star-like glyphs the backend typefaces cannot render
const STAR_GLYPHS: &[char] = &[
    '⭐', '🌟', '✨', '★', '☆', '✦', '✧', '✪', '✫', '✬', '✭', '✮', '✯',
];

/// Non-greedy `**bold**` span, no nesting
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+?)\*\*").unwrap());

pub(crate) fn is_star_glyph(c: char) -> bool {
    STAR_GLYPHS.contains(&c)
}

/// Strip backticks and replace decorative star glyphs with a plain bullet.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
pub fn normalize_symbols(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '`')
        .map(|c| if is_star_glyph(c) { BULLET } else { c })
        .collect()
}

/// One plain or bold piece of a line, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSegment {
    /// Segment text with the `**` delimiters removed
    pub text: String,
    /// Whether the segment came from a bold span
    pub bold: bool,
}

/// Split a line into alternating plain/bold segments.
///
/// Returns an empty vector when the line contains no bold span at all; the
/// caller then emits the whole line as a single plain run. Empty gaps
/// between adjacent spans produce no segment.
pub fn split_bold_segments(line: &str) -> Vec<InlineSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in BOLD_SPAN.captures_iter(line) {
        let span = caps.get(0).expect("match always has a full capture");
        if span.start() > last {
            segments.push(InlineSegment {
                text: line[last..span.start()].to_string(),
                bold: false,
            });
        }
        segments.push(InlineSegment {
            text: caps[1].to_string(),
            bold: true,
        });
        last = span.end();
    }

    if segments.is_empty() {
        return segments;
    }

    if last < line.len() {
        segments.push(InlineSegment {
            text: line[last..].to_string(),
            bold: false,
        });
    }

    segments
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_backticks() {
        assert_eq!(normalize_symbols("`code` span"), "code span");
    }

    #[test]
    fn test_normalize_replaces_star_glyphs() {
        assert_eq!(normalize_symbols("⭐ rating"), "• rating");
        assert_eq!(normalize_symbols("★☆✨"), "•••");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_symbols("`a` ⭐ b ✦");
        let twice = normalize_symbols(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_leaves_plain_text_unchanged() {
        assert_eq!(normalize_symbols("plain text"), "plain text");
        assert_eq!(normalize_symbols(""), "");
    }

    #[test]
    fn test_split_no_bold_returns_empty() {
        assert!(split_bold_segments("no emphasis here").is_empty());
        assert!(split_bold_segments("").is_empty());
        assert!(split_bold_segments("*single* stars only").is_empty());
    }

    #[test]
    fn test_split_bold_in_middle() {
        let segments = split_bold_segments("a **b** c");
        assert_eq!(
            segments,
            vec![
                InlineSegment { text: "a ".to_string(), bold: false },
                InlineSegment { text: "b".to_string(), bold: true },
                InlineSegment { text: " c".to_string(), bold: false },
            ]
        );
    }

    #[test]
    fn test_split_bold_at_edges() {
        let segments = split_bold_segments("**start** and **end**");
        assert_eq!(segments.len(), 3);
        assert!(segments[0].bold);
        assert_eq!(segments[1].text, " and ");
        assert!(segments[2].bold);
    }

    #[test]
    fn test_split_whole_line_bold() {
        let segments = split_bold_segments("**only**");
        assert_eq!(
            segments,
            vec![InlineSegment { text: "only".to_string(), bold: true }]
        );
    }

    #[test]
    fn test_split_adjacent_spans_emit_no_empty_gap() {
        let segments = split_bold_segments("**a****b**");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.bold));
    }

    #[test]
    fn test_split_is_non_greedy() {
        let segments = split_bold_segments("**a** x **b**");
        assert_eq!(segments[0].text, "a");
        assert_eq!(segments[2].text, "b");
    }

    #[test]
    fn test_split_unterminated_span() {
        assert!(split_bold_segments("**dangling").is_empty());
    }
}
