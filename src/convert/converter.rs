//! Line-oriented markdown to content-block conversion.
//!
//! A single forward pass over the input lines, with one line of lookahead
//! for the blank-before-heading rule and two for table detection. The
//! converter is total: no line shape produces an error, and malformed
//! constructs degrade to best-effort output.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::{normalize_symbols, split_bold_segments, BULLET};
use super::table::{is_table_divider, parse_table_block};
use super::types::{ContentBlock, TextRun, TextStyle, QUOTE_COLOR};

const QUOTE_FONT_SIZE: u32 = 12;
const BODY_FONT_SIZE: u32 = 14;

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s+(.*)$").unwrap());
static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());
static HEADING_3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{3}\s+(.*)$").unwrap());
static HEADING_2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{2}\s+(.*)$").unwrap());
static HEADING_1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1}\s+(.*)$").unwrap());
static HEADING_AHEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,3}\s+").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s+(.*)$").unwrap());

// ============================================================
// Markdown Converter
// ============================================================

/// Converts markdown text into the document content model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Create a new converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a markdown string into an ordered block sequence.
    ///
    /// Output order mirrors input line order. Only horizontal rules and
    /// blank lines immediately preceding a heading contribute no block.
    pub fn convert(&self, markdown: &str) -> Vec<ContentBlock> {
        let normalized = markdown.replace("\r\n", "\n");
        // A trailing newline yields a final empty line, which becomes a
        // trailing LineBreak like any other blank line.
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut output = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index];
            let trimmed = line.trim();

            // Table start: pipe here, divider on the next line
            if trimmed.contains('|')
                && index + 1 < lines.len()
                && is_table_divider(lines[index + 1])
            {
                let (blocks, next) = parse_table_block(&lines, index);
                output.extend(blocks);
                index = next;
                continue;
            }

            // Blockquote, matched against the right-trimmed line
            if let Some(caps) = BLOCKQUOTE.captures(line.trim_end()) {
                output.extend(Self::quote_blocks(&caps[1]));
                index += 1;
                continue;
            }

            // Horizontal rules contribute no block at all
            if HORIZONTAL_RULE.is_match(trimmed) {
                index += 1;
                continue;
            }

            if let Some(block) = Self::heading_block(trimmed) {
                output.push(block);
                index += 1;
                continue;
            }

            if trimmed.is_empty() {
                // Swallow the blank line when a heading follows, so headings
                // do not get double-spaced.
                let heading_follows = lines
                    .get(index + 1)
                    .is_some_and(|next| HEADING_AHEAD.is_match(next.trim()));
                if !heading_follows {
                    output.push(ContentBlock::LineBreak);
                }
                index += 1;
                continue;
            }

            output.push(Self::paragraph_block(line, trimmed));
            index += 1;
        }

        output
    }

    fn quote_blocks(content: &str) -> Vec<ContentBlock> {
        let text = normalize_symbols(content.trim());
        if text.is_empty() {
            return vec![ContentBlock::LineBreak];
        }
        vec![
            ContentBlock::Text(TextRun::new(
                text,
                TextStyle::body(QUOTE_FONT_SIZE).color(QUOTE_COLOR),
            )),
            ContentBlock::LineBreak,
        ]
    }

    /// Classify a heading line. Level 3 is tried before 2 before 1 because
    /// the single-`#` pattern would otherwise match the deeper levels too.
    fn heading_block(trimmed: &str) -> Option<ContentBlock> {
        let levels: [(&Regex, u32, &str); 3] = [
            (&*HEADING_3, 18, "\n"),
            (&*HEADING_2, 20, ""),
            (&*HEADING_1, 24, ""),
        ];

        for (pattern, font_size, prefix) in levels {
            if let Some(caps) = pattern.captures(trimmed) {
                let title = normalize_symbols(caps[1].trim());
                let block = if title.is_empty() {
                    ContentBlock::LineBreak
                } else {
                    ContentBlock::Text(TextRun::new(
                        format!("{prefix}{title}\n"),
                        TextStyle::body(font_size).bold(),
                    ))
                };
                return Some(block);
            }
        }

        None
    }

    /// Default handling for paragraph and list lines: bullet rewrite, then
    /// symbol normalization, then inline bold splitting.
    fn paragraph_block(line: &str, trimmed: &str) -> ContentBlock {
        let rewritten = match LIST_ITEM.captures(trimmed) {
            Some(caps) => format!("{BULLET} {}", &caps[1]),
            None => line.to_string(),
        };
        let text = normalize_symbols(&rewritten);

        let segments = split_bold_segments(&text);
        if segments.is_empty() {
            return ContentBlock::Text(TextRun::new(
                format!("{text}\n"),
                TextStyle::body(BODY_FONT_SIZE),
            ));
        }

        let mut items: Vec<TextRun> = segments
            .into_iter()
            .map(|segment| {
                let style = if segment.bold {
                    TextStyle::body(BODY_FONT_SIZE).bold()
                } else {
                    TextStyle::body(BODY_FONT_SIZE)
                };
                TextRun::new(segment.text, style)
            })
            .collect();

        // The trailing newline belongs to the last segment only.
        if let Some(last) = items.last_mut() {
            last.raw.push('\n');
        }

        ContentBlock::Stack(items)
    }
}

// ============================================================
// Tests
// ============================================================
