//! GitHub-flavored table parsing and monospace rendering.
//!
//! A table block starts at a line containing a pipe whose successor is a
//! divider row. Parsing is best-effort: ragged rows are padded with empty
//! cells and nothing here can fail.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::inline::{is_star_glyph, BULLET};
use super::types::{Align, ContentBlock, TextRun, TextStyle};

/// Table text is always fixed-width at this size
const TABLE_FONT_SIZE: u32 = 12;

/// Cells are joined with `" | "`, three characters per column boundary
const CELL_JOIN_WIDTH: usize = 3;

/// Divider cell: optional leading colon, three-or-more hyphens, optional
/// trailing colon
static DIVIDER_CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:?-{3,}:?$").unwrap());

static CELL_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+?)\*\*").unwrap());
static CELL_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").unwrap());

// ============================================================
// Row-level helpers
// ============================================================

/// Check whether a line is a table divider row.
pub(crate) fn is_table_divider(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return false;
    }

    let cells: Vec<&str> = trimmed
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();

    !cells.is_empty() && cells.iter().all(|cell| DIVIDER_CELL.is_match(cell))
}

/// Split a row on pipes. Outer pipes are optional and do not create
/// phantom empty columns, so an empty leading or trailing cell is dropped.
pub(crate) fn split_table_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line
        .trim()
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect();

    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }

    cells
}

/// Normalize a cell for monospace rendering: strip backticks, unwrap
/// `**bold**` and `*emphasis*` markers, replace star glyphs with a bullet.
pub(crate) fn normalize_table_cell(text: &str) -> String {
    let text: String = text.chars().filter(|c| *c != '`').collect();
    let text = CELL_BOLD.replace_all(&text, "$1");
    let text = CELL_EMPHASIS.replace_all(&text, "$1");

    text.chars()
        .map(|c| if is_star_glyph(c) { BULLET } else { c })
        .collect()
}

/// Pad a cell to the target width, counting code points rather than bytes.
/// Cells at or over the width are returned unchanged, never truncated.
/// Center padding puts the smaller half on the left for an odd remainder.
pub(crate) fn pad_cell(text: &str, width: usize, align: Align) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }

    let pad = width - length;
    match align {
        Align::Right => format!("{}{}", " ".repeat(pad), text),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
        Align::Left | Align::Justify => format!("{}{}", text, " ".repeat(pad)),
    }
}

fn divider_alignment(cell: &str) -> Align {
    let has_left = cell.starts_with(':');
    let has_right = cell.ends_with(':');
    if has_left && has_right {
        Align::Center
    } else if has_right {
        Align::Right
    } else {
        Align::Left
    }
}

// ============================================================
// Block parsing
// ============================================================

/// Parse and render the table starting at `start` (the header line;
/// `start + 1` must already have passed the divider test).
///
/// Returns the rendered blocks and the index of the first unconsumed line.
pub(crate) fn parse_table_block(lines: &[&str], start: usize) -> (Vec<ContentBlock>, usize) {
    let header_cells = split_table_row(lines.get(start).copied().unwrap_or(""));
    let divider = lines.get(start + 1).copied().unwrap_or("");

    let alignments: Vec<Align> = split_table_row(divider)
        .iter()
        .map(|cell| divider_alignment(cell))
        .collect();

    // Consume data rows until a blank, pipe-less, or divider line.
    let mut raw_rows = Vec::new();
    let mut next = start + 2;
    while next < lines.len() {
        let trimmed = lines[next].trim();
        if trimmed.is_empty() || !trimmed.contains('|') || is_table_divider(trimmed) {
            break;
        }
        raw_rows.push(split_table_row(lines[next]));
        next += 1;
    }

    let columns = header_cells.len();

    let header: Vec<String> = header_cells
        .iter()
        .map(|cell| normalize_table_cell(cell))
        .collect();

    // Short rows are padded with empty cells, long rows truncated to the
    // header's column count.
    let rows: Vec<Vec<String>> = raw_rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|col| normalize_table_cell(row.get(col).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            let header_len = header[col].chars().count();
            let data_len = rows
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0);
            header_len.max(data_len)
        })
        .collect();

    let render_row = |cells: &[String], bold: bool| -> ContentBlock {
        let joined = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let width = widths.get(col).copied().unwrap_or_else(|| cell.chars().count());
                let align = alignments.get(col).copied().unwrap_or(Align::Left);
                pad_cell(cell, width, align)
            })
            .collect::<Vec<_>>()
            .join(" | ");

        let style = if bold {
            TextStyle::mono(TABLE_FONT_SIZE).bold()
        } else {
            TextStyle::mono(TABLE_FONT_SIZE)
        };
        ContentBlock::Text(TextRun::new(format!("{joined}\n"), style))
    };

    let rule_length = widths.iter().sum::<usize>() + CELL_JOIN_WIDTH * columns.saturating_sub(1);
    let rule = "-".repeat(rule_length.max(3));

    debug!(columns, rows = rows.len(), "rendered table block");

    let mut blocks = Vec::with_capacity(rows.len() + 4);
    blocks.push(ContentBlock::LineBreak);
    blocks.push(render_row(&header, true));
    blocks.push(ContentBlock::Text(TextRun::new(
        format!("{rule}\n"),
        TextStyle::mono(TABLE_FONT_SIZE),
    )));
    for row in &rows {
        blocks.push(render_row(row, false));
    }
    blocks.push(ContentBlock::LineBreak);

    (blocks, next)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_detection() {
        assert!(is_table_divider("| --- | --- |"));
        assert!(is_table_divider("--- | ---"));
        assert!(is_table_divider("| :---: | ---: |"));
        assert!(is_table_divider("  | --- |  "));

        assert!(!is_table_divider("| -- | -- |")); // too few hyphens
        assert!(!is_table_divider("---")); // no pipe
        assert!(!is_table_divider("| a | b |"));
        assert!(!is_table_divider("| |"));
    }

    #[test]
    fn test_split_row_drops_outer_pipes() {
        assert_eq!(split_table_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_table_row("a | b"), vec!["a", "b"]);
        assert_eq!(split_table_row("| a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_row_keeps_inner_empty_cells() {
        assert_eq!(split_table_row("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_degenerate_rows() {
        assert!(split_table_row("|").is_empty());
        assert!(split_table_row("").is_empty());
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_table_cell("`code`"), "code");
        assert_eq!(normalize_table_cell("**bold**"), "bold");
        assert_eq!(normalize_table_cell("*emph*"), "emph");
        assert_eq!(normalize_table_cell("⭐ five"), "• five");
        assert_eq!(normalize_table_cell("plain"), "plain");
    }

    #[test]
    fn test_pad_cell_left_right_center() {
        assert_eq!(pad_cell("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad_cell("ab", 5, Align::Right), "   ab");
        assert_eq!(pad_cell("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad_cell("ab", 4, Align::Center), " ab ");
    }

    #[test]
    fn test_pad_cell_never_truncates() {
        assert_eq!(pad_cell("abcdef", 3, Align::Left), "abcdef");
        assert_eq!(pad_cell("abc", 3, Align::Right), "abc");
    }

    #[test]
    fn test_pad_cell_counts_code_points() {
        // 4 code points, not 4 + multibyte padding
        assert_eq!(pad_cell("emo🎉", 6, Align::Left), "emo🎉  ");
    }

    #[test]
    fn test_alignment_from_divider() {
        assert_eq!(divider_alignment(":---:"), Align::Center);
        assert_eq!(divider_alignment("---:"), Align::Right);
        assert_eq!(divider_alignment(":---"), Align::Left);
        assert_eq!(divider_alignment("---"), Align::Left);
    }

    #[test]
    fn test_parse_basic_table() {
        let lines = vec!["| Name | Age |", "| --- | --- |", "| Alice | 30 |"];
        let (blocks, next) = parse_table_block(&lines, 0);

        assert_eq!(next, 3);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0], ContentBlock::LineBreak);
        assert_eq!(blocks[4], ContentBlock::LineBreak);

        // "Name" pads to width 5 (from "Alice"), "Age" stays at 3
        let ContentBlock::Text(header) = &blocks[1] else {
            panic!("expected header text row");
        };
        assert_eq!(header.raw, "Name  | Age\n");
        assert!(header.text.bold);
        assert_eq!(header.text.font, "Courier");
        assert_eq!(header.text.font_size, 12);

        let ContentBlock::Text(rule) = &blocks[2] else {
            panic!("expected rule row");
        };
        assert_eq!(rule.raw, format!("{}\n", "-".repeat(5 + 3 + 3)));
        assert!(!rule.text.bold);

        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        assert_eq!(row.raw, "Alice | 30 \n");
        assert!(!row.text.bold);
    }

    #[test]
    fn test_parse_table_alignment() {
        let lines = vec![
            "| L | C | R |",
            "| :--- | :---: | ---: |",
            "| a | b | ccc |",
        ];
        let (blocks, _) = parse_table_block(&lines, 0);

        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        // widths are 1, 1, 3; only the last column exceeds its header
        assert_eq!(row.raw, "a | b | ccc\n");

        let lines = vec!["| H | X |", "| :---: | ---: |", "| a | b |", "| ccc | dddd |"];
        let (blocks, _) = parse_table_block(&lines, 0);
        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        // center pads "a" inside width 3, right pads "b" inside width 4
        assert_eq!(row.raw, " a  |    b\n");
    }

    #[test]
    fn test_parse_ragged_rows_pad_with_empty() {
        let lines = vec!["| A | B | C |", "| --- | --- | --- |", "| only |"];
        let (blocks, _) = parse_table_block(&lines, 0);

        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        assert_eq!(row.raw, "only |   |  \n");
    }

    #[test]
    fn test_parse_stops_at_blank_and_pipeless_lines() {
        let lines = vec![
            "| A |",
            "| --- |",
            "| 1 |",
            "",
            "| orphan |",
        ];
        let (_, next) = parse_table_block(&lines, 0);
        assert_eq!(next, 3);

        let lines = vec!["| A |", "| --- |", "| 1 |", "plain text"];
        let (_, next) = parse_table_block(&lines, 0);
        assert_eq!(next, 3);
    }

    #[test]
    fn test_parse_stops_at_second_divider() {
        let lines = vec!["| A |", "| --- |", "| --- |"];
        let (blocks, next) = parse_table_block(&lines, 0);
        assert_eq!(next, 2);
        // break, header, rule, break: no data rows
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn test_rule_has_minimum_length() {
        let lines = vec!["| A |", "| --- |"];
        let (blocks, _) = parse_table_block(&lines, 0);

        let ContentBlock::Text(rule) = &blocks[2] else {
            panic!("expected rule row");
        };
        assert_eq!(rule.raw, "---\n");
    }

    #[test]
    fn test_unicode_width_by_code_points() {
        let lines = vec!["| 🎉🎉 | B |", "| --- | --- |", "| x | y |"];
        let (blocks, _) = parse_table_block(&lines, 0);

        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        // header "🎉🎉" is 2 code points wide, so "x" pads to 2
        assert_eq!(row.raw, "x  | y\n");
    }

    #[test]
    fn test_cell_emphasis_stripped_in_cells() {
        let lines = vec!["| **Name** | `Age` |", "| --- | --- |", "| *Alice* | 30 |"];
        let (blocks, _) = parse_table_block(&lines, 0);

        let ContentBlock::Text(header) = &blocks[1] else {
            panic!("expected header row");
        };
        assert_eq!(header.raw, "Name  | Age\n");

        let ContentBlock::Text(row) = &blocks[3] else {
            panic!("expected data row");
        };
        assert_eq!(row.raw, "Alice | 30 \n");
    }
}
