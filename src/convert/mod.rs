//! Markdown Conversion module
//!
//! Converts markdown text into the document content model: an ordered
//! sequence of styled text runs, stacks, and line breaks consumable by a
//! document-rendering backend.
//!
//! The supported markdown subset is deliberately narrow:
//!
//! - Headings (levels 1-3)
//! - Blockquotes (single level)
//! - Horizontal rules
//! - Dash lists (flat, rewritten to bullet runs)
//! - Inline `**bold**` spans
//! - GitHub-flavored tables with column alignment

mod converter;
mod inline;
mod table;
mod types;

// Re-export public API
pub use converter::MarkdownConverter;
pub use inline::{normalize_symbols, split_bold_segments, InlineSegment, BULLET};
pub use types::{Align, ContentBlock, TextRun, TextStyle, FONT_BODY, FONT_MONO, QUOTE_COLOR};
