//! Content model types consumed by document-rendering backends.
//!
//! The wire format distinguishes block variants by which key is present
//! (`raw`/`text`, `stack`, `lineBreak`), so `ContentBlock` serializes
//! through a manual impl while staying an exhaustive sum type internally.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ============================================================
// Typefaces and colors
// ============================================================

/// Proportional typeface for body text, headings, and quotes
pub const FONT_BODY: &str = "Helvetica";

/// Fixed-width typeface for table rendering
pub const FONT_MONO: &str = "Courier";

/// Muted gray used for blockquote text
pub const QUOTE_COLOR: &str = "#6b7280";

// ============================================================
// Styles
// ============================================================

/// Horizontal alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Align to the left edge
    #[default]
    Left,
    /// Center between the edges
    Center,
    /// Align to the right edge
    Right,
    /// Stretch to both edges
    Justify,
}

/// Formatting attributes of a single text run.
///
/// `bold` and `italic` are omitted from the serialized form when false,
/// matching the backend contract where absence means "not set".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in points
    pub font_size: u32,

    /// Bold weight
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic slant (accepted by the backend, never emitted by the converter)
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,

    /// CSS-style hex or named color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Horizontal alignment
    pub align: Align,

    /// Typeface name
    pub font: String,
}

impl TextStyle {
    /// Proportional body style at the given size, left-aligned
    pub fn body(font_size: u32) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            color: None,
            align: Align::Left,
            font: FONT_BODY.to_string(),
        }
    }

    /// Fixed-width style at the given size, left-aligned
    pub fn mono(font_size: u32) -> Self {
        Self {
            font: FONT_MONO.to_string(),
            ..Self::body(font_size)
        }
    }

    /// Set bold weight
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the text color
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================
// Content blocks
// ============================================================

/// A run of text with its formatting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// The text content
    pub raw: String,

    /// Formatting attributes
    pub text: TextStyle,
}

impl TextRun {
    /// Create a new text run
    pub fn new(raw: impl Into<String>, text: TextStyle) -> Self {
        Self {
            raw: raw.into(),
            text,
        }
    }
}

/// One atomic unit of styled output in the document content model.
///
/// The output of conversion is an ordered `Vec<ContentBlock>` whose order
/// mirrors the input line order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// A single styled text run
    Text(TextRun),
    /// An ordered group of differently-styled runs forming one logical line
    Stack(Vec<TextRun>),
    /// An explicit vertical gap
    LineBreak,
}

impl ContentBlock {
    /// The raw text carried by this block, if any
    pub fn raw_text(&self) -> Option<String> {
        match self {
            ContentBlock::Text(run) => Some(run.raw.clone()),
            ContentBlock::Stack(items) => {
                Some(items.iter().map(|run| run.raw.as_str()).collect())
            }
            ContentBlock::LineBreak => None,
        }
    }
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContentBlock::Text(run) => run.serialize(serializer),
            ContentBlock::Stack(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("stack", items)?;
                map.end()
            }
            ContentBlock::LineBreak => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("lineBreak", &EmptyObject)?;
                map.end()
            }
        }
    }
}

/// Serializes as `{}`, the wire shape of a line break's payload
struct EmptyObject;

impl Serialize for EmptyObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

// ============================================================
// Tests
// ============================================================
