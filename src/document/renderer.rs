//! Rendering backend boundary.
//!
//! Conversion itself cannot fail; everything that can goes wrong at this
//! seam. The backend accepts the ordered block sequence plus metadata and
//! returns a reference to its output.

use std::path::PathBuf;

use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;

use super::metadata::DocumentMetadata;
use crate::convert::ContentBlock;

// ============================================================
// Error Types
// ============================================================

/// Rendering error types
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend is missing or unreachable. Distinct from conversion,
    /// which is total and cannot fail.
    #[error("renderer unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================
// Renderer boundary
// ============================================================

/// A handle to rendered output produced by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Backend-specific reference to the output (a path or URL)
    pub reference: String,
}

/// Boundary to an external document-rendering backend.
pub trait DocumentRenderer {
    /// Render an ordered block sequence with the given metadata.
    fn render(
        &self,
        blocks: &[ContentBlock],
        metadata: &DocumentMetadata,
    ) -> Result<RenderedDocument, RenderError>;
}

/// Assemble the full document value handed to a backend: the document-info
/// map plus the content model in its wire shape.
pub fn document_value(blocks: &[ContentBlock], metadata: &DocumentMetadata) -> Value {
    json!({
        "info": Value::Object(metadata.document_info()),
        "content": blocks,
    })
}

// ============================================================
// JSON renderer
// ============================================================

/// Renderer that writes the content model as a JSON document, the hand-off
/// format an external PDF backend consumes.
pub struct JsonRenderer {
    output_path: PathBuf,
    pretty: bool,
}

impl JsonRenderer {
    /// Create a renderer writing pretty-printed JSON to the given path
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            pretty: true,
        }
    }

    /// Switch to compact single-line output
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl DocumentRenderer for JsonRenderer {
    fn render(
        &self,
        blocks: &[ContentBlock],
        metadata: &DocumentMetadata,
    ) -> Result<RenderedDocument, RenderError> {
        let document = document_value(blocks, metadata);
        let serialized = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.output_path, serialized)?;

        info!(path = %self.output_path.display(), blocks = blocks.len(), "wrote document");

        Ok(RenderedDocument {
            reference: self.output_path.display().to_string(),
        })
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{TextRun, TextStyle};
    use tempfile::tempdir;

    fn sample_blocks() -> Vec<ContentBlock> {
        vec![
            ContentBlock::Text(TextRun::new("Title\n", TextStyle::body(24).bold())),
            ContentBlock::LineBreak,
        ]
    }

    #[test]
    fn test_document_value_shape() {
        let metadata = DocumentMetadata {
            title: Some("T".to_string()),
            ..Default::default()
        };
        let value = document_value(&sample_blocks(), &metadata);

        assert_eq!(value["info"]["Title"], "T");
        assert_eq!(value["content"][0]["raw"], "Title\n");
        assert_eq!(value["content"][1], serde_json::json!({ "lineBreak": {} }));
    }

    #[test]
    fn test_json_renderer_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let renderer = JsonRenderer::new(&path);
        let rendered = renderer
            .render(&sample_blocks(), &DocumentMetadata::default())
            .unwrap();

        assert_eq!(rendered.reference, path.display().to_string());

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(written["content"].is_array());
        assert_eq!(written["content"][0]["text"]["fontSize"], 24);
    }

    #[test]
    fn test_json_renderer_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.json");

        JsonRenderer::new(&path)
            .compact()
            .render(&sample_blocks(), &DocumentMetadata::default())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains('\n'));
    }

    #[test]
    fn test_unavailable_error_display() {
        let err = RenderError::Unavailable("no backend on this host".to_string());
        assert_eq!(
            err.to_string(),
            "renderer unavailable: no backend on this host"
        );
    }
}
