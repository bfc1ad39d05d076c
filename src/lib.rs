//! printmark - Markdown to print-document content conversion
//!
//! Converts a markdown string into an ordered sequence of styled content
//! blocks (the document content model) consumable by an external
//! document-rendering backend, plus the metadata and filename plumbing
//! needed to parameterize that backend.
//!
//! # Example
//!
//! ```
//! use printmark::MarkdownConverter;
//!
//! let converter = MarkdownConverter::new();
//! let blocks = converter.convert("# Title\n\nBody with **bold** text.");
//! assert!(!blocks.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;

// Re-export public API
pub use cli::{Cli, Commands, ConvertArgs};
pub use config::{CliOverrides, Config, OutputConfig};
pub use convert::{
    normalize_symbols, Align, ContentBlock, MarkdownConverter, TextRun, TextStyle,
};
pub use document::{
    document_value, ensure_pdf_extension, export_filename, safe_filename, DocumentMetadata,
    DocumentRenderer, JsonRenderer, RenderError, RenderedDocument,
};
pub use error::{DocumentError, Result};

/// Exit codes for the CLI
pub mod exit_codes {
    /// Successful completion
    pub const SUCCESS: i32 = 0;
    /// Unspecified failure
    pub const GENERAL_ERROR: i32 = 1;
    /// Input file missing
    pub const INPUT_NOT_FOUND: i32 = 2;
}
