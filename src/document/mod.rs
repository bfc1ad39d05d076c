//! Document module
//!
//! Metadata, export filename helpers, and the boundary to the external
//! document-rendering backend. The content model itself lives in
//! [`crate::convert`]; this module covers everything around it.

mod metadata;
mod renderer;

// Re-export public API
pub use metadata::{
    ensure_pdf_extension, export_filename, safe_filename, DocumentMetadata, DEFAULT_FILENAME,
};
pub use renderer::{
    document_value, DocumentRenderer, JsonRenderer, RenderError, RenderedDocument,
};
