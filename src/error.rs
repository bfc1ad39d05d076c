//! Crate-level error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::RenderError;

/// Top-level error for document production
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
