//! Document metadata and export filename helpers.
//!
//! Metadata never enters the content model; it only parameterizes the
//! rendering backend (its "document info" dictionary and export filename).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Export filename used when no title is available
pub const DEFAULT_FILENAME: &str = "document.pdf";

/// Safe filenames are capped at this many code points before the extension
const MAX_FILENAME_LENGTH: usize = 200;

// ============================================================
// Metadata
// ============================================================

/// Document-level metadata merged with defaults and handed to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    /// Document title; also drives the export filename
    pub title: Option<String>,

    /// Author name
    pub author: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Keyword list, joined with ", " for the backend
    pub keywords: Vec<String>,

    /// Creating application
    pub creator: Option<String>,

    /// Producing library
    pub producer: Option<String>,

    /// Creation timestamp
    pub creation_date: Option<DateTime<Utc>>,

    /// Last modification timestamp
    pub modification_date: Option<DateTime<Utc>>,
}

impl DocumentMetadata {
    /// Merge with overrides, field-wise: a present override wins, an absent
    /// one falls back to this value.
    #[must_use]
    pub fn merge(&self, overrides: &DocumentMetadata) -> DocumentMetadata {
        DocumentMetadata {
            title: overrides.title.clone().or_else(|| self.title.clone()),
            author: overrides.author.clone().or_else(|| self.author.clone()),
            subject: overrides.subject.clone().or_else(|| self.subject.clone()),
            keywords: if overrides.keywords.is_empty() {
                self.keywords.clone()
            } else {
                overrides.keywords.clone()
            },
            creator: overrides.creator.clone().or_else(|| self.creator.clone()),
            producer: overrides.producer.clone().or_else(|| self.producer.clone()),
            creation_date: overrides.creation_date.or(self.creation_date),
            modification_date: overrides.modification_date.or(self.modification_date),
        }
    }

    /// Build the backend's document-info map. Absent fields are omitted;
    /// a trailing `.pdf` is stripped from the title.
    pub fn document_info(&self) -> Map<String, Value> {
        let mut info = Map::new();

        if let Some(title) = &self.title {
            info.insert("Title".to_string(), json!(strip_pdf_extension(title)));
        }
        if let Some(author) = &self.author {
            info.insert("Author".to_string(), json!(author));
        }
        if let Some(subject) = &self.subject {
            info.insert("Subject".to_string(), json!(subject));
        }
        if !self.keywords.is_empty() {
            info.insert("Keywords".to_string(), json!(self.keywords.join(", ")));
        }
        if let Some(creator) = &self.creator {
            info.insert("Creator".to_string(), json!(creator));
        }
        if let Some(producer) = &self.producer {
            info.insert("Producer".to_string(), json!(producer));
        }
        if let Some(date) = self.creation_date {
            info.insert("CreationDate".to_string(), json!(date.to_rfc3339()));
        }
        if let Some(date) = self.modification_date {
            info.insert("ModDate".to_string(), json!(date.to_rfc3339()));
        }

        info
    }
}

// ============================================================
// Filename helpers
// ============================================================

/// Create a filesystem-safe filename from free text: strip characters that
/// are invalid on common filesystems, trim, and collapse whitespace runs
/// to underscores, capped at 200 code points.
pub fn safe_filename(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| {
            !matches!(
                c,
                '\0' | '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '\n' | '\r'
            )
        })
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    let mut in_whitespace = false;
    for c in cleaned.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out.chars().take(MAX_FILENAME_LENGTH).collect()
}

/// Append `.pdf` unless the text already ends with it (case-insensitive).
pub fn ensure_pdf_extension(text: &str) -> String {
    if text.to_lowercase().ends_with(".pdf") {
        text.to_string()
    } else {
        format!("{text}.pdf")
    }
}

/// Derive the export filename from metadata: the sanitized title when one
/// is present, the default otherwise.
pub fn export_filename(metadata: &DocumentMetadata) -> String {
    match metadata.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => ensure_pdf_extension(&safe_filename(title)),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

fn strip_pdf_extension(text: &str) -> &str {
    if text.len() >= 4
        && text.is_char_boundary(text.len() - 4)
        && text[text.len() - 4..].eq_ignore_ascii_case(".pdf")
    {
        &text[..text.len() - 4]
    } else {
        text
    }
}

// ============================================================
// Tests
// ============================================================
