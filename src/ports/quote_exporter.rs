//! Quote Exporter Port - Renders a finished quote into a document.
//!
//! The conversation hands the full ledger to the exporter when the user
//! confirms. The exporter writes a document and reports the file name it
//! chose; the HTTP layer later fetches the bytes by that name.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::configuration::Configuration;
use crate::domain::foundation::SessionKey;

/// Port for exporting quotes.
///
/// # Contract
///
/// Implementations must:
/// - Render every configuration in ledger order with its grand total
/// - Return a file name unique per session and export time
/// - Report failures as `ExportError`, never panic
#[async_trait]
pub trait QuoteExporter: Send + Sync {
    /// Renders `items` and stores the document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering or writing fails.
    async fn export(
        &self,
        items: &[Configuration],
        session: &SessionKey,
    ) -> Result<ExportedQuote, ExportError>;

    /// Loads a previously exported document by file name.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NotFound` if no such document exists.
    async fn fetch(&self, filename: &str) -> Result<ExportedDocument, ExportError>;
}

/// Export formats supported by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Markdown text, no conversion needed.
    Markdown,
    /// PDF produced by an external converter.
    Pdf,
}

impl ExportFormat {
    /// MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Guesses the format from a file name's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        ext.parse().ok()
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedQuote {
    pub filename: String,
    pub format: ExportFormat,
}

/// Stored document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, filename: impl Into<String>) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: filename.into(),
            format,
        }
    }
}

/// Errors that can occur during quote export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Nothing to export.
    #[error("Quote has no items")]
    EmptyQuote,

    /// External converter (Pandoc) is not available.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
