//! Local Quote Exporter - Implementation of QuoteExporter.
//!
//! Renders quotes to markdown and stores them under an output directory,
//! optionally converting to PDF with Pandoc first.
//!
//! # File naming
//!
//! `orcamento_{session}_{YYYYmmdd_HHMMSS}.{ext}`, where `session` is the
//! session key with every character outside `[A-Za-z0-9_-]` replaced by `_`.
//!
//! # Atomic writes
//!
//! Content goes to `{name}.tmp`, is synced, then renamed into place.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::configuration::Configuration;
use crate::domain::foundation::SessionKey;
use crate::ports::{ExportError, ExportFormat, ExportedDocument, ExportedQuote, QuoteExporter};

use super::markdown::render_quote;

/// Filesystem-backed quote exporter.
#[derive(Debug, Clone)]
pub struct LocalQuoteExporter {
    output_dir: PathBuf,
    format: ExportFormat,
    pandoc_path: Option<String>,
    pdf_timeout_secs: u64,
}

impl LocalQuoteExporter {
    /// Markdown exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ExportFormat::Markdown,
            pandoc_path: None,
            pdf_timeout_secs: 30,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a custom Pandoc executable path.
    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = Some(path.into());
        self
    }

    /// Set the timeout for PDF conversion.
    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    fn pandoc_command(&self) -> &str {
        self.pandoc_path.as_deref().unwrap_or("pandoc")
    }

    fn filename_for(&self, session: &SessionKey) -> String {
        format!(
            "orcamento_{}_{}.{}",
            sanitize(session.as_str()),
            Utc::now().format("%Y%m%d_%H%M%S"),
            self.format.extension()
        )
    }

    /// Resolves a stored file name, refusing anything that could escape
    /// the output directory.
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let is_plain = !filename.is_empty()
            && !filename.contains(['/', '\\'])
            && !filename.starts_with('.')
            && !filename.ends_with(".tmp");
        is_plain.then(|| self.output_dir.join(filename))
    }

    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        let mut child = Command::new(self.pandoc_command())
            .args(["-f", "markdown", "-t", "pdf", "-V", "geometry:margin=2cm"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ExportError::service_unavailable(format!("Failed to start Pandoc: {}", e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::pdf_failed(format!("Failed to write to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            std::time::Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "Pandoc returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    async fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let temp_path = path.with_extension(format!("{}.tmp", self.format.extension()));
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io_error(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;
        file.write_all(content).await.map_err(|e| {
            ExportError::io_error(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            ExportError::io_error(format!("Failed to sync {}: {}", temp_path.display(), e))
        })?;

        fs::rename(&temp_path, path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl QuoteExporter for LocalQuoteExporter {
    async fn export(
        &self,
        items: &[Configuration],
        session: &SessionKey,
    ) -> Result<ExportedQuote, ExportError> {
        if items.is_empty() {
            return Err(ExportError::EmptyQuote);
        }

        let markdown = render_quote(items, session, Utc::now());
        let content = match self.format {
            ExportFormat::Markdown => markdown.into_bytes(),
            ExportFormat::Pdf => self.to_pdf(&markdown).await?,
        };

        let filename = self.filename_for(session);
        let path = self.output_dir.join(&filename);
        self.write_atomic(&path, &content).await?;

        tracing::info!(
            session_id = %session,
            filename = %filename,
            items = items.len(),
            bytes = content.len(),
            "Quote exported"
        );

        Ok(ExportedQuote {
            filename,
            format: self.format,
        })
    }

    async fn fetch(&self, filename: &str) -> Result<ExportedDocument, ExportError> {
        let path = self
            .resolve(filename)
            .ok_or_else(|| ExportError::NotFound(filename.to_string()))?;
        let format = ExportFormat::from_filename(filename)
            .ok_or_else(|| ExportError::NotFound(filename.to_string()))?;

        let content = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExportError::NotFound(filename.to_string())
            } else {
                ExportError::io_error(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        Ok(ExportedDocument::new(content, format, filename))
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
