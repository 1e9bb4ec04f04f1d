//! Quote export configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::ports::ExportFormat;

use super::error::ValidationError;

/// Quote document export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory exported documents are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// `markdown` or `pdf`
    #[serde(default = "default_format")]
    pub format: ExportFormat,

    /// Pandoc executable, resolved from `PATH` when unset
    pub pandoc_path: Option<String>,

    /// Seconds allowed for one PDF conversion
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Prefix of the download URLs handed to clients
    #[serde(default = "default_download_base")]
    pub download_base: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        if !(self.download_base.starts_with('/') || self.download_base.starts_with("http")) {
            return Err(ValidationError::InvalidDownloadBase);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: default_format(),
            pandoc_path: None,
            pdf_timeout_secs: default_pdf_timeout(),
            download_base: default_download_base(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_format() -> ExportFormat {
    ExportFormat::Markdown
}

fn default_pdf_timeout() -> u64 {
    30
}

fn default_download_base() -> String {
    "/quotes".to_string()
}
