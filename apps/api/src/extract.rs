//! PDF text extraction.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Text extraction seam, carried in `AppState` as `Arc<dyn TextExtractor>`
/// so handler tests can substitute a counting fake.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts text from a PDF file on the blocking thread pool, so concurrent
/// requests are not stalled while a document is parsed.
///
/// Output is the page-ordered concatenation of every page's text with
/// leading/trailing whitespace trimmed. Missing, unreadable, or non-PDF
/// files error; the caller decides how to report that.
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let path: PathBuf = path.to_owned();
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text(&path)
                .with_context(|| format!("Failed to extract text from {}", path.display()))
        })
        .await
        .context("PDF extraction task panicked")??;
        Ok(text.trim().to_string())
    }
}
