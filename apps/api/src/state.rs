use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PDF text extraction seam. Tests substitute a counting fake.
    pub extractor: Arc<dyn TextExtractor>,
    /// Hosted-model completion seam. Tests substitute a scripted fake.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
