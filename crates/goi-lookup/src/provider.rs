use async_trait::async_trait;
use goi_types::{Language, Lookup};

/// Remote definition source for one language.
///
/// Implementations own their endpoint, transport, and response parsing;
/// callers only see the unified `Found`/`NotFound` result. Errors stop at
/// the orchestrator, which treats them like `NotFound`.
#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Fetch definitions for a single query string.
    async fn fetch(&self, query: &str) -> Result<Lookup, LookupError>;

    /// Which language this provider serves.
    fn language(&self) -> Language;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: HTTP {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("bad endpoint url: {0}")]
    BadUrl(String),
}
