use anyhow::Result;
use async_trait::async_trait;

use super::Turn;

/// Everything an outbound generation call needs. Built fresh from the full
/// session history on every submission, never incrementally.
pub struct RequestContext {
    pub model: String,
    pub contents: Vec<Turn>,
}

#[async_trait]
pub trait Backend {
    /// Requests a completion for the given context. `Ok(None)` means the
    /// service answered but carried no text.
    async fn generate(&self, context: RequestContext) -> Result<Option<String>>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
