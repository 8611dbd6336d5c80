pub mod openai;

use anyhow::Result;
use crate::types::{Generation, GenerationRequest};

/// Chat-completion capability. Failures are transport/provider errors and
/// are never retried by callers.
#[async_trait::async_trait]
pub trait Llm: Send + Sync {
    async fn generate(&self, req: GenerationRequest) -> Result<Generation>;
}
