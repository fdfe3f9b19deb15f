use crate::{Context, ModelId, Reply};

/// Sends one consultation turn to a chat-completion model and returns its
/// reply.
///
/// Implementations make exactly one upstream request per call. Failures are
/// returned to the caller untouched; there are no retries.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, model: &ModelId, context: Context) -> anyhow::Result<Reply>;
}
