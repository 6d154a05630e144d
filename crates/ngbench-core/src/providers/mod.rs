use crate::errors::ClientError;
use crate::model::Generation;
use async_trait::async_trait;

pub mod fake;
pub mod ollama;

pub use fake::FakeClient;
pub use ollama::OllamaClient;

/// A backend that turns (model, prompt) into generated text.
///
/// Implementations surface failures as `ClientError`; how a failed call is
/// recorded is the runner's decision.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Generation, ClientError>;
    fn provider_name(&self) -> &'static str;
}
