use super::GenerationClient;
use crate::errors::ClientError;
use crate::model::Generation;
use async_trait::async_trait;

/// Test double that returns a canned response for every call.
#[derive(Debug, Default)]
pub struct FakeClient {
    fixed_response: Option<String>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: String) -> Self {
        self.fixed_response = Some(response);
        self
    }
}

#[async_trait]
impl GenerationClient for FakeClient {
    async fn generate(&self, model: &str, _prompt: &str) -> Result<Generation, ClientError> {
        let text = self
            .fixed_response
            .clone()
            .unwrap_or_else(|| "ok".to_string());

        Ok(Generation {
            text,
            model: model.to_string(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
