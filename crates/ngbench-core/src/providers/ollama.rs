//! Client for the non-streaming Ollama generate API.

use super::GenerationClient;
use crate::errors::ClientError;
use crate::model::Generation;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;
use url::Url;

pub const OLLAMA_DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const OLLAMA_DEFAULT_PORT: u16 = 11434;

const USER_AGENT_VALUE: &str = concat!("ngbench/", env!("CARGO_PKG_VERSION"));

/// Accounting fields copied from the response body into `Generation::meta`.
const META_FIELDS: [&str; 5] = [
    "total_duration",
    "load_duration",
    "prompt_eval_count",
    "eval_count",
    "eval_duration",
];

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OllamaClient {
    /// Accepts `host`, `host:port`, or a full URL. A missing scheme defaults
    /// to `http://` and a missing port to 11434.
    ///
    /// No request timeout is configured; slow generations are bounded only
    /// when the caller wraps calls in a deadline.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let base_url = normalize_endpoint(endpoint)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<Url, ClientError> {
    // The endpoint is often just 'host' or 'host:port' without a scheme.
    let base = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    let mut url = Url::parse(&base).map_err(|e| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    let explicit_default_port = endpoint.ends_with(":80") || endpoint.ends_with(":443");
    if url.port().is_none() && !explicit_default_port {
        url.set_port(Some(OLLAMA_DEFAULT_PORT))
            .map_err(|_| ClientError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: "failed to set default port".to_string(),
            })?;
    }

    Ok(url)
}

#[async_trait]
impl GenerationClient for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Generation, ClientError> {
        let url = self
            .base_url
            .join("api/generate")
            .map_err(|e| ClientError::InvalidEndpoint {
                endpoint: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let payload = serde_json::json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
        });

        debug!(url = %url, model = %model, "sending generate request");

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body: serde_json::Value = response.json().await?;
        let text = body
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or(ClientError::MissingField("response"))?
            .to_string();

        let mut meta = serde_json::Map::new();
        for key in META_FIELDS {
            if let Some(v) = body.get(key) {
                meta.insert(key.to_string(), v.clone());
            }
        }

        debug!(model = %model, chars = text.len(), "generation complete");

        Ok(Generation {
            text,
            model: model.to_string(),
            meta: serde_json::Value::Object(meta),
        })
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_scheme_and_default_port() {
        let url = normalize_endpoint("localhost").unwrap();
        assert_eq!(url.as_str(), "http://localhost:11434/");
    }

    #[test]
    fn host_with_port_is_kept() {
        let url = normalize_endpoint("127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn full_url_without_port_gets_default_port() {
        let url = normalize_endpoint("http://ollama.internal").unwrap();
        assert_eq!(url.as_str(), "http://ollama.internal:11434/");
    }

    #[test]
    fn explicit_standard_port_is_not_overridden() {
        let url = normalize_endpoint("ollama.internal:80").unwrap();
        assert_eq!(url.port_or_known_default(), Some(80));
        assert!(url.as_str().starts_with("http://ollama.internal"));
    }

    #[test]
    fn default_endpoint_parses() {
        let url = normalize_endpoint(OLLAMA_DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "http://localhost:11434/");
    }

    #[test]
    fn garbage_endpoint_is_rejected() {
        let err = normalize_endpoint("http://[").unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }

    #[test]
    fn generate_url_is_joined_onto_base() {
        let url = normalize_endpoint("localhost")
            .unwrap()
            .join("api/generate")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:11434/api/generate");
    }
}
