use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level benchmark configuration, loaded from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    /// Models to benchmark, in sweep order.
    pub models: Vec<String>,
    /// Path to the JSON test suite (array of objects with a `prompt` field).
    pub test_suite_path: PathBuf,
}

/// One prompt, sent to every configured model.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub prompt: String,
}

/// Raw output of a single generation call.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub model: String,
    /// Provider accounting fields (durations, token counts) when present.
    pub meta: serde_json::Value,
}

/// Text stored in `generated_code` when a generation attempt fails.
pub const ERROR_SENTINEL: &str = "Ollama Error";

/// Outcome of one (model, prompt) pair. One CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub model: String,
    pub prompt: String,
    pub generated_code: String,
    /// Marker coverage in [0, 1].
    pub evaluation_score: f64,
    /// Round-trip seconds; 0 when the generation failed.
    pub generation_time: f64,
}

impl BenchRecord {
    pub fn completed(
        model: &str,
        prompt: &str,
        generated_code: String,
        evaluation_score: f64,
        elapsed: Duration,
    ) -> Self {
        Self {
            model: model.to_string(),
            prompt: prompt.to_string(),
            generated_code,
            evaluation_score,
            generation_time: elapsed.as_secs_f64(),
        }
    }

    /// Sentinel row for a failed generation: zero score, zero recorded time.
    /// The measured latency only reaches the log.
    pub fn failed(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            prompt: prompt.to_string(),
            generated_code: ERROR_SENTINEL.to_string(),
            evaluation_score: 0.0,
            generation_time: 0.0,
        }
    }

    pub fn is_error(&self) -> bool {
        self.generated_code == ERROR_SENTINEL
    }
}
