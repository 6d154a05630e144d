use crate::errors::ClientError;
use crate::metrics_api::Metric;
use crate::model::{BenchConfig, BenchRecord, Generation, TestCase};
use crate::providers::GenerationClient;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

/// Drives the model × prompt sweep and collects one record per pair.
pub struct Runner {
    pub client: Arc<dyn GenerationClient>,
    pub metric: Arc<dyn Metric>,
    /// Per-call deadline. `None` leaves timing to the transport.
    pub deadline: Option<Duration>,
}

impl Runner {
    pub fn new(client: Arc<dyn GenerationClient>, metric: Arc<dyn Metric>) -> Self {
        Self {
            client,
            metric,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Benchmark every configured model against the whole suite.
    ///
    /// Records come back grouped by model in configured order, suite order
    /// within each group: `models.len() * suite.len()` rows in total.
    pub async fn run(&self, cfg: &BenchConfig, suite: &[TestCase]) -> Vec<BenchRecord> {
        let mut records = Vec::with_capacity(cfg.models.len() * suite.len());
        for model in &cfg.models {
            info!(model = %model, "benchmarking model");
            records.extend(self.run_model(model, suite).await);
        }
        records
    }

    /// Run the whole suite against one model, one prompt at a time.
    ///
    /// Never fails: a failed generation degrades to a sentinel record with
    /// zero score and zero recorded time.
    pub async fn run_model(&self, model: &str, suite: &[TestCase]) -> Vec<BenchRecord> {
        let mut records = Vec::with_capacity(suite.len());
        for tc in suite {
            let start = Instant::now();
            let outcome = self.call_generate(model, &tc.prompt).await;
            let elapsed = start.elapsed();

            let record = match outcome {
                Ok(generation) => {
                    let score = self.metric.score(&generation.text);
                    debug!(
                        model = %model,
                        score,
                        secs = elapsed.as_secs_f64(),
                        "generation scored"
                    );
                    BenchRecord::completed(model, &tc.prompt, generation.text, score, elapsed)
                }
                Err(e) => {
                    warn!(
                        model = %model,
                        error = %e,
                        secs = elapsed.as_secs_f64(),
                        "generation failed"
                    );
                    BenchRecord::failed(model, &tc.prompt)
                }
            };
            records.push(record);
        }
        records
    }

    async fn call_generate(&self, model: &str, prompt: &str) -> Result<Generation, ClientError> {
        let fut = self.client.generate(model, prompt);
        match self.deadline {
            Some(t) => timeout(t, fut)
                .await
                .unwrap_or_else(|_| Err(ClientError::Timeout(t.as_secs_f64()))),
            None => fut.await,
        }
    }
}
