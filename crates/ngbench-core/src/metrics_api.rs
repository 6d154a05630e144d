/// Scoring interface applied to generated text.
///
/// Metrics are pure string functions; scores fall in [0, 1].
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, text: &str) -> f64;
}
