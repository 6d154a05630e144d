use std::sync::Arc;

use ngbench_core::metrics_api::Metric;

mod marker;

pub use marker::MarkerMetric;

/// The metric applied when none is configured: Angular marker coverage.
pub fn default_metric() -> Arc<dyn Metric> {
    Arc::new(MarkerMetric::angular())
}
