use ngbench_core::metrics_api::Metric;

/// Scores generated code by the fraction of expected markers it mentions.
///
/// Matching is case-insensitive and each marker counts at most once, so the
/// score is `distinct markers present / total markers` in `[0, 1]`.
pub struct MarkerMetric {
    markers: Vec<String>,
}

impl MarkerMetric {
    /// Markers are lowercased once at construction.
    pub fn new(markers: Vec<String>) -> Self {
        let markers = markers.into_iter().map(|m| m.to_lowercase()).collect();
        Self { markers }
    }

    /// Marker set for Angular code generation.
    pub fn angular() -> Self {
        Self::new(
            [
                "component",
                "template",
                "module",
                "service",
                "import",
                "@angular",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}

impl Metric for MarkerMetric {
    fn name(&self) -> &'static str {
        "marker_coverage"
    }

    fn score(&self, text: &str) -> f64 {
        if self.markers.is_empty() {
            return 0.0;
        }
        let haystack = text.to_lowercase();
        let hits = self
            .markers
            .iter()
            .filter(|marker| haystack.contains(marker.as_str()))
            .count();
        hits as f64 / self.markers.len() as f64
    }
}
