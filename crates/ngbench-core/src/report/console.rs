//! Human summary printed to stderr after a run.

use crate::model::BenchRecord;

/// Per-model aggregates over a finished run.
///
/// Error rows contribute their zero score and zero time to the means.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub model: String,
    pub cases: usize,
    pub errors: usize,
    pub mean_score: f64,
    pub mean_time: f64,
}

/// Aggregate records per model, in first-appearance order.
pub fn summarize(records: &[BenchRecord]) -> Vec<ModelSummary> {
    let mut summaries: Vec<ModelSummary> = Vec::new();
    for r in records {
        let idx = match summaries.iter().position(|s| s.model == r.model) {
            Some(i) => i,
            None => {
                summaries.push(ModelSummary {
                    model: r.model.clone(),
                    cases: 0,
                    errors: 0,
                    mean_score: 0.0,
                    mean_time: 0.0,
                });
                summaries.len() - 1
            }
        };
        let entry = &mut summaries[idx];
        entry.cases += 1;
        if r.is_error() {
            entry.errors += 1;
        }
        entry.mean_score += r.evaluation_score;
        entry.mean_time += r.generation_time;
    }
    for s in &mut summaries {
        if s.cases > 0 {
            s.mean_score /= s.cases as f64;
            s.mean_time /= s.cases as f64;
        }
    }
    summaries
}

pub fn print_summary(records: &[BenchRecord]) {
    eprintln!();
    for s in summarize(records) {
        let icon = if s.errors == 0 { "✅" } else { "⚠️ " };
        eprintln!(
            "{} {:<20} cases={} errors={} mean_score={:.2} mean_time={:.1}s",
            icon, s.model, s.cases, s.errors, s.mean_score, s.mean_time
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn aggregates_per_model_in_first_appearance_order() {
        let records = vec![
            BenchRecord::completed("m1", "p1", "x".into(), 1.0, Duration::from_secs(2)),
            BenchRecord::completed("m1", "p2", "y".into(), 0.5, Duration::from_secs(4)),
            BenchRecord::failed("m2", "p1"),
            BenchRecord::completed("m2", "p2", "z".into(), 1.0, Duration::from_secs(1)),
        ];

        let summaries = summarize(&records);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].model, "m1");
        assert_eq!(summaries[0].cases, 2);
        assert_eq!(summaries[0].errors, 0);
        assert_eq!(summaries[0].mean_score, 0.75);
        assert_eq!(summaries[0].mean_time, 3.0);

        assert_eq!(summaries[1].model, "m2");
        assert_eq!(summaries[1].cases, 2);
        assert_eq!(summaries[1].errors, 1);
        assert_eq!(summaries[1].mean_score, 0.5);
        assert_eq!(summaries[1].mean_time, 0.5);
    }

    #[test]
    fn empty_run_summarizes_to_nothing() {
        assert!(summarize(&[]).is_empty());
    }
}
