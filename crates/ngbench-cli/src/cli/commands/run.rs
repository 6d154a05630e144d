use std::sync::Arc;
use std::time::Duration;

use ngbench_core::config::{load_config, load_test_suite};
use ngbench_core::engine::Runner;
use ngbench_core::providers::OllamaClient;
use ngbench_core::report::{console, csv};
use tracing::info;

use crate::cli::args::RunArgs;
use crate::exit_codes;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let cfg = match load_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(exit_codes::INTERNAL_ERROR);
        }
    };

    let suite = match load_test_suite(&cfg.test_suite_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(exit_codes::INTERNAL_ERROR);
        }
    };

    let client = match OllamaClient::new(&args.endpoint) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(exit_codes::INTERNAL_ERROR);
        }
    };

    info!(
        models = cfg.models.len(),
        cases = suite.len(),
        endpoint = %args.endpoint,
        "starting benchmark sweep"
    );

    let runner = Runner::new(Arc::new(client), ngbench_metrics::default_metric())
        .with_deadline(args.timeout_secs.map(Duration::from_secs));

    let records = runner.run(&cfg, &suite).await;

    csv::write_csv(&records, &args.output)?;
    console::print_summary(&records);
    println!(
        "Benchmark completed. Results saved to {}",
        args.output.display()
    );

    if args.strict {
        let failed = records.iter().filter(|r| r.is_error()).count();
        if failed > 0 {
            eprintln!("{} of {} generations failed", failed, records.len());
            return Ok(exit_codes::BENCH_FAILED);
        }
    }

    Ok(exit_codes::SUCCESS)
}
