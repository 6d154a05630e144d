use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ngbench_core::config::DEFAULT_CONFIG_PATH;
use ngbench_core::providers::ollama::OLLAMA_DEFAULT_ENDPOINT;

#[derive(Parser)]
#[command(
    name = "ngbench",
    version,
    about = "Benchmark Angular code generation across local Ollama models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the benchmark sweep and write a CSV of results
    Run(RunArgs),
    /// Write starter config and test suite files
    Init(InitArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output CSV path (overwritten if present)
    #[arg(long, default_value = "angular_benchmark_results.csv")]
    pub output: PathBuf,

    /// Ollama endpoint; `host` and `host:port` forms are accepted
    #[arg(long, env = "OLLAMA_HOST", default_value = OLLAMA_DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-generation deadline in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Exit non-zero when any generation failed
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[arg(long, default_value = "test_suite.json")]
    pub test_suite: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}
