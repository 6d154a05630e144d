//! Core engine for benchmarking Angular code generation against a local
//! Ollama server: config and suite loading, the generation client, scoring
//! seams, the sequential runner, and the result writers.

pub mod config;
pub mod engine;
pub mod errors;
pub mod metrics_api;
pub mod model;
pub mod providers;
pub mod report;
