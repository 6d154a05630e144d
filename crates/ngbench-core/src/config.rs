use crate::errors::ConfigError;
use crate::model::{BenchConfig, TestCase};
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub fn load_config(path: &Path) -> Result<BenchConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let cfg: BenchConfig = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    if cfg.models.is_empty() {
        return Err(ConfigError::Invalid {
            message: "config lists no models".into(),
        });
    }
    Ok(cfg)
}

pub fn load_test_suite(path: &Path) -> Result<Vec<TestCase>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let cases: Vec<TestCase> = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    if cases.is_empty() {
        return Err(ConfigError::Invalid {
            message: format!("test suite {} contains no test cases", path.display()),
        });
    }
    Ok(cases)
}
