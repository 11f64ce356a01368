//! Chat server configuration, loadable from TOML.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CSV file with the recorded engine samples.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("engine_data.csv")
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// Config file named by the first CLI argument, or defaults without one.
    pub fn from_args() -> anyhow::Result<Self> {
        match std::env::args().nth(1) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dataset_path: default_dataset_path(),
        }
    }
}
