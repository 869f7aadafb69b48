use crate::error::Result;
use crate::graph::Weight;
use crate::report::OutputFormat;
use crate::utils::random_graph::DEFAULT_MAX_WEIGHT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings read from a TOML file; every field has a default and command
/// line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub nodes: u32,
    pub edges: u32,
    pub max_weight: Weight,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            nodes: 32,
            edges: 96,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Config::from_toml(&text)
    }

    /// The file at `path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[generator]\nnodes = 100\nseed = 7\n").unwrap();
        assert_eq!(config.generator.nodes, 100);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.edges, GeneratorConfig::default().edges);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn reads_output_format() {
        let config = Config::from_toml("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Config::from_toml("[output]\nformat = \"xml\"\n").is_err());
    }
}
