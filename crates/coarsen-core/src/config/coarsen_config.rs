//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::options::{CoarseningOptions, InputOptions, OutputOptions, RunOptions};
use super::{CoarseningConfig, InputConfig, OutputConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::types::{MatchingStrategy, OutputFormat, SimilarityMeasure};

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COARSEN_*`)
/// 3. Config file (`--config PATH`, or `coarsen.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoarsenConfig {
    pub input: InputConfig,
    pub coarsening: CoarseningConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub filename: Option<String>,
    pub vertices: Option<Vec<usize>>,
    pub directory: Option<String>,
    pub prefix: Option<String>,
    pub reduction_factor: Option<Vec<f64>>,
    pub max_levels: Option<Vec<u32>>,
    pub matching: Option<String>,
    pub similarity: Option<String>,
    pub layers_to_contract: Option<Vec<usize>>,
    pub extension: Option<String>,
    pub seed: Option<u64>,
    pub save_hierarchy: Option<bool>,
    pub unique_key: Option<bool>,
    pub show_timing: Option<bool>,
    pub save_timing_csv: Option<bool>,
    pub save_timing_json: Option<bool>,
}

impl CoarsenConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist; the implicit `coarsen.toml`
    /// in `root` is optional.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the merged config and resolve every name into its closed enum.
    ///
    /// This is the only place where method names are looked up; nothing
    /// downstream ever sees a raw string.
    pub fn resolve(&self) -> Result<RunOptions, ConfigError> {
        let filename = self
            .input
            .filename
            .as_ref()
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "input.filename".to_string(),
            })?;

        let layer_sizes = self.input.vertices.clone();
        if layer_sizes.is_empty() {
            return Err(ConfigError::MissingField {
                field: "input.vertices".to_string(),
            });
        }
        let layers = layer_sizes.len();

        let matching = match &self.coarsening.matching {
            Some(name) => name.parse::<MatchingStrategy>()?,
            None => MatchingStrategy::default(),
        };
        let similarity = match &self.coarsening.similarity {
            Some(name) => name.parse::<SimilarityMeasure>()?,
            None => SimilarityMeasure::default(),
        };
        let format = match &self.output.extension {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        let mut coarsening = CoarseningOptions::new(layer_sizes);
        if !self.coarsening.reduction_factor.is_empty() {
            coarsening.reduction_factor = self.coarsening.reduction_factor.clone();
        }
        if !self.coarsening.max_levels.is_empty() {
            coarsening.max_levels = self.coarsening.max_levels.clone();
        }
        if !self.coarsening.layers_to_contract.is_empty() {
            let mut contract = self.coarsening.layers_to_contract.clone();
            contract.sort_unstable();
            contract.dedup();
            coarsening.layers_to_contract = contract;
        } else {
            coarsening.layers_to_contract = (0..layers).collect();
        }
        coarsening.matching = matching;
        coarsening.similarity = similarity;
        coarsening.seed = self.coarsening.seed;
        coarsening.save_hierarchy = self.coarsening.save_hierarchy.unwrap_or(false);
        coarsening.validate()?;

        let output = OutputOptions {
            directory: self.output.directory.as_ref().map(PathBuf::from),
            prefix: self.output.prefix.clone(),
            format,
            unique_key: self.output.unique_key.unwrap_or(false),
            show_timing: self.output.show_timing.unwrap_or(false),
            save_timing_csv: self.output.save_timing_csv.unwrap_or(false),
            save_timing_json: self.output.save_timing_json.unwrap_or(false),
        };

        Ok(RunOptions {
            input: InputOptions {
                filename: PathBuf::from(filename),
            },
            coarsening,
            output,
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CoarsenConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CoarsenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged config file");
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value set.
    fn merge(base: &mut CoarsenConfig, other: &CoarsenConfig) {
        // Input
        if other.input.filename.is_some() {
            base.input.filename = other.input.filename.clone();
        }
        if !other.input.vertices.is_empty() {
            base.input.vertices = other.input.vertices.clone();
        }

        // Coarsening
        if !other.coarsening.reduction_factor.is_empty() {
            base.coarsening.reduction_factor = other.coarsening.reduction_factor.clone();
        }
        if !other.coarsening.max_levels.is_empty() {
            base.coarsening.max_levels = other.coarsening.max_levels.clone();
        }
        if other.coarsening.matching.is_some() {
            base.coarsening.matching = other.coarsening.matching.clone();
        }
        if other.coarsening.similarity.is_some() {
            base.coarsening.similarity = other.coarsening.similarity.clone();
        }
        if !other.coarsening.layers_to_contract.is_empty() {
            base.coarsening.layers_to_contract = other.coarsening.layers_to_contract.clone();
        }
        if other.coarsening.seed.is_some() {
            base.coarsening.seed = other.coarsening.seed;
        }
        if other.coarsening.save_hierarchy.is_some() {
            base.coarsening.save_hierarchy = other.coarsening.save_hierarchy;
        }

        // Output
        if other.output.directory.is_some() {
            base.output.directory = other.output.directory.clone();
        }
        if other.output.prefix.is_some() {
            base.output.prefix = other.output.prefix.clone();
        }
        if other.output.extension.is_some() {
            base.output.extension = other.output.extension.clone();
        }
        if other.output.unique_key.is_some() {
            base.output.unique_key = other.output.unique_key;
        }
        if other.output.show_timing.is_some() {
            base.output.show_timing = other.output.show_timing;
        }
        if other.output.save_timing_csv.is_some() {
            base.output.save_timing_csv = other.output.save_timing_csv;
        }
        if other.output.save_timing_json.is_some() {
            base.output.save_timing_json = other.output.save_timing_json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `COARSEN_MATCHING`, `COARSEN_SIMILARITY`, etc.
    fn apply_env_overrides(config: &mut CoarsenConfig) {
        if let Ok(val) = std::env::var("COARSEN_MATCHING") {
            config.coarsening.matching = Some(val);
        }
        if let Ok(val) = std::env::var("COARSEN_SIMILARITY") {
            config.coarsening.similarity = Some(val);
        }
        if let Ok(val) = std::env::var("COARSEN_EXTENSION") {
            config.output.extension = Some(val);
        }
        if let Ok(val) = std::env::var("COARSEN_DIRECTORY") {
            config.output.directory = Some(val);
        }
        if let Ok(val) = std::env::var("COARSEN_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.coarsening.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COARSEN_SAVE_HIERARCHY") {
            if let Ok(v) = val.parse::<bool>() {
                config.coarsening.save_hierarchy = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CoarsenConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.filename {
            config.input.filename = Some(v.clone());
        }
        if let Some(ref v) = cli.vertices {
            config.input.vertices = v.clone();
        }
        if let Some(ref v) = cli.directory {
            config.output.directory = Some(v.clone());
        }
        if let Some(ref v) = cli.prefix {
            config.output.prefix = Some(v.clone());
        }
        if let Some(ref v) = cli.reduction_factor {
            config.coarsening.reduction_factor = v.clone();
        }
        if let Some(ref v) = cli.max_levels {
            config.coarsening.max_levels = v.clone();
        }
        if let Some(ref v) = cli.matching {
            config.coarsening.matching = Some(v.clone());
        }
        if let Some(ref v) = cli.similarity {
            config.coarsening.similarity = Some(v.clone());
        }
        if let Some(ref v) = cli.layers_to_contract {
            config.coarsening.layers_to_contract = v.clone();
        }
        if let Some(ref v) = cli.extension {
            config.output.extension = Some(v.clone());
        }
        if let Some(v) = cli.seed {
            config.coarsening.seed = Some(v);
        }
        if let Some(v) = cli.save_hierarchy {
            config.coarsening.save_hierarchy = Some(v);
        }
        if let Some(v) = cli.unique_key {
            config.output.unique_key = Some(v);
        }
        if let Some(v) = cli.show_timing {
            config.output.show_timing = Some(v);
        }
        if let Some(v) = cli.save_timing_csv {
            config.output.save_timing_csv = Some(v);
        }
        if let Some(v) = cli.save_timing_json {
            config.output.save_timing_json = Some(v);
        }
    }
}
