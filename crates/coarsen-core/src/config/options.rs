//! Validated run options produced by [`super::CoarsenConfig::resolve`].

use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_LEVELS, DEFAULT_REDUCTION_FACTOR};
use crate::errors::ConfigError;
use crate::types::{MatchingStrategy, OutputFormat, SimilarityMeasure};

/// Everything a run needs, with every name already resolved.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: InputOptions,
    pub coarsening: CoarseningOptions,
    pub output: OutputOptions,
}

#[derive(Debug, Clone)]
pub struct InputOptions {
    pub filename: PathBuf,
}

/// Parameters consumed by the hierarchy controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CoarseningOptions {
    /// Number of vertices per layer; its length is the layer count.
    pub layer_sizes: Vec<usize>,
    pub reduction_factor: Vec<f64>,
    pub max_levels: Vec<u32>,
    pub matching: MatchingStrategy,
    pub similarity: SimilarityMeasure,
    /// Sorted, deduplicated layer indices that may be contracted.
    pub layers_to_contract: Vec<usize>,
    pub seed: Option<u64>,
    pub save_hierarchy: bool,
}

impl CoarseningOptions {
    /// Defaults for the given layer sizes: reduction factor 0.5 and three
    /// levels for every layer, all layers contracted, hem on common neighbors.
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        let layers = layer_sizes.len();
        Self {
            layer_sizes,
            reduction_factor: vec![DEFAULT_REDUCTION_FACTOR; layers],
            max_levels: vec![DEFAULT_MAX_LEVELS; layers],
            matching: MatchingStrategy::default(),
            similarity: SimilarityMeasure::default(),
            layers_to_contract: (0..layers).collect(),
            seed: None,
            save_hierarchy: false,
        }
    }

    pub fn with_reduction_factor(mut self, reduction_factor: Vec<f64>) -> Self {
        self.reduction_factor = reduction_factor;
        self
    }

    pub fn with_max_levels(mut self, max_levels: Vec<u32>) -> Self {
        self.max_levels = max_levels;
        self
    }

    pub fn with_matching(mut self, matching: MatchingStrategy) -> Self {
        self.matching = matching;
        self
    }

    pub fn with_similarity(mut self, similarity: SimilarityMeasure) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_layers_to_contract(mut self, mut layers: Vec<usize>) -> Self {
        layers.sort_unstable();
        layers.dedup();
        self.layers_to_contract = layers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_save_hierarchy(mut self, save_hierarchy: bool) -> Self {
        self.save_hierarchy = save_hierarchy;
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layer_sizes.len()
    }

    /// Check vector lengths and value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layers = self.layer_sizes.len();
        if layers == 0 {
            return Err(ConfigError::MissingField {
                field: "input.vertices".to_string(),
            });
        }
        if self.reduction_factor.len() != layers {
            return Err(ConfigError::LengthMismatch {
                left: "vertices".to_string(),
                left_len: layers,
                right: "reduction_factor".to_string(),
                right_len: self.reduction_factor.len(),
            });
        }
        if self.max_levels.len() != layers {
            return Err(ConfigError::LengthMismatch {
                left: "vertices".to_string(),
                left_len: layers,
                right: "max_levels".to_string(),
                right_len: self.max_levels.len(),
            });
        }
        for (layer, &rf) in self.reduction_factor.iter().enumerate() {
            if !(rf.is_finite() && rf > 0.0 && rf <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("coarsening.reduction_factor[{layer}]"),
                    message: format!("{rf} is not in (0, 1]"),
                });
            }
        }
        if let Some(&layer) = self.layers_to_contract.iter().find(|&&l| l >= layers) {
            return Err(ConfigError::ValidationFailed {
                field: "coarsening.layers_to_contract".to_string(),
                message: format!("layer {layer} does not exist (graph has {layers} layers)"),
            });
        }
        Ok(())
    }
}

/// Output parameters; path defaults that depend on the input file are
/// filled in by the artifact writer.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub directory: Option<PathBuf>,
    pub prefix: Option<String>,
    pub format: OutputFormat,
    pub unique_key: bool,
    pub show_timing: bool,
    pub save_timing_csv: bool,
    pub save_timing_json: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: None,
            format: OutputFormat::default(),
            unique_key: false,
            show_timing: false,
            save_timing_csv: false,
            save_timing_json: false,
        }
    }
}
