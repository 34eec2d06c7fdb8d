//! Tests for the layered configuration system and option resolution.

use std::sync::Mutex;

use coarsen_core::config::{CliOverrides, CoarsenConfig, CoarseningOptions};
use coarsen_core::errors::ConfigError;
use coarsen_core::types::{MatchingStrategy, OutputFormat, SimilarityMeasure};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all COARSEN_ env vars to prevent cross-test contamination.
fn clear_coarsen_env_vars() {
    for key in [
        "COARSEN_MATCHING",
        "COARSEN_SIMILARITY",
        "COARSEN_EXTENSION",
        "COARSEN_DIRECTORY",
        "COARSEN_SEED",
        "COARSEN_SAVE_HIERARCHY",
    ] {
        std::env::remove_var(key);
    }
}

fn minimal_cli() -> CliOverrides {
    CliOverrides {
        filename: Some("graph.ncol".to_string()),
        vertices: Some(vec![4, 3]),
        ..Default::default()
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coarsen_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("coarsen.toml"),
        r#"
[input]
filename = "from_file.ncol"
vertices = [10, 20]

[coarsening]
matching = "lem"
similarity = "jaccard"
"#,
    )
    .unwrap();

    // Env overrides the file for the similarity measure.
    std::env::set_var("COARSEN_SIMILARITY", "salton");

    // CLI overrides env and file for the matching method.
    let cli = CliOverrides {
        matching: Some("rm".to_string()),
        ..Default::default()
    };

    let config = CoarsenConfig::load(dir.path(), None, Some(&cli)).unwrap();
    assert_eq!(config.input.filename.as_deref(), Some("from_file.ncol"));
    assert_eq!(config.input.vertices, vec![10, 20]);
    assert_eq!(config.coarsening.similarity.as_deref(), Some("salton"));
    assert_eq!(config.coarsening.matching.as_deref(), Some("rm"));

    clear_coarsen_env_vars();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coarsen_env_vars();

    let dir = tempdir();
    let config = CoarsenConfig::load(dir.path(), None, Some(&minimal_cli())).unwrap();
    let options = config.resolve().unwrap();

    assert_eq!(options.coarsening.reduction_factor, vec![0.5, 0.5]);
    assert_eq!(options.coarsening.max_levels, vec![3, 3]);
    assert_eq!(options.coarsening.layers_to_contract, vec![0, 1]);
    assert_eq!(options.coarsening.matching, MatchingStrategy::Hem);
    assert_eq!(options.coarsening.similarity, SimilarityMeasure::CommonNeighbors);
    assert_eq!(options.output.format, OutputFormat::Ncol);
    assert!(!options.coarsening.save_hierarchy);
}

#[test]
fn test_explicit_config_path_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coarsen_env_vars();

    let dir = tempdir();
    let missing = dir.path().join("nope.toml");
    match CoarsenConfig::load(dir.path(), Some(&missing), None) {
        Err(ConfigError::FileNotFound { path }) => assert!(path.contains("nope.toml")),
        other => panic!("Expected FileNotFound, got: {:?}", other),
    }
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coarsen_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("coarsen.toml"), "this is not valid toml {{{{").unwrap();

    match CoarsenConfig::load(dir.path(), None, None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_env_seed_and_save_hierarchy() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_coarsen_env_vars();

    let dir = tempdir();
    std::env::set_var("COARSEN_SEED", "1234");
    std::env::set_var("COARSEN_SAVE_HIERARCHY", "true");
    let config = CoarsenConfig::load(dir.path(), None, Some(&minimal_cli())).unwrap();
    let options = config.resolve().unwrap();
    assert_eq!(options.coarsening.seed, Some(1234));
    assert!(options.coarsening.save_hierarchy);

    clear_coarsen_env_vars();
}

#[test]
fn test_unknown_matching_fails_resolution() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.coarsening.matching = Some("best".into());
    assert!(matches!(config.resolve(), Err(ConfigError::UnknownMatching(_))));
}

#[test]
fn test_unknown_similarity_fails_resolution() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.coarsening.similarity = Some("cosine".into());
    assert!(matches!(
        config.resolve(),
        Err(ConfigError::UnknownSimilarity { .. })
    ));
}

#[test]
fn test_unknown_extension_fails_resolution() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.output.extension = Some("graphml".into());
    assert!(matches!(config.resolve(), Err(ConfigError::UnknownFormat(_))));
}

#[test]
fn test_multi_word_names_are_joined() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.coarsening.matching = Some("HEM".into());
    config.coarsening.similarity = Some("resource allocation".into());
    let options = config.resolve().unwrap();
    assert_eq!(options.coarsening.matching, MatchingStrategy::Hem);
    assert_eq!(
        options.coarsening.similarity,
        SimilarityMeasure::ResourceAllocation
    );
}

#[test]
fn test_length_mismatch_reduction_factor() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.coarsening.reduction_factor = vec![0.5];
    match config.resolve() {
        Err(ConfigError::LengthMismatch { right, .. }) => assert_eq!(right, "reduction_factor"),
        other => panic!("Expected LengthMismatch, got: {:?}", other),
    }
}

#[test]
fn test_length_mismatch_max_levels() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2];
    config.coarsening.max_levels = vec![1, 2, 3];
    match config.resolve() {
        Err(ConfigError::LengthMismatch { right, .. }) => assert_eq!(right, "max_levels"),
        other => panic!("Expected LengthMismatch, got: {:?}", other),
    }
}

#[test]
fn test_missing_filename_and_vertices() {
    let config = CoarsenConfig::default();
    match config.resolve() {
        Err(ConfigError::MissingField { field }) => assert_eq!(field, "input.filename"),
        other => panic!("Expected MissingField, got: {:?}", other),
    }

    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    match config.resolve() {
        Err(ConfigError::MissingField { field }) => assert_eq!(field, "input.vertices"),
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

#[test]
fn test_reduction_factor_range() {
    for bad in [0.0, -0.5, 1.5, f64::NAN] {
        let options = CoarseningOptions::new(vec![3]).with_reduction_factor(vec![bad]);
        assert!(
            matches!(options.validate(), Err(ConfigError::ValidationFailed { .. })),
            "{bad} should be rejected"
        );
    }
    let options = CoarseningOptions::new(vec![3]).with_reduction_factor(vec![1.0]);
    assert!(options.validate().is_ok());
}

#[test]
fn test_layers_to_contract_out_of_range() {
    let options = CoarseningOptions::new(vec![3, 3]).with_layers_to_contract(vec![0, 2]);
    assert!(matches!(
        options.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_layers_to_contract_deduplicated() {
    let mut config = CoarsenConfig::default();
    config.input.filename = Some("g.ncol".into());
    config.input.vertices = vec![2, 2, 2];
    config.coarsening.layers_to_contract = vec![2, 0, 2];
    let options = config.resolve().unwrap();
    assert_eq!(options.coarsening.layers_to_contract, vec![0, 2]);
}

#[test]
fn test_toml_round_trip_keeps_values() {
    let config = CoarsenConfig::from_toml(
        r#"
[input]
filename = "g.ncol"
vertices = [4, 3]

[coarsening]
reduction_factor = [1.0, 0.5]
max_levels = [1, 2]

[output]
extension = "gml"
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = CoarsenConfig::from_toml(&text).unwrap();
    let options = back.resolve().unwrap();
    assert_eq!(options.coarsening.reduction_factor, vec![1.0, 0.5]);
    assert_eq!(options.coarsening.max_levels, vec![1, 2]);
    assert_eq!(options.output.format, OutputFormat::Gml);
}
