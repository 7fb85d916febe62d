use performance_predictor::classification::ScoreSource;
use performance_predictor::config::ModelConfig;
use performance_predictor::engine::Predictor;
use performance_predictor::features::StudentInputs;
use performance_predictor::model::{JsonFileSource, LoadedModel, ModelSource};

use crate::helpers::get_predictor;

#[test]
fn fixture_forest_loads_with_expected_shape() {
    let forest = JsonFileSource::new("./tests/test-models/forest_3.json")
        .load()
        .unwrap();

    let stats = forest.stats();
    assert_eq!(stats.trees, 3);
    assert_eq!(stats.branches, 6);
    assert_eq!(stats.leaves, 9);
    assert_eq!(stats.missing, 0);
    assert_eq!(stats.max_depth, 3);
}

#[test]
fn malformed_artifact_falls_back_with_message() {
    let predictor = get_predictor("./tests/test-models/broken.json");

    assert!(predictor.model().forest().is_none());
    let message = predictor.model_error().unwrap_or_default();
    assert!(message.contains("broken.json"), "{message}");

    let result = predictor.predict(&StudentInputs::default());
    assert_eq!(result.source, ScoreSource::Heuristic);
    assert_eq!(result.score, 74);
}

#[test]
fn empty_forest_falls_back_silently() {
    let predictor = get_predictor("./tests/test-models/empty.json");

    assert!(predictor.model_error().is_none());
    assert!(!predictor.model().is_usable());
    assert_eq!(
        predictor.predict(&StudentInputs::default()).source,
        ScoreSource::Heuristic
    );
}

#[test]
fn missing_file_falls_back() {
    let model =
        LoadedModel::from_source(&JsonFileSource::new("./tests/test-models/nonexistent.json"));

    assert!(model.error().is_some());
    let result = Predictor::new(model).predict(&StudentInputs::zeroed());
    assert_eq!(result.score, 0);
    assert_eq!(result.source, ScoreSource::Heuristic);
}

#[test]
fn disabled_model_config_skips_loading() {
    let config = ModelConfig {
        path: "./tests/test-models/forest_3.json".into(),
        disabled: true,
    };

    let predictor = Predictor::from_config(&config);
    assert!(predictor.model().forest().is_none());
    assert!(predictor.model_error().is_none());

    let enabled = Predictor::from_config(&ModelConfig {
        disabled: false,
        ..config
    });
    assert!(enabled.model().is_usable());
    assert_eq!(
        enabled.predict(&StudentInputs::default()).source,
        ScoreSource::Ensemble
    );
}
