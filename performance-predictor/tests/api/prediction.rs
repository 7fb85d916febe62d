use std::sync::Arc;
use std::thread;

use color_eyre::Result;
use performance_predictor::classification::{GradeLabel, RiskLevel, ScoreSource};
use performance_predictor::engine::Predictor;
use performance_predictor::features::StudentInputs;

use crate::datasets::students;
use crate::helpers::{assert_epsilon, get_predictor, get_test_data};

#[test]
fn verify_forest_predictions_students_3_trees() -> Result<()> {
    let predictor = get_predictor("./tests/test-models/forest_3.json");
    let test_data: Vec<students::DataPoint> = get_test_data("./tests/test-data/students.csv")?;

    for data_point in test_data {
        let prediction = predictor.predict(&data_point.inputs());
        assert_eq!(prediction.source, ScoreSource::Ensemble);
        assert_eq!(prediction.score, data_point.forest_prediction, "{data_point:?}");
    }

    Ok(())
}

#[test]
fn threshold_ties_route_left_through_the_forest() {
    // Study hours and parent education sit exactly on their thresholds
    let predictor = get_predictor("./tests/test-models/forest_3.json");
    let features = StudentInputs::default().features();

    let mean = predictor.ensemble_score(&features);
    assert!(mean.is_some());
    assert_epsilon(mean.unwrap_or_default(), 230.0 / 3.0, 1e-9);

    let result = predictor.predict(&StudentInputs::default());
    assert_eq!(result.score, 77);
    assert_eq!(result.grade, GradeLabel::C);
    assert_eq!(result.risk, RiskLevel::Medium);
}

#[test]
fn constant_leaves_average_to_twenty() {
    let predictor = get_predictor("./tests/test-models/constant_leaves.json");
    let features = StudentInputs::zeroed().features();

    assert_eq!(predictor.ensemble_score(&features), Some(20.0));

    let result = predictor.predict(&StudentInputs::zeroed());
    assert_eq!(result.score, 20);
    assert_eq!(result.grade, GradeLabel::F);
    assert_eq!(result.risk, RiskLevel::High);
}

#[test]
fn missing_branch_contributes_zero() {
    let predictor = get_predictor("./tests/test-models/missing_branch.json");

    let low = StudentInputs {
        attendance: 40.0,
        ..StudentInputs::default()
    };
    assert_eq!(predictor.predict(&low).score, 45);

    let high = StudentInputs {
        attendance: 90.0,
        ..StudentInputs::default()
    };
    assert_eq!(predictor.predict(&high).score, 90);
    assert_eq!(predictor.predict(&high).source, ScoreSource::Ensemble);
}

#[test]
fn default_profile_without_model_scores_74() {
    let result = Predictor::heuristic_only().predict(&StudentInputs::default());

    assert_eq!(result.score, 74);
    assert_eq!(result.grade, GradeLabel::C);
    assert_eq!(result.risk, RiskLevel::Medium);
    assert_eq!(result.source, ScoreSource::Heuristic);
}

#[test]
fn ensemble_scores_stay_in_range() {
    let predictor = get_predictor("./tests/test-models/forest_3.json");

    for attendance in [-500.0, 0.0, 74.9, 75.0, 75.1, 100.0, 1e6] {
        for study_hours in [-10.0, 0.0, 12.0, 40.0] {
            let inputs = StudentInputs {
                attendance,
                study_hours,
                ..StudentInputs::default()
            };
            let result = predictor.predict(&inputs);
            assert!(result.score <= 100);
            assert_eq!(result.source, ScoreSource::Ensemble);
        }
    }
}

#[test]
fn shared_predictor_is_consistent_across_threads() {
    let predictor = Arc::new(get_predictor("./tests/test-models/forest_3.json"));
    let expected = predictor.predict(&StudentInputs::default());

    let handles = (0..8)
        .map(|_| {
            let predictor = Arc::clone(&predictor);
            thread::spawn(move || predictor.predict(&StudentInputs::default()))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn summary_reflects_the_prediction() {
    let result = get_predictor("./tests/test-models/constant_leaves.json")
        .predict(&StudentInputs::default());

    assert_eq!(
        result.summary(),
        "Based on your inputs, performance is predicted to be 20% (grade F) with High risk of underperformance."
    );
}
