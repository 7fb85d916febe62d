use color_eyre::Result;
use performance_predictor::batch::{evaluate_file, evaluate_reader};
use performance_predictor::classification::GradeLabel::*;
use performance_predictor::engine::Predictor;
use performance_predictor::evaluation::{ConfusionMatrix, EvaluationLog};
use performance_predictor::metrics::Metrics;

use crate::helpers::assert_epsilon;

#[test]
fn label_pairs_fill_the_matrix() -> Result<()> {
    let log = EvaluationLog::new();
    let summary = evaluate_file(
        "./tests/test-data/labels.csv",
        &Predictor::heuristic_only(),
        &log,
    )?;

    assert_eq!(summary.rows, 6);
    assert_eq!(summary.recorded, 5);
    assert_eq!(summary.skipped(), 1);

    let matrix = log.confusion_matrix();
    assert_eq!(matrix.total(), 5);
    assert_eq!(matrix.get(B, C), 1);
    assert_eq!(matrix.get(F, D), 1);

    let metrics = matrix.metrics();
    assert_epsilon(metrics.accuracy, 0.6, 1e-12);
    assert_eq!(metrics.precision(A), 1.0);
    assert_epsilon(metrics.recall(B), 0.5, 1e-12);
    assert_eq!(metrics.f1(D), 0.0);
    assert_eq!(metrics.f1(F), 0.0);

    Ok(())
}

#[test]
fn input_rows_are_scored_before_comparison() -> Result<()> {
    let log = EvaluationLog::new();
    let summary = evaluate_file(
        "./tests/test-data/inputs.csv",
        &Predictor::heuristic_only(),
        &log,
    )?;

    assert_eq!(summary.rows, 6);
    assert_eq!(summary.recorded, 5);

    let matrix = log.confusion_matrix();
    assert_eq!(matrix.get(A, A), 2);
    assert_eq!(matrix.get(C, C), 1);
    assert_eq!(matrix.get(F, F), 1);
    assert_eq!(matrix.get(B, C), 1);
    assert_epsilon(matrix.metrics().accuracy, 0.8, 1e-12);

    Ok(())
}

#[test]
fn files_accumulate_until_cleared() -> Result<()> {
    let log = EvaluationLog::new();
    let predictor = Predictor::heuristic_only();

    evaluate_file("./tests/test-data/labels.csv", &predictor, &log)?;
    evaluate_file("./tests/test-data/inputs.csv", &predictor, &log)?;
    assert_eq!(log.len(), 10);
    assert_eq!(log.confusion_matrix().total(), 10);

    log.clear();
    assert_eq!(log.confusion_matrix(), ConfusionMatrix::default());
    assert_eq!(log.metrics(), Metrics::default());

    Ok(())
}

#[test]
fn perfect_batch_scores_one() -> Result<()> {
    let csv = "actual,predicted\nA,A\nB,B\nC,C\nD,D\nF,F\nF,F\n";
    let log = EvaluationLog::new();
    evaluate_reader(csv.as_bytes(), &Predictor::heuristic_only(), &log)?;

    let metrics = log.metrics();
    assert_eq!(metrics.accuracy, 1.0);
    assert_eq!(metrics.macro_avg.f1, 1.0);

    Ok(())
}

#[test]
fn file_without_actual_column_is_rejected() {
    let log = EvaluationLog::new();
    let result = evaluate_file(
        "./tests/test-data/no_actual.csv",
        &Predictor::heuristic_only(),
        &log,
    );

    assert!(result.is_err());
    assert!(log.is_empty());
}
