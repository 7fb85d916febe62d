use std::path::Path;

use color_eyre::Result;

use performance_predictor::engine::Predictor;
use performance_predictor::model::{JsonFileSource, LoadedModel};
use serde::de::DeserializeOwned;

pub fn get_predictor(path: impl AsRef<Path>) -> Predictor {
    let source = JsonFileSource::new(path.as_ref());
    Predictor::new(LoadedModel::from_source(&source))
}

pub fn get_test_data<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut data = Vec::new();
    for result in reader.deserialize() {
        data.push(result?);
    }

    Ok(data)
}

pub fn assert_epsilon(left: f64, right: f64, epsilon: f64) {
    println!(
        "left: {left}, right: {right}, epsilon: {epsilon}, |left - right| = {}",
        (left - right).abs()
    );
    assert!((left - right).abs() <= epsilon.abs());
}
