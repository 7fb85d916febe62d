use score_forest::forest::Predict;
use tracing::debug;

use crate::classification::{PredictionResult, ScoreSource};
use crate::config::ModelConfig;
use crate::fallback::{heuristic_score, to_score};
use crate::features::{FeatureVector, StudentInputs};
use crate::model::{JsonFileSource, LoadedModel};

/// Scores students with the loaded ensemble, falling back to the weighted
/// heuristic when the ensemble is absent, empty, or produces a non-finite
/// mean.
///
/// The forest is shared behind an `Arc`, so a `Predictor` can be cloned
/// freely and used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    model: LoadedModel,
}

impl Predictor {
    pub fn new(model: LoadedModel) -> Self {
        Self { model }
    }

    pub fn heuristic_only() -> Self {
        Self::new(LoadedModel::unavailable())
    }

    /// Load the configured model file. A failed load still yields a working
    /// predictor.
    pub fn from_config(config: &ModelConfig) -> Self {
        if config.disabled {
            debug!("model disabled by configuration");
            return Self::heuristic_only();
        }

        Self::new(LoadedModel::from_source(&JsonFileSource::new(&config.path)))
    }

    pub fn model(&self) -> &LoadedModel {
        &self.model
    }

    /// Informational message for callers when the model failed to load.
    pub fn model_error(&self) -> Option<&str> {
        self.model.error()
    }

    /// The raw ensemble mean, if it can be trusted.
    pub fn ensemble_score(&self, features: &FeatureVector) -> Option<f64> {
        let mean = self.model.forest()?.predict(features.as_slice())?;
        mean.is_finite().then_some(mean)
    }

    pub fn predict(&self, inputs: &StudentInputs) -> PredictionResult {
        let features = inputs.features();

        match self.ensemble_score(&features) {
            Some(mean) => PredictionResult::new(to_score(mean), ScoreSource::Ensemble),
            None => {
                debug!("no usable ensemble prediction, scoring heuristically");
                PredictionResult::new(heuristic_score(inputs), ScoreSource::Heuristic)
            }
        }
    }
}
