mod datasets;
mod helpers;

mod batch_evaluation;
mod model_loading;
mod prediction;
