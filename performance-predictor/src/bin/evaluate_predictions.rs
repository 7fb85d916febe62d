use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::Context;

use performance_predictor::batch::evaluate_file;
use performance_predictor::config::PredictorConfig;
use performance_predictor::engine::Predictor;
use performance_predictor::evaluation::EvaluationLog;
use performance_predictor::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Labelled CSV file(s): `actual,predicted` pairs or input columns plus `actual`
    #[arg(short = 'i', long = "input", value_name = "INPUT_FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Model file, overrides PREDICTOR_MODEL_PATH
    #[arg(short = 'm', long = "model", value_name = "MODEL_FILE")]
    model: Option<PathBuf>,

    /// Ignore any model and use the heuristic formula
    #[arg(long)]
    heuristic_only: bool,

    /// Print the matrix and metrics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let mut config = PredictorConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(path) = &args.model {
        config.model.path = path.clone();
    }
    config.model.disabled |= args.heuristic_only;

    let predictor = Predictor::from_config(&config.model);
    let log = EvaluationLog::new();

    for input in &args.inputs {
        let summary = evaluate_file(input, &predictor, &log)
            .context(format!("Could not evaluate {}", input.display()))?;
        tracing::info!(
            file = %input.display(),
            rows = summary.rows,
            skipped = summary.skipped(),
            "evaluation file processed"
        );
    }

    let matrix = log.confusion_matrix();
    let metrics = matrix.metrics();

    if args.json {
        let report = serde_json::json!({
            "records": log.len(),
            "confusionMatrix": matrix.rows(),
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- Confusion matrix ({} records) ---\n{matrix}", log.len());
    println!("--- Metrics ---\n{metrics}");

    Ok(())
}
