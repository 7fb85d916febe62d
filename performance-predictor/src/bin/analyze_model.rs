use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::Context;

use performance_predictor::config::PredictorConfig;
use performance_predictor::model::{JsonFileSource, ModelSource};
use performance_predictor::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model file, overrides PREDICTOR_MODEL_PATH
    #[arg(short = 'i', long = "input", value_name = "MODEL_FILE")]
    input: Option<PathBuf>,

    /// Print every tree root
    #[arg(short, long)]
    verbose: bool,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let config = PredictorConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let path = args.input.unwrap_or(config.model.path);
    let forest = JsonFileSource::new(&path)
        .load()
        .context("Could not analyze forest model")?;
    let stats = forest.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if args.verbose {
        println!("{forest}");
    }

    println!(
        "--- Forest model ---\nTrees: {} | Branches: {}, leaves: {}, missing nodes: {} | Max depth: {}\n--------------------",
        stats.trees, stats.branches, stats.leaves, stats.missing, stats.max_depth
    );

    if forest.is_empty() {
        println!("Model has no trees; predictions will use the heuristic formula.");
    } else if stats.missing > 0 {
        println!(
            "Model is usable, but {} missing node(s) evaluate to 0 when reached.",
            stats.missing
        );
    } else {
        println!("Model is usable.");
    }

    Ok(())
}
