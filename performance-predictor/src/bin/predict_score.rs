use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::Result;

use performance_predictor::classification::ADVICE;
use performance_predictor::config::PredictorConfig;
use performance_predictor::engine::Predictor;
use performance_predictor::features::StudentInputs;
use performance_predictor::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Attendance percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    attendance: Option<f64>,

    /// Study hours per week (0-30)
    #[arg(long, allow_negative_numbers = true)]
    study_hours: Option<f64>,

    /// Parent education level (0 none - 4 postgraduate)
    #[arg(long, allow_negative_numbers = true)]
    parent_education: Option<f64>,

    /// Household income level (0 low - 3 high)
    #[arg(long, allow_negative_numbers = true)]
    income: Option<f64>,

    /// Extracurricular involvement (0-5)
    #[arg(long, allow_negative_numbers = true)]
    extracurricular: Option<f64>,

    /// Access to learning resources (0-5)
    #[arg(long, allow_negative_numbers = true)]
    resources: Option<f64>,

    /// Internet access at home
    #[arg(long, action = ArgAction::Set)]
    internet: Option<bool>,

    /// Tutoring support
    #[arg(long, action = ArgAction::Set)]
    tutoring: Option<bool>,

    /// Start from all-zero inputs instead of the default profile
    #[arg(long)]
    reset: bool,

    /// Model file, overrides PREDICTOR_MODEL_PATH
    #[arg(short = 'm', long = "model", value_name = "MODEL_FILE")]
    model: Option<PathBuf>,

    /// Ignore any model and use the heuristic formula
    #[arg(long)]
    heuristic_only: bool,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> StudentInputs {
        let base = if self.reset {
            StudentInputs::zeroed()
        } else {
            StudentInputs::default()
        };

        StudentInputs {
            attendance: self.attendance.unwrap_or(base.attendance),
            study_hours: self.study_hours.unwrap_or(base.study_hours),
            parent_education: self.parent_education.unwrap_or(base.parent_education),
            income: self.income.unwrap_or(base.income),
            extracurricular: self.extracurricular.unwrap_or(base.extracurricular),
            resources: self.resources.unwrap_or(base.resources),
            internet: self.internet.unwrap_or(base.internet),
            tutoring: self.tutoring.unwrap_or(base.tutoring),
        }
    }
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
    let result = predictor.predict(&args.inputs());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(err) = predictor.model_error() {
        println!("Model unavailable ({err}), using heuristic scoring.\n");
    }

    println!("{result}\n");
    println!("{}\n", result.summary());
    for tip in ADVICE {
        println!("  - {tip}");
    }

    Ok(())
}
