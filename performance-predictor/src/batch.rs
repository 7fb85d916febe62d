//! Batch evaluation of labelled CSV files.
//!
//! Two layouts are accepted, told apart by the header row:
//!
//! * `actual,predicted` — grades compared as given;
//! * the eight input columns (`attendance`, `studyHours`, `parentEducation`,
//!   `income`, `extracurricular`, `resources`, `internet`, `tutoring`) plus
//!   `actual` — each row is scored first, and its predicted grade compared.
//!
//! Rows whose labels are not grades are skipped, not rejected.

use std::io;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use serde::Deserialize;

use crate::engine::Predictor;
use crate::evaluation::EvaluationLog;
use crate::features::StudentInputs;

#[derive(Debug, Deserialize)]
struct LabelRow {
    actual: String,
    predicted: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InputRow {
    attendance: f64,
    study_hours: f64,
    parent_education: f64,
    income: f64,
    extracurricular: f64,
    resources: f64,
    internet: bool,
    tutoring: bool,
    actual: String,
}

impl InputRow {
    fn inputs(&self) -> StudentInputs {
        StudentInputs {
            attendance: self.attendance,
            study_hours: self.study_hours,
            parent_education: self.parent_education,
            income: self.income,
            extracurricular: self.extracurricular,
            resources: self.resources,
            internet: self.internet,
            tutoring: self.tutoring,
        }
    }
}

/// How many rows were read, and how many of them made it into the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub recorded: usize,
}

impl BatchSummary {
    pub fn skipped(&self) -> usize {
        self.rows - self.recorded
    }
}

pub fn evaluate_file(
    path: impl AsRef<Path>,
    predictor: &Predictor,
    log: &EvaluationLog,
) -> Result<BatchSummary> {
    let file = std::fs::File::open(path.as_ref())
        .context(format!("Could not open {}", path.as_ref().display()))?;
    evaluate_reader(file, predictor, log)
}

pub fn evaluate_reader<R: io::Read>(
    rdr: R,
    predictor: &Predictor,
    log: &EvaluationLog,
) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = rdr.headers().context("Could not read CSV header")?.clone();
    if !headers.iter().any(|h| h == "actual") {
        return Err(eyre!("Evaluation file needs an 'actual' column"));
    }

    let mut summary = BatchSummary::default();

    if headers.iter().any(|h| h == "predicted") {
        for result in rdr.deserialize() {
            let row: LabelRow = result.context("Malformed label row")?;
            summary.rows += 1;
            if log.record_raw(&row.actual, &row.predicted) {
                summary.recorded += 1;
            }
        }
    } else {
        for result in rdr.deserialize() {
            let row: InputRow = result.context("Malformed input row")?;
            summary.rows += 1;
            let prediction = predictor.predict(&row.inputs());
            if log.record_raw(&row.actual, prediction.grade.as_str()) {
                summary.recorded += 1;
            }
        }
    }

    Ok(summary)
}
