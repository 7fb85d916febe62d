//! Deterministic weighted-sum scoring, used whenever the ensemble can't
//! produce a usable prediction.
//!
//! Attendance dominates (at most 55 points) and study time follows (at most
//! 25). Parent education, income, extracurriculars and resources add up to 5
//! each, internet access adds 3 and tutoring adds 7.
//!
//! A NaN in any numeric input makes the raw score NaN, and a NaN raw score
//! scores 0. Infinities are ordinary out-of-range values and get clamped.

use crate::features::StudentInputs;

const ATTENDANCE_WEIGHT: f64 = 0.55;
const STUDY_WEIGHT: f64 = 25.0;
const STUDY_HOURS_CAP: f64 = 30.0;
const FACTOR_WEIGHT: f64 = 5.0;
const INTERNET_BONUS: f64 = 3.0;
const TUTORING_BONUS: f64 = 7.0;

/// Unclamped weighted sum of the inputs.
pub fn raw_score(inputs: &StudentInputs) -> f64 {
    // Only the upper end of study time is capped
    let study_impact = cap(inputs.study_hours, STUDY_HOURS_CAP) / STUDY_HOURS_CAP;

    let parent_edu = normalize(inputs.parent_education, 4.0);
    let income = normalize(inputs.income, 3.0);
    let extra = normalize(inputs.extracurricular, 5.0);
    let resources = normalize(inputs.resources, 5.0);

    inputs.attendance * ATTENDANCE_WEIGHT
        + study_impact * STUDY_WEIGHT
        + parent_edu * FACTOR_WEIGHT
        + income * FACTOR_WEIGHT
        + extra * FACTOR_WEIGHT
        + resources * FACTOR_WEIGHT
        + if inputs.internet { INTERNET_BONUS } else { 0.0 }
        + if inputs.tutoring { TUTORING_BONUS } else { 0.0 }
}

/// Score in `0..=100` for any inputs.
pub fn heuristic_score(inputs: &StudentInputs) -> u8 {
    to_score(raw_score(inputs))
}

/// Clamp into `0..=100` and round half up. NaN maps to 0.
pub fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 100.0).round() as u8
}

/// `f64::min` drops a NaN operand; this keeps it.
fn cap(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.min(max)
    }
}

fn normalize(value: f64, max: f64) -> f64 {
    value.clamp(0.0, max) / max
}
