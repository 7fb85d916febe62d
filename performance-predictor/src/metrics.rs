use std::fmt;

use crate::classification::GradeLabel;
use crate::evaluation::ConfusionMatrix;

const N: usize = GradeLabel::COUNT;

/// Unweighted means over all five grades.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct MacroAverages {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Classification quality derived from a [`ConfusionMatrix`].
///
/// Every ratio with a zero denominator is defined as `0.0`. Grades that were
/// never seen (neither actual nor predicted) therefore score `0.0` and still
/// count towards the macro averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precisions: [f64; N],
    pub recalls: [f64; N],
    pub f1s: [f64; N],
    #[serde(rename = "macro")]
    pub macro_avg: MacroAverages,
}

impl Metrics {
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let accuracy = ratio(matrix.correct(), matrix.total());

        let mut precisions = [0.0; N];
        let mut recalls = [0.0; N];
        let mut f1s = [0.0; N];

        for label in GradeLabel::ALL {
            let k = label.index();
            let tp = matrix.get(label, label);
            let fp = matrix.false_positives(label);
            let fn_ = matrix.false_negatives(label);

            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);

            precisions[k] = precision;
            recalls[k] = recall;
            f1s[k] = f1(precision, recall);
        }

        Self {
            accuracy,
            precisions,
            recalls,
            f1s,
            macro_avg: MacroAverages {
                precision: mean(&precisions),
                recall: mean(&recalls),
                f1: mean(&f1s),
            },
        }
    }

    pub fn precision(&self, label: GradeLabel) -> f64 {
        self.precisions[label.index()]
    }

    pub fn recall(&self, label: GradeLabel) -> f64 {
        self.recalls[label.index()]
    }

    pub fn f1(&self, label: GradeLabel) -> f64 {
        self.f1s[label.index()]
    }
}

impl From<&ConfusionMatrix> for Metrics {
    fn from(matrix: &ConfusionMatrix) -> Self {
        Self::from_matrix(matrix)
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {:.2}%", self.accuracy * 100.0)?;
        writeln!(f, "{:>6}{:>11}{:>9}{:>7}", "grade", "precision", "recall", "f1")?;
        for label in GradeLabel::ALL {
            writeln!(
                f,
                "{:>6}{:>11.3}{:>9.3}{:>7.3}",
                label,
                self.precision(label),
                self.recall(label),
                self.f1(label)
            )?;
        }
        writeln!(
            f,
            "{:>6}{:>11.3}{:>9.3}{:>7.3}",
            "macro", self.macro_avg.precision, self.macro_avg.recall, self.macro_avg.f1
        )
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn f1(precision: f64, recall: f64) -> f64 {
    let sum = precision + recall;
    if sum > 0.0 {
        2.0 * precision * recall / sum
    } else {
        0.0
    }
}

fn mean(values: &[f64; N]) -> f64 {
    values.iter().sum::<f64>() / N as f64
}
