use std::fmt;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info};

use crate::classification::GradeLabel;
use crate::metrics::Metrics;

const N: usize = GradeLabel::COUNT;

/// One user-confirmed comparison between the actual and the predicted grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EvaluationRecord {
    pub actual: GradeLabel,
    pub predicted: GradeLabel,
}

impl EvaluationRecord {
    pub fn new(actual: GradeLabel, predicted: GradeLabel) -> Self {
        Self { actual, predicted }
    }

    /// Parse both labels. `None` if either is not a known grade.
    pub fn parse(actual: &str, predicted: &str) -> Option<Self> {
        Some(Self::new(actual.parse().ok()?, predicted.parse().ok()?))
    }
}

/// Counts of (actual, predicted) pairs. Rows are indexed by the actual grade
/// and columns by the predicted grade, both in `A, B, C, D, F` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ConfusionMatrix {
    counts: [[u64; N]; N],
}

impl ConfusionMatrix {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a EvaluationRecord>) -> Self {
        let mut matrix = Self::default();
        for record in records {
            matrix.counts[record.actual.index()][record.predicted.index()] += 1;
        }
        matrix
    }

    /// Fold raw label pairs, silently skipping any pair with a label outside
    /// the grade set.
    pub fn from_label_pairs<A, P>(pairs: impl IntoIterator<Item = (A, P)>) -> Self
    where
        A: AsRef<str>,
        P: AsRef<str>,
    {
        let records = pairs
            .into_iter()
            .filter_map(|(a, p)| EvaluationRecord::parse(a.as_ref(), p.as_ref()))
            .collect::<Vec<_>>();
        Self::from_records(&records)
    }

    pub fn get(&self, actual: GradeLabel, predicted: GradeLabel) -> u64 {
        self.counts[actual.index()][predicted.index()]
    }

    pub fn rows(&self) -> &[[u64; N]; N] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal.
    pub fn correct(&self) -> u64 {
        (0..N).map(|i| self.counts[i][i]).sum()
    }

    /// Times `label` was predicted when the actual grade was different.
    pub fn false_positives(&self, label: GradeLabel) -> u64 {
        let k = label.index();
        (0..N).filter(|&i| i != k).map(|i| self.counts[i][k]).sum()
    }

    /// Times the actual grade was `label` but something else was predicted.
    pub fn false_negatives(&self, label: GradeLabel) -> u64 {
        let k = label.index();
        (0..N).filter(|&i| i != k).map(|i| self.counts[k][i]).sum()
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::from_matrix(self)
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actual \\ predicted")?;
        for label in GradeLabel::ALL {
            write!(f, "{label:>6}")?;
        }
        writeln!(f)?;

        for label in GradeLabel::ALL {
            write!(f, "{label:>18}")?;
            for count in self.counts[label.index()] {
                write!(f, "{count:>6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Append-only log of evaluation records.
///
/// Writers are serialized by the lock. Readers copy the log under the read
/// lock and fold the copy, so every matrix reflects one consistent state.
#[derive(Debug, Default)]
pub struct EvaluationLog {
    records: RwLock<Vec<EvaluationRecord>>,
}

impl EvaluationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, actual: GradeLabel, predicted: GradeLabel) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(EvaluationRecord::new(actual, predicted));
    }

    /// Record a comparison given as raw labels. Pairs containing an unknown
    /// label are dropped and `false` is returned.
    pub fn record_raw(&self, actual: &str, predicted: &str) -> bool {
        match EvaluationRecord::parse(actual, predicted) {
            Some(record) => {
                self.record(record.actual, record.predicted);
                true
            }
            None => {
                debug!(actual, predicted, "skipping evaluation with unknown grade label");
                false
            }
        }
    }

    pub fn clear(&self) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        info!(cleared = records.len(), "evaluation log cleared");
        records.clear();
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the log in insertion order.
    pub fn snapshot(&self) -> Vec<EvaluationRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn confusion_matrix(&self) -> ConfusionMatrix {
        ConfusionMatrix::from_records(&self.snapshot())
    }

    pub fn metrics(&self) -> Metrics {
        self.confusion_matrix().metrics()
    }
}
