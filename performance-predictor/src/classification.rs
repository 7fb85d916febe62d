use std::fmt;
use std::str::FromStr;

/// Letter grades, in the order used to index confusion matrices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum GradeLabel {
    A,
    B,
    C,
    D,
    F,
}

impl GradeLabel {
    pub const COUNT: usize = 5;

    pub const ALL: [GradeLabel; Self::COUNT] = [
        GradeLabel::A,
        GradeLabel::B,
        GradeLabel::C,
        GradeLabel::D,
        GradeLabel::F,
    ];

    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => GradeLabel::A,
            80.. => GradeLabel::B,
            70.. => GradeLabel::C,
            60.. => GradeLabel::D,
            _ => GradeLabel::F,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeLabel::A => "A",
            GradeLabel::B => "B",
            GradeLabel::C => "C",
            GradeLabel::D => "D",
            GradeLabel::F => "F",
        }
    }
}

impl fmt::Display for GradeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGrade(pub String);

impl fmt::Display for UnknownGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown grade label '{}', expected one of A, B, C, D, F", self.0)
    }
}

impl std::error::Error for UnknownGrade {}

impl FromStr for GradeLabel {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(GradeLabel::A),
            "B" | "b" => Ok(GradeLabel::B),
            "C" | "c" => Ok(GradeLabel::C),
            "D" | "d" => Ok(GradeLabel::D),
            "F" | "f" => Ok(GradeLabel::F),
            other => Err(UnknownGrade(other.to_string())),
        }
    }
}

/// Risk of underperformance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskLevel::Low,
            60.. => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which path produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Ensemble,
    Heuristic,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreSource::Ensemble => f.pad("ensemble"),
            ScoreSource::Heuristic => f.pad("heuristic"),
        }
    }
}

/// Tips shown next to every prediction.
pub const ADVICE: [&str; 3] = [
    "Increase weekly study time to improve the score.",
    "Maintain high attendance; it has the largest impact.",
    "Leverage school resources and consider tutoring support.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PredictionResult {
    pub score: u8,
    pub grade: GradeLabel,
    pub risk: RiskLevel,
    pub source: ScoreSource,
}

impl PredictionResult {
    pub fn new(score: u8, source: ScoreSource) -> Self {
        Self {
            score,
            grade: GradeLabel::from_score(score),
            risk: RiskLevel::from_score(score),
            source,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Based on your inputs, performance is predicted to be {}% (grade {}) with {} risk of underperformance.",
            self.score, self.grade, self.risk
        )
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} | Grade: {} | Risk: {} | Source: {}",
            self.score, self.grade, self.risk, self.source
        )
    }
}
