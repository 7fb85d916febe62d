use std::fmt;

/// Number of entries in a [`FeatureVector`].
pub const NUM_FEATURES: usize = 8;

/// Positions of each input inside a [`FeatureVector`]. Pretrained models
/// address features by these indices, so the order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Feature {
    AttendancePercent = 0,
    StudyHoursPerWeek = 1,
    ParentEducationLevel = 2,
    IncomeLevel = 3,
    ExtracurricularScore = 4,
    ResourcesScore = 5,
    HasInternet = 6,
    HasTutoring = 7,
}

impl Feature {
    pub const ALL: [Feature; NUM_FEATURES] = [
        Feature::AttendancePercent,
        Feature::StudyHoursPerWeek,
        Feature::ParentEducationLevel,
        Feature::IncomeLevel,
        Feature::ExtracurricularScore,
        Feature::ResourcesScore,
        Feature::HasInternet,
        Feature::HasTutoring,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::AttendancePercent => "attendancePercent",
            Feature::StudyHoursPerWeek => "studyHoursPerWeek",
            Feature::ParentEducationLevel => "parentEducationLevel",
            Feature::IncomeLevel => "incomeLevel",
            Feature::ExtracurricularScore => "extracurricularScore",
            Feature::ResourcesScore => "resourcesScore",
            Feature::HasInternet => "hasInternet",
            Feature::HasTutoring => "hasTutoring",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Raw, unvalidated inputs describing one student.
///
/// Expected ranges are attendance 0-100 (percent), study hours 0-30 per
/// week, parent education 0-4, income 0-3, extracurricular 0-5 and
/// resources 0-5. Nothing here enforces them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInputs {
    pub attendance: f64,
    pub study_hours: f64,
    pub parent_education: f64,
    pub income: f64,
    pub extracurricular: f64,
    pub resources: f64,
    pub internet: bool,
    pub tutoring: bool,
}

impl StudentInputs {
    /// Every numeric input at 0 and both flags off.
    pub fn zeroed() -> Self {
        Self {
            attendance: 0.0,
            study_hours: 0.0,
            parent_education: 0.0,
            income: 0.0,
            extracurricular: 0.0,
            resources: 0.0,
            internet: false,
            tutoring: false,
        }
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::from(self)
    }
}

impl Default for StudentInputs {
    fn default() -> Self {
        Self {
            attendance: 90.0,
            study_hours: 12.0,
            parent_education: 2.0,
            income: 1.0,
            extracurricular: 4.0,
            resources: 3.0,
            internet: true,
            tutoring: false,
        }
    }
}

/// The eight model inputs in the order pretrained trees expect. See
/// [`Feature`] for the position of each value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
}

impl From<&StudentInputs> for FeatureVector {
    fn from(inputs: &StudentInputs) -> Self {
        Self([
            inputs.attendance,
            inputs.study_hours,
            inputs.parent_education,
            inputs.income,
            inputs.extracurricular,
            inputs.resources,
            flag(inputs.internet),
            flag(inputs.tutoring),
        ])
    }
}

impl AsRef<[f64]> for FeatureVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
