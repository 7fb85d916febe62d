use performance_predictor::features::StudentInputs;

/// Datapoints scored by hand against `test-models/forest_3.json`
#[derive(serde::Deserialize, Debug)]
pub(crate) struct DataPoint {
    pub attendance: f64,
    #[serde(rename = "studyHours")]
    pub study_hours: f64,
    #[serde(rename = "parentEducation")]
    pub parent_education: f64,
    pub income: f64,
    pub extracurricular: f64,
    pub resources: f64,
    pub internet: u8,
    pub tutoring: u8,

    #[serde(rename = "Predicted")]
    pub forest_prediction: u8,
}

impl DataPoint {
    pub fn inputs(&self) -> StudentInputs {
        StudentInputs {
            attendance: self.attendance,
            study_hours: self.study_hours,
            parent_education: self.parent_education,
            income: self.income,
            extracurricular: self.extracurricular,
            resources: self.resources,
            internet: self.internet != 0,
            tutoring: self.tutoring != 0,
        }
    }
}
