use serde::{Deserialize, Serialize};

/// A job suggestion as received from the recommendation endpoint.
///
/// Every field is defaulted so a partially-populated item still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobCard {
    pub job_title: String,
    pub why_good_fit: String,
    pub key_skills: Vec<String>,
    pub difficulty_level: String,
    pub salary_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<String>,
}

impl JobCard {
    pub fn title_or_placeholder(&self) -> &str {
        if self.job_title.is_empty() {
            "Unknown Role"
        } else {
            &self.job_title
        }
    }

    pub fn difficulty_or_default(&self) -> &str {
        if self.difficulty_level.is_empty() {
            "Medium"
        } else {
            &self.difficulty_level
        }
    }
}

/// Body of a save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobRequest {
    pub job_title: String,
    pub reason: String,
    pub key_skills: Vec<String>,
    pub salary_range: String,
}

impl From<&JobCard> for SaveJobRequest {
    fn from(job: &JobCard) -> Self {
        Self {
            job_title: job.job_title.clone(),
            reason: job.why_good_fit.clone(),
            key_skills: job.key_skills.clone(),
            salary_range: job.salary_range.clone(),
        }
    }
}
