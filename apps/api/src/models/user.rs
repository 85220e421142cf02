use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The slice of a user's data that drives job recommendations.
/// `latest_score` is the quiz score of the most recent assessment, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub skills: Vec<String>,
    pub industry: Option<String>,
    pub experience: Option<i32>,
    pub latest_score: Option<f64>,
}
