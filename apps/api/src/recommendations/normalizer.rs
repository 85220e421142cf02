//! Suggestion normalizer: turns raw generation output into canonical `JobSuggestion`s.
//!
//! Models drift between key-naming conventions (camelCase, snake_case, short aliases),
//! so every canonical field is resolved through an ordered alias table, first non-null
//! match wins. Individual items never fail: missing or mistyped fields fall back to
//! defaults. Only unparseable JSON or a non-array top level is an error.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm_client::strip_code_fences;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON array (found {0})")]
    NotAnArray(&'static str),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DifficultyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl DifficultyLevel {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Canonical job suggestion. Every field is always present on the wire;
/// `location` and `work_mode` are only emitted when the model supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub job_title: String,
    pub why_good_fit: String,
    pub key_skills: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    pub salary_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<String>,
}

const JOB_TITLE_KEYS: &[&str] = &["jobTitle", "job_title", "title"];
const WHY_GOOD_FIT_KEYS: &[&str] = &["whyGoodFit", "why_good_fit", "reason"];
const KEY_SKILLS_KEYS: &[&str] = &["keySkills", "key_skills"];
const DIFFICULTY_KEYS: &[&str] = &["difficultyLevel", "difficulty_level", "difficulty"];
const SALARY_KEYS: &[&str] = &["salaryRange", "salary_range", "salary"];
const LOCATION_KEYS: &[&str] = &["location"];
const WORK_MODE_KEYS: &[&str] = &["workMode", "work_mode"];

/// Parses raw generation output into a recommendation batch.
pub fn normalize_suggestions(raw: &str) -> Result<Vec<JobSuggestion>, NormalizeError> {
    let cleaned = strip_code_fences(raw);
    let parsed: Value = serde_json::from_str(&cleaned)?;

    let items = match parsed {
        Value::Array(items) => items,
        other => return Err(NormalizeError::NotAnArray(json_kind(&other))),
    };

    Ok(items
        .iter()
        .enumerate()
        .map(|(i, item)| normalize_item(i, item))
        .collect())
}

fn normalize_item(index: usize, item: &Value) -> JobSuggestion {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    JobSuggestion {
        job_title: resolve_string(fields, JOB_TITLE_KEYS)
            .unwrap_or_else(|| format!("Role {}", index + 1)),
        why_good_fit: resolve_string(fields, WHY_GOOD_FIT_KEYS).unwrap_or_default(),
        key_skills: resolve_skills(fields),
        difficulty_level: resolve_string(fields, DIFFICULTY_KEYS)
            .and_then(|d| DifficultyLevel::parse(&d))
            .unwrap_or_default(),
        salary_range: resolve_string(fields, SALARY_KEYS).unwrap_or_default(),
        location: resolve_string(fields, LOCATION_KEYS),
        work_mode: resolve_string(fields, WORK_MODE_KEYS),
    }
}

/// First alias whose value is non-null. Scalars are stringified; objects and
/// arrays are not text and count as absent.
fn resolve_string(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let value = first_present(fields, keys)?;
    scalar_to_string(value)
}

/// First alias holding an array; a mistyped `keySkills` falls through to `key_skills`.
fn resolve_skills(fields: &Map<String, Value>) -> Vec<String> {
    KEY_SKILLS_KEYS
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_array))
        .map(|skills| skills.iter().filter_map(scalar_to_string).collect())
        .unwrap_or_default()
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_items_pass_through() {
        let raw = r#"[{
            "jobTitle": "Frontend Developer",
            "whyGoodFit": "Strong React background.",
            "keySkills": ["React", "CSS"],
            "difficultyLevel": "Low",
            "salaryRange": "4-6 LPA"
        }]"#;
        let batch = normalize_suggestions(raw).unwrap();
        assert_eq!(
            batch,
            vec![JobSuggestion {
                job_title: "Frontend Developer".into(),
                why_good_fit: "Strong React background.".into(),
                key_skills: vec!["React".into(), "CSS".into()],
                difficulty_level: DifficultyLevel::Low,
                salary_range: "4-6 LPA".into(),
                location: None,
                work_mode: None,
            }]
        );
    }

    #[test]
    fn test_snake_case_batch_of_ten_defaults_missing_difficulty() {
        let items: Vec<String> = (0..10)
            .map(|i| {
                format!(
                    r#"{{"job_title": "Role {i} Engineer", "why_good_fit": "fit {i}", "key_skills": ["React"], "salary_range": "{i} LPA"}}"#
                )
            })
            .collect();
        let raw = format!("[{}]", items.join(","));

        let batch = normalize_suggestions(&raw).unwrap();
        assert_eq!(batch.len(), 10);
        for (i, job) in batch.iter().enumerate() {
            assert_eq!(job.job_title, format!("Role {i} Engineer"));
            assert_eq!(job.why_good_fit, format!("fit {i}"));
            assert_eq!(job.key_skills, vec!["React".to_string()]);
            assert_eq!(job.difficulty_level, DifficultyLevel::Medium);
            assert_eq!(job.salary_range, format!("{i} LPA"));
        }
    }

    #[test]
    fn test_short_aliases_are_accepted() {
        let raw = r#"[{"title": "QA Analyst", "reason": "Detail oriented", "difficulty": "high", "salary": "3-5 LPA"}]"#;
        let job = &normalize_suggestions(raw).unwrap()[0];
        assert_eq!(job.job_title, "QA Analyst");
        assert_eq!(job.why_good_fit, "Detail oriented");
        assert_eq!(job.difficulty_level, DifficultyLevel::High);
        assert_eq!(job.salary_range, "3-5 LPA");
    }

    #[test]
    fn test_alias_priority_prefers_camel_case() {
        let raw = r#"[{"title": "short", "job_title": "snake", "jobTitle": "camel"}]"#;
        assert_eq!(normalize_suggestions(raw).unwrap()[0].job_title, "camel");
    }

    #[test]
    fn test_null_value_falls_through_to_next_alias() {
        let raw = r#"[{"jobTitle": null, "job_title": "Data Analyst"}]"#;
        assert_eq!(normalize_suggestions(raw).unwrap()[0].job_title, "Data Analyst");
    }

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let batch = normalize_suggestions("[{}, {}]").unwrap();
        assert_eq!(batch[1].job_title, "Role 2");
        assert_eq!(batch[1].why_good_fit, "");
        assert!(batch[1].key_skills.is_empty());
        assert_eq!(batch[1].difficulty_level, DifficultyLevel::Medium);
        assert_eq!(batch[1].salary_range, "");
    }

    #[test]
    fn test_non_object_items_keep_batch_length() {
        let batch = normalize_suggestions(r#"["oops", 42, null, {"jobTitle": "SRE"}]"#).unwrap();
        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0].job_title, "Role 1");
        assert_eq!(batch[3].job_title, "SRE");
    }

    #[test]
    fn test_key_skills_not_a_sequence_becomes_empty() {
        let raw = r#"[{"keySkills": "React, Node"}]"#;
        assert!(normalize_suggestions(raw).unwrap()[0].key_skills.is_empty());
    }

    #[test]
    fn test_mistyped_camel_case_skills_fall_back_to_snake_case() {
        let raw = r#"[{"keySkills": "React, Node", "key_skills": ["React", "Node"]}]"#;
        assert_eq!(
            normalize_suggestions(raw).unwrap()[0].key_skills,
            vec!["React".to_string(), "Node".to_string()]
        );
    }

    #[test]
    fn test_unknown_difficulty_defaults_to_medium() {
        let raw = r#"[{"difficultyLevel": "Extreme"}]"#;
        assert_eq!(
            normalize_suggestions(raw).unwrap()[0].difficulty_level,
            DifficultyLevel::Medium
        );
    }

    #[test]
    fn test_numeric_salary_is_stringified() {
        let raw = r#"[{"salaryRange": 8}]"#;
        assert_eq!(normalize_suggestions(raw).unwrap()[0].salary_range, "8");
    }

    #[test]
    fn test_location_and_work_mode_are_carried_when_present() {
        let raw = r#"[{"jobTitle": "Dev", "location": "Pune, India", "work_mode": "hybrid"}]"#;
        let job = &normalize_suggestions(raw).unwrap()[0];
        assert_eq!(job.location.as_deref(), Some("Pune, India"));
        assert_eq!(job.work_mode.as_deref(), Some("hybrid"));
    }

    #[test]
    fn test_fenced_empty_array_is_valid() {
        let batch = normalize_suggestions("```json\n[]\n```").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_object_top_level_is_rejected() {
        let err = normalize_suggestions(r#"{"jobs": []}"#).unwrap_err();
        assert!(matches!(err, NormalizeError::NotAnArray("object")));
    }

    #[test]
    fn test_prose_is_rejected() {
        let err = normalize_suggestions("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, NormalizeError::Json(_)));
    }

    #[test]
    fn test_serialized_suggestion_uses_camel_case_and_omits_absent_optionals() {
        let job = JobSuggestion {
            job_title: "Dev".into(),
            why_good_fit: String::new(),
            key_skills: vec![],
            difficulty_level: DifficultyLevel::High,
            salary_range: String::new(),
            location: None,
            work_mode: None,
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jobTitle": "Dev",
                "whyGoodFit": "",
                "keySkills": [],
                "difficultyLevel": "High",
                "salaryRange": ""
            })
        );
    }
}
