//! Recommendation prompt builder. Pure string formatting, no I/O.

use crate::llm_client::prompts::{fill_template, CURRENCY, JSON_ONLY_RULES, REGION};
use crate::models::user::Profile;

/// Number of suggestions requested per generation call.
pub const BATCH_SIZE: usize = 10;

/// Recommendation prompt template.
/// Replace: {region}, {batch_size}, {skills}, {industry}, {experience}, {score},
///          {currency}, {json_rules}
const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are an AI career advisor for {region}. Based on the user's profile below, generate exactly {batch_size} unique job role suggestions.
Return output as strict JSON: an array of objects.

User profile:
- Skills: {skills}
- Industry: {industry}
- Experience (years): {experience}
- Latest interview score: {score}

Each array element MUST have exactly these properties:
{
  "jobTitle": "string",
  "whyGoodFit": "string (one sentence)",
  "keySkills": ["skill1", "skill2"],
  "difficultyLevel": "Low|Medium|High",
  "salaryRange": "string ({currency} range, optional)"
}

Rules:
{json_rules}
- Provide diversified roles (entry, junior, mid) appropriate to the years of experience.
- Prefer {region}-relevant roles and salary ranges in {currency}."#;

/// Renders the recommendation request for a profile.
///
/// Deterministic: identical profiles always produce byte-identical prompts.
pub fn build_recommendation_prompt(profile: &Profile) -> String {
    let skills = if profile.skills.is_empty() {
        "None".to_string()
    } else {
        profile.skills.join(", ")
    };
    let industry = profile
        .industry
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("General");
    let experience = profile.experience.unwrap_or(0).max(0);
    let score = profile
        .latest_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Not Available".to_string());

    fill_template(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("region", REGION),
            ("batch_size", &BATCH_SIZE.to_string()),
            ("skills", &skills),
            ("industry", industry),
            ("experience", &experience.to_string()),
            ("score", &score),
            ("currency", CURRENCY),
            ("json_rules", JSON_ONLY_RULES),
        ],
    )
}
