//! Study-notes prompt.

use crate::llm_client::prompts::fill_template;

/// Notes prompt template. Replace `{topic}` before sending.
const NOTES_PROMPT_TEMPLATE: &str = r#"Generate short and simple study notes on the topic: "{topic}".

Follow this exact format:
- Use numbered sections (1, 1.1, 1.2, etc.)
- Include bullet points only under sub-points
- Use simple and short explanation sentences
- Include at least two working code examples or real world examples
- Use bold for headings only
- Keep notes beginner- and intermediate-friendly

Example format:
1. **Main Concept**
    1.1 Sub Concept (short explanation)
    • Key bullet points
    1.2 Sub Concept (short explanation)
    • Key bullet points

2. **Second Concept**
    2.1 Sub Concept
    • Points here

Generate notes below:"#;

pub fn build_notes_prompt(topic: &str) -> String {
    fill_template(NOTES_PROMPT_TEMPLATE, &[("topic", topic)])
}
