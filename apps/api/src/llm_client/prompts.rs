// Shared prompt fragments.
// Each service that needs generation calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Output rules appended to every prompt that expects machine-readable JSON.
pub const JSON_ONLY_RULES: &str = "\
- Output must be valid JSON only.
- Do NOT use markdown code fences.
- Do NOT include any commentary before or after the JSON.";

/// Region the product serves. Drives role selection and salary currency.
pub const REGION: &str = "India";

/// Currency salaries are quoted in.
pub const CURRENCY: &str = "INR";

/// Fills `{name}` placeholders in one pass over `template`.
///
/// Substituted values are never re-scanned, so user text containing braces is
/// inserted verbatim. Unknown `{...}` sequences (JSON examples) are left alone.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replacement = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match replacement {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
