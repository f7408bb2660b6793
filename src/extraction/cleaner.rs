// src/extraction/cleaner.rs
//! Strips Markdown code-fence wrapping from raw model output so the payload
//! can be parsed as bare JSON.

use regex::Regex;

/// Remove fenced-code-block wrappers (optionally tagged `json`) from the
/// model output, keeping the fenced content, then trim. Input without a
/// fence is returned trimmed and otherwise unchanged. Every fenced wrapper
/// in the text is unwrapped, matching the original extraction behavior.
pub fn clean_model_output(raw: &str) -> String {
    let fence = Regex::new(r"```(?:json)?\n([\s\S]*?)```").expect("static fence pattern");
    fence.replace_all(raw, "$1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_tagged_fence() {
        let raw = "```json\n{\"Job Title\": \"SWE\", \"Company\": \"Acme\"}\n```";
        assert_eq!(
            clean_model_output(raw),
            "{\"Job Title\": \"SWE\", \"Company\": \"Acme\"}"
        );
    }

    #[test]
    fn test_strips_untagged_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(clean_model_output(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_plain_text_passes_through_trimmed() {
        assert_eq!(clean_model_output("  not json at all \n"), "not json at all");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let cleaned = clean_model_output("```json\n{\"a\": \"b\"}\n```");
        assert_eq!(clean_model_output(&cleaned), cleaned);
    }

    #[test]
    fn test_round_trip_for_json_payload() {
        let payload = serde_json::json!({"Job Title": "SWE", "Salary": "100k"}).to_string();
        let wrapped = format!("```json\n{}```", payload);
        assert_eq!(clean_model_output(&wrapped), payload);
    }

    #[test]
    fn test_multiple_fences_are_all_unwrapped() {
        let raw = "```json\nfirst\n```\nbetween\n```\nsecond\n```";
        assert_eq!(clean_model_output(raw), "first\n\nbetween\nsecond");
    }
}
