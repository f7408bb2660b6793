// src/extraction/prompt.rs
//! Extraction prompt shared by both model providers. The field names are
//! fixed and spelled exactly as downstream parsing expects them.

/// Spreadsheet field names, in column order.
pub const FIELD_NAMES: [&str; 8] = [
    "Job Title",
    "Company",
    "Location",
    "Work Mode",
    "Job Type",
    "Application Method",
    "Salary",
    "Special Note",
];

/// Build the instruction prompt around the first `truncation_limit`
/// characters of the page text. Truncation is character-based and may cut
/// mid-word.
pub fn build_extraction_prompt(job_text: &str, truncation_limit: usize) -> String {
    let snippet: String = job_text.chars().take(truncation_limit).collect();

    format!(
        r#"You are a helpful assistant. Extract the following fields from the entire page content of a LinkedIn job post:

- Job Title
- Company
- Location
- Work Mode (Remote/Hybrid)
- Job Type (Full-time/Part-time/Contract)
- Application Method (Easy Apply/External)
- Salary (if mentioned)
- Special Note (e.g. "Meet the hiring team", "reviewed by humans")

Return as JSON with keys:
"Job Title", "Company", "Location", "Work Mode", "Job Type", "Application Method", "Salary", "Special Note"

Job Description:
{}
"#,
        snippet
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_all_field_names_and_full_text() {
        let text = "Software Engineer at Acme Corp, Remote, Full-time, Easy Apply";
        let prompt = build_extraction_prompt(text, 10000);

        for field in FIELD_NAMES {
            assert!(prompt.contains(field), "missing field name: {}", field);
        }
        assert!(prompt.contains(text));
    }

    #[test]
    fn test_truncation_limit_is_respected() {
        let text = "x".repeat(500);
        let prompt = build_extraction_prompt(&text, 100);

        assert!(!prompt.contains(&"x".repeat(101)));
        assert!(prompt.contains(&"x".repeat(100)));
    }

    #[test]
    fn test_short_text_passes_through_unmodified() {
        let text = "short description";
        let prompt = build_extraction_prompt(text, 10000);
        assert!(prompt.contains(text));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "héllo wörld";
        let prompt = build_extraction_prompt(text, 5);
        assert!(prompt.contains("héllo"));
        assert!(!prompt.contains("wörld"));
    }
}
