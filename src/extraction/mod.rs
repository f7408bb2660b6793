// src/extraction/mod.rs
use serde_json::Value;

pub mod cleaner;
pub mod model;
pub mod page;
pub mod prompt;

pub use cleaner::clean_model_output;
pub use model::{build_model_client, ModelClient, ModelProvider};
pub use page::{external_application_link, visible_text};
pub use prompt::{build_extraction_prompt, FIELD_NAMES};

/// Field map parsed from the model output. Not guaranteed to contain every
/// key; consumers substitute empty string for absent fields.
pub type ParsedFields = serde_json::Map<String, Value>;

/// Look up a field by name, falling back to empty string when the model
/// omitted it or returned null. Non-string values are kept as their JSON
/// rendering rather than dropped.
pub fn field_value(fields: &ParsedFields, name: &str) -> String {
    match fields.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_fallbacks() {
        let fields: ParsedFields = serde_json::from_value(json!({
            "Job Title": "SWE",
            "Salary": null,
            "Company": 42
        }))
        .unwrap();

        assert_eq!(field_value(&fields, "Job Title"), "SWE");
        assert_eq!(field_value(&fields, "Salary"), "");
        assert_eq!(field_value(&fields, "Location"), "");
        assert_eq!(field_value(&fields, "Company"), "42");
    }

    #[test]
    fn test_plain_text_output_is_not_parseable() {
        let cleaned = clean_model_output("not json at all");
        assert!(serde_json::from_str::<ParsedFields>(&cleaned).is_err());
    }
}
