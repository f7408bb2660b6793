// src/sheets/mod.rs
use crate::extraction::{field_value, ParsedFields, FIELD_NAMES};

pub mod auth;
pub mod client;

pub use client::SheetsClient;

/// Calendar date of the extraction run, local time, no time component.
pub fn capture_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Compose the append-only sheet row: capture date, job URL, the eight
/// extracted fields in fixed column order, then the external link. Fields
/// the model omitted become empty cells.
pub fn compose_row(
    fields: &ParsedFields,
    job_url: &str,
    external_link: &str,
    capture_date: &str,
) -> Vec<String> {
    let mut row = Vec::with_capacity(FIELD_NAMES.len() + 3);
    row.push(capture_date.to_string());
    row.push(job_url.to_string());
    for name in FIELD_NAMES {
        row.push(field_value(fields, name));
    }
    row.push(external_link.to_string());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> ParsedFields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_compose_row_fixed_order() {
        let parsed = fields(json!({
            "Job Title": "SWE",
            "Company": "Acme",
            "Location": "Remote",
            "Work Mode": "Remote",
            "Job Type": "Full-time",
            "Application Method": "Easy Apply",
            "Salary": "100k",
            "Special Note": "Meet the hiring team"
        }));

        let row = compose_row(
            &parsed,
            "https://linkedin.example/jobs/1",
            "https://externalsite.example/apply",
            "2026-08-30",
        );

        assert_eq!(
            row,
            vec![
                "2026-08-30",
                "https://linkedin.example/jobs/1",
                "SWE",
                "Acme",
                "Remote",
                "Remote",
                "Full-time",
                "Easy Apply",
                "100k",
                "Meet the hiring team",
                "https://externalsite.example/apply",
            ]
        );
    }

    #[test]
    fn test_compose_row_missing_fields_become_empty() {
        let parsed = fields(json!({"Job Title": "SWE", "Company": "Acme"}));
        let row = compose_row(&parsed, "url", "", "2026-08-30");

        assert_eq!(row.len(), 11);
        assert_eq!(row[2], "SWE");
        assert_eq!(row[3], "Acme");
        for cell in &row[4..10] {
            assert_eq!(cell, "");
        }
        assert_eq!(row[10], "");
    }

    #[test]
    fn test_compose_row_empty_fields() {
        let parsed = fields(json!({}));
        let row = compose_row(&parsed, "url", "link", "2026-08-30");

        assert_eq!(row[0], "2026-08-30");
        assert_eq!(row[1], "url");
        assert!(row[2..10].iter().all(|cell| cell.is_empty()));
        assert_eq!(row[10], "link");
    }

    #[test]
    fn test_fenced_model_output_becomes_row() {
        let raw = "```json\n{\"Job Title\": \"SWE\", \"Company\": \"Acme\"}\n```";
        let cleaned = crate::extraction::clean_model_output(raw);
        let parsed: ParsedFields = serde_json::from_str(&cleaned).unwrap();

        let row = compose_row(&parsed, "https://linkedin.example/jobs/1", "", "2026-08-30");
        assert_eq!(row[2], "SWE");
        assert_eq!(row[3], "Acme");
        assert!(row[4..10].iter().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_capture_date_format() {
        let date = capture_date();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
    }
}
