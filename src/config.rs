// src/config.rs
//! Process-wide configuration, loaded once from the environment at startup
//! and passed by reference into each component.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_SHEET_NAME: &str = "job-tracker";
const DEFAULT_JOB_TEXT_LIMIT: usize = 10000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub sheet_name: String,
    pub service_account_file: PathBuf,
    /// How many characters of page text are embedded into the prompt.
    pub job_text_limit: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let gemini_api_key = env_opt("GEMINI_API_KEY");
        let openai_api_key = env_opt("OPENAI_API_KEY");

        let sheet_name =
            env_opt("GOOGLE_SHEET_NAME").unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());

        let service_account_file = std::env::var("SERVICE_ACCOUNT_FILE")
            .map_err(|_| anyhow::anyhow!("SERVICE_ACCOUNT_FILE environment variable not set"))?
            .into();

        let job_text_limit = match env_opt("JOB_TEXT_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("JOB_TEXT_LIMIT must be a number, got: {}", raw))?,
            None => DEFAULT_JOB_TEXT_LIMIT,
        };

        info!(
            "Loaded configuration: sheet '{}', text limit {}",
            sheet_name, job_text_limit
        );

        Ok(Self {
            gemini_api_key,
            openai_api_key,
            sheet_name,
            service_account_file,
            job_text_limit,
        })
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
