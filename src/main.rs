// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use job_tracker::browser::fetch_rendered_html;
use job_tracker::config::AppConfig;
use job_tracker::extraction::{
    build_extraction_prompt, build_model_client, clean_model_output, external_application_link,
    visible_text, ModelProvider, ParsedFields,
};
use job_tracker::sheets::{capture_date, compose_row, SheetsClient};
use scraper::Html;
use serde_json::Value;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobsheet")]
#[command(about = "Capture a LinkedIn job posting into a tracking spreadsheet")]
struct Cli {
    /// Job posting URL; prompted for interactively when omitted
    #[arg(long)]
    url: Option<String>,

    /// Model provider: gemini (default) or openai
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so interactive prompts and the parsed record stay
    // clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let url = match cli.url {
        Some(url) => url.trim().to_string(),
        None => prompt_line("Paste LinkedIn Job URL: ")?,
    };
    if url.is_empty() {
        anyhow::bail!("No job URL provided");
    }

    let choice = match cli.model {
        Some(choice) => choice,
        None => prompt_line("Which model do you want to use? [gemini/openai] (default: gemini): ")?,
    };
    let provider = ModelProvider::parse(&choice);

    // Provider selection happens once, before any network call.
    let model = build_model_client(provider, &config)?;

    let html = fetch_rendered_html(&url).await?;
    let (job_text, external_link) = {
        let document = Html::parse_document(&html);
        (
            visible_text(&document),
            external_application_link(&document),
        )
    };

    let prompt = build_extraction_prompt(&job_text, config.job_text_limit);
    let raw_output = model.extract(&prompt).await?;
    let cleaned = clean_model_output(&raw_output);

    let parsed: ParsedFields = match serde_json::from_str(&cleaned) {
        Ok(fields) => fields,
        Err(_) => {
            println!("Could not parse model output:");
            println!("{}", raw_output);
            std::process::exit(1);
        }
    };

    let mut echo = parsed.clone();
    echo.insert("Job URL".to_string(), Value::String(url.clone()));
    echo.insert(
        "External Link".to_string(),
        Value::String(external_link.clone()),
    );
    println!("{}", serde_json::to_string_pretty(&Value::Object(echo))?);

    let sheets = SheetsClient::connect(&config.service_account_file).await?;
    let worksheet = sheets.open_first_worksheet(&config.sheet_name).await?;
    let row = compose_row(&parsed, &url, &external_link, &capture_date());
    sheets.append_row(&worksheet, &row).await?;

    println!("Job info saved to Google Sheet.");
    Ok(())
}

fn prompt_line(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    Ok(input.trim().to_string())
}
