// src/sheets/client.rs
//! Thin Google Sheets client: resolve a spreadsheet by name through the
//! Drive API, pick its first worksheet, append one row of values.

use super::auth::{fetch_access_token, ServiceAccountKey};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const DRIVE_FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct SheetsClient {
    client: reqwest::Client,
    access_token: String,
}

/// A spreadsheet resolved by name, pinned to its first worksheet.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub spreadsheet_id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

impl SheetsClient {
    /// Authenticate with the service-account key file.
    pub async fn connect(service_account_file: &Path) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        let key = ServiceAccountKey::load(service_account_file).await?;
        let access_token = fetch_access_token(&client, &key).await?;

        Ok(Self {
            client,
            access_token,
        })
    }

    /// Resolve a spreadsheet by its Drive file name and return its first
    /// worksheet, mirroring an open-by-name / first-sheet flow.
    pub async fn open_first_worksheet(&self, sheet_name: &str) -> Result<Worksheet> {
        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            sheet_name.replace('\'', "\\'"),
            SPREADSHEET_MIME_TYPE
        );

        let response = self
            .client
            .get(DRIVE_FILES_ENDPOINT)
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "10"),
            ])
            .send()
            .await
            .context("Failed to search Drive for spreadsheet")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Drive search failed with status {}: {}", status, error_text);
        }

        let listing: DriveFileList = response
            .json()
            .await
            .context("Failed to parse Drive search response")?;

        let file = listing
            .files
            .into_iter()
            .next()
            .with_context(|| format!("No spreadsheet named '{}' found", sheet_name))?;

        let title = self.first_sheet_title(&file.id).await?;
        info!("Opened spreadsheet '{}' (worksheet '{}')", file.name, title);

        Ok(Worksheet {
            spreadsheet_id: file.id,
            title,
        })
    }

    async fn first_sheet_title(&self, spreadsheet_id: &str) -> Result<String> {
        let url = format!("{}/{}", SHEETS_API_BASE, spreadsheet_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await
            .context("Failed to fetch spreadsheet metadata")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!(
                "Spreadsheet metadata request failed with status {}: {}",
                status,
                error_text
            );
        }

        let meta: SpreadsheetMeta = response
            .json()
            .await
            .context("Failed to parse spreadsheet metadata")?;

        meta.sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .context("Spreadsheet has no worksheets")
    }

    /// Append one row of string cells after the worksheet's existing data.
    pub async fn append_row(&self, worksheet: &Worksheet, row: &[String]) -> Result<()> {
        let range = format!("'{}'!A1", worksheet.title.replace('\'', "''"));
        let url = format!(
            "{}/{}/values/{}:append",
            SHEETS_API_BASE,
            worksheet.spreadsheet_id,
            urlencoding::encode(&range)
        );

        let payload = serde_json::json!({ "values": [row] });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&payload)
            .send()
            .await
            .context("Failed to append row to spreadsheet")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Sheet append failed with status {}: {}", status, error_text);
        }

        info!("Appended row to worksheet '{}'", worksheet.title);
        Ok(())
    }
}
