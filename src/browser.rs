// src/browser.rs
//! Headless Chrome page rendering. LinkedIn job pages fill in most of their
//! content client-side, so a plain HTTP fetch is not enough: the page is
//! loaded in a real browser and given a fixed delay to render before the
//! DOM is captured.

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures_util::StreamExt;
use std::time::Duration;
use tracing::{info, warn};

/// Fixed post-navigation delay; no polling or readiness condition.
const RENDER_WAIT: Duration = Duration::from_secs(5);

/// Load `url` in a headless Chrome session and return the rendered HTML.
///
/// The browser session is torn down on every exit path, including
/// navigation failures.
pub async fn fetch_rendered_html(url: &str) -> Result<String> {
    info!("Fetching job post: {}", url);

    let config = BrowserConfig::builder()
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {}", e))?;

    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .context("Failed to launch headless Chrome")?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                warn!("Browser handler error: {}", e);
            }
        }
    });

    let result = render_page(&browser, url).await;

    if let Err(e) = browser.close().await {
        warn!("Failed to close browser cleanly: {}", e);
    }
    let _ = browser.wait().await;
    handler_task.abort();

    result
}

async fn render_page(browser: &Browser, url: &str) -> Result<String> {
    let page = browser
        .new_page(url)
        .await
        .with_context(|| format!("Failed to navigate to {}", url))?;

    tokio::time::sleep(RENDER_WAIT).await;

    page.content()
        .await
        .context("Failed to capture rendered page content")
}
