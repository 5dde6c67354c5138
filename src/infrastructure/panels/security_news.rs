#[cfg(test)]
#[path = "security_news_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;

use crate::domain::models::NewsItem;

pub const DEFAULT_URL: &str = "https://api.rss2json.com";

#[derive(Debug, Clone, Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    items: Vec<NewsItem>,
}

pub async fn fetch(url: &str, feed_url: &str) -> Result<Vec<NewsItem>> {
    let res = reqwest::Client::new()
        .get(format!("{url}/v1/api.json"))
        .query(&[("rss_url", feed_url)])
        .send()
        .await?;

    if !res.status().is_success() {
        tracing::error!(status = res.status().as_u16(), "rss2json request failed");
        bail!(format!("News API error: {}", res.status().as_u16()));
    }

    let payload = res.json::<FeedResponse>().await?;
    if payload.status != "ok" {
        bail!(format!("RSS service error: status {}", payload.status));
    }

    return Ok(payload.items);
}
