#[cfg(test)]
#[path = "projects_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::Project;

pub const DEFAULT_URL: &str = "https://api.github.com";

pub async fn fetch(url: &str, username: &str) -> Result<Vec<Project>> {
    // GitHub rejects requests without a User-Agent.
    let res = reqwest::Client::new()
        .get(format!("{url}/users/{username}/repos"))
        .query(&[("sort", "updated"), ("direction", "desc")])
        .header("User-Agent", concat!("parlor/", env!("CARGO_PKG_VERSION")))
        .send()
        .await?;

    if !res.status().is_success() {
        tracing::error!(
            status = res.status().as_u16(),
            username = username,
            "github request failed"
        );
        bail!(format!("GitHub API error: {}", res.status().as_u16()));
    }

    return Ok(res.json::<Vec<Project>>().await?);
}
