#[cfg(test)]
#[path = "network_info_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;

use crate::domain::models::NetworkInfo;

pub const DEFAULT_URL: &str = "https://ipinfo.io";

// ipinfo omits fields rather than sending nulls, so everything is optional
// here and normalized below.
#[derive(Debug, Clone, Deserialize)]
struct Payload {
    ip: Option<String>,
    org: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

pub async fn fetch(url: &str) -> Result<NetworkInfo> {
    let res = reqwest::Client::new()
        .get(format!("{url}/json"))
        .send()
        .await?;

    if !res.status().is_success() {
        tracing::error!(status = res.status().as_u16(), "ipinfo request failed");
        bail!(format!("IP API error: {}", res.status().as_u16()));
    }

    let payload = res.json::<Payload>().await?;
    match payload.ip {
        Some(ip) if !ip.is_empty() => {
            return Ok(NetworkInfo {
                ip,
                org: payload.org,
                city: payload.city,
                region: payload.region,
                country: payload.country,
            });
        }
        _ => bail!("IP API service error: response carried no IP"),
    }
}
