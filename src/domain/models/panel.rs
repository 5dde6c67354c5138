#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Render caps, matching what fits the dashboard column.
pub const MAX_PROJECT_ENTRIES: usize = 6;
pub const MAX_NEWS_ENTRIES: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelKind {
    NetworkInfo,
    Projects,
    SecurityNews,
}

/// One-shot panel lifecycle. Each panel enters `Loading` once at startup and
/// settles into exactly one of the other two states. There is no refresh.
pub enum PanelState<T> {
    Loading,
    Populated(T),
    Failed(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkInfo {
    pub ip: String,
    pub org: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl NetworkInfo {
    /// ISP name with the leading AS number stripped. ipinfo returns strings
    /// like "AS3462 Chunghwa Telecom".
    pub fn organization(&self) -> String {
        if let Some(org) = &self.org {
            let name = org.split(' ').skip(1).collect::<Vec<&str>>().join(" ");
            if !name.is_empty() {
                return name;
            }
        }

        return "N/A".to_string();
    }

    pub fn location(&self) -> String {
        let fallback = "N/A".to_string();
        return format!(
            "{}, {}, {}",
            self.city.as_ref().unwrap_or(&fallback),
            self.region.as_ref().unwrap_or(&fallback),
            self.country.as_ref().unwrap_or(&fallback)
        );
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
}

impl Project {
    pub fn blurb(&self) -> String {
        if let Some(description) = &self.description {
            return description.to_string();
        }

        return "See the repository for details.".to_string();
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewsItem {
    pub guid: String,
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

impl NewsItem {
    /// rss2json dates come back as "2024-05-01 08:30:00". Falls back to the
    /// raw string should the service ever change format.
    pub fn published(&self) -> String {
        if let Ok(date) = NaiveDateTime::parse_from_str(&self.pub_date, "%Y-%m-%d %H:%M:%S") {
            return date.format("%Y-%m-%d").to_string();
        }

        return self.pub_date.to_string();
    }
}

pub enum PanelData {
    NetworkInfo(NetworkInfo),
    Projects(Vec<Project>),
    SecurityNews(Vec<NewsItem>),
}
