#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use dashmap::DashMap;
use once_cell::sync::Lazy;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    FeedUrl,
    GeminiToken,
    GithubUser,
    Model,
    RememberCredential,
    Starter,
    Username,
}

impl ConfigKey {
    pub fn default_value(&self) -> &'static str {
        match self {
            ConfigKey::FeedUrl => return "https://feeds.feedburner.com/TheHackersNews",
            ConfigKey::GithubUser => return "leo5358",
            ConfigKey::Model => return "gemini-2.5-flash",
            ConfigKey::RememberCredential => return "true",
            ConfigKey::Username => return "You",
            _ => return "",
        }
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return key.default_value().to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }
}
