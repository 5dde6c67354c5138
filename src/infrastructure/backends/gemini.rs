#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::RequestContext;
use crate::domain::models::Turn;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<ContentPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionRequest {
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    // Flattens the first candidate's parts the way the official SDK's
    // `.text` accessor does.
    fn text(&self) -> Option<String> {
        let candidates = self.candidates.as_ref()?;
        let content = candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .map(|part| {
                return part.text.to_string();
            })
            .collect::<Vec<String>>()
            .join("");

        if text.is_empty() {
            return None;
        }

        return Some(text);
    }
}

fn to_wire(turns: &[Turn]) -> Vec<Content> {
    return turns
        .iter()
        .map(|turn| {
            return Content {
                role: turn.author.as_role().to_string(),
                parts: turn
                    .parts()
                    .iter()
                    .map(|text| {
                        return ContentPart {
                            text: text.to_string(),
                        };
                    })
                    .collect(),
            };
        })
        .collect();
}

pub struct Gemini {
    url: String,
    token: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: "https://generativelanguage.googleapis.com".to_string(),
            token: Config::get(ConfigKey::GeminiToken),
        };
    }
}

#[async_trait]
impl Backend for Gemini {
    #[allow(clippy::implicit_return)]
    async fn generate(&self, context: RequestContext) -> Result<Option<String>> {
        if self.token.is_empty() {
            bail!("Gemini API key is not set");
        }

        let req = CompletionRequest {
            contents: to_wire(&context.contents),
        };

        // No timeout on purpose. The original playground lets calls hang
        // until the platform gives up.
        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent?key={key}",
                url = self.url,
                model = context.model,
                key = self.token,
            ))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make generation request to Gemini"
            );
            bail!(format!(
                "Gemini request failed with status {}",
                res.status().as_u16()
            ));
        }

        let payload = res.json::<GenerateContentResponse>().await?;
        return Ok(payload.text());
    }
}
