#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::ChatSession;
use super::CredentialStore;
use super::Scroll;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::NetworkInfo;
use crate::domain::models::NewsItem;
use crate::domain::models::PanelData;
use crate::domain::models::PanelKind;
use crate::domain::models::PanelState;
use crate::domain::models::Project;
use crate::domain::models::SlashCommand;

/// One-click prompts from the playground, bound to Alt+1..4.
pub const SUGGESTIONS: [&str; 4] = [
    "What free exhibitions are on in Taipei today?",
    "Translate this into Chinese: Hello from Taipei!",
    "Write a short poem about the metro",
    "Generate a picture of an astronaut riding a horse",
];

/// Suggested model ids. Any valid id is accepted by `/model`, these are just
/// the curated dropdown options the playground shipped with.
pub const MODEL_OPTIONS: [(&str, &str); 4] = [
    ("gemini-2.5-flash", "recommended"),
    ("gemini-2.5-pro", "advanced reasoning"),
    ("gemini-2.5-nano", "mobile and embedded"),
    ("gemini-2.0-flash", "legacy"),
];

pub fn help_text() -> String {
    let commands = r#"
COMMANDS:
- /model (/m) [MODEL_ID] - Switches the active model. Any valid Gemini model id works.
- /models (/ml) - Lists the suggested model options.
- /key (/k) [API_KEY] - Sets the Gemini API key for this session.
- /remember [on|off] - Toggles keeping the API key on disk for the next start.
- /help (/h) - Toggles this help menu.
- /quit /exit (/q) - Exit Parlor.

HOTKEYS:
- Up/Down arrow - Scroll the transcript
- PageUp/PageDown, CTRL+U/CTRL+D - Page the transcript
- Alt+1..4 - Send one of the suggestion prompts
- Esc - Dismiss the status bar, or close this help
- CTRL+C - Exit
    "#;

    let suggestions = SUGGESTIONS
        .iter()
        .enumerate()
        .map(|(idx, suggestion)| {
            let n = idx + 1;
            return format!("- (Alt+{n}) {suggestion}");
        })
        .collect::<Vec<String>>()
        .join("\n");

    return format!("{}\n\nSUGGESTIONS:\n{suggestions}", commands.trim());
}

pub struct AppState {
    pub session: ChatSession,
    pub credential: String,
    pub credentials: CredentialStore,
    pub network_info: PanelState<NetworkInfo>,
    pub projects: PanelState<Vec<Project>>,
    pub news: PanelState<Vec<NewsItem>>,
    pub scroll: Scroll,
    pub follow: bool,
    pub showing_help: bool,
    pub notice: Option<String>,
}

impl AppState {
    /// Builds the startup state and fires the three panel fetches. Each
    /// panel's request goes out exactly once, here.
    pub fn new(action_tx: &mpsc::UnboundedSender<Action>) -> Result<AppState> {
        let starter = Config::get(ConfigKey::Starter);
        let starter_opt = if starter.is_empty() {
            None
        } else {
            Some(starter.as_str())
        };
        let remember = Config::get(ConfigKey::RememberCredential) == "true";

        let app_state = AppState {
            session: ChatSession::new(&Config::get(ConfigKey::Model), starter_opt),
            credential: Config::get(ConfigKey::GeminiToken),
            credentials: CredentialStore::new(CredentialStore::default_dir(), remember),
            network_info: PanelState::Loading,
            projects: PanelState::Loading,
            news: PanelState::Loading,
            scroll: Scroll::default(),
            follow: true,
            showing_help: false,
            notice: None,
        };

        action_tx.send(Action::FetchPanel(PanelKind::NetworkInfo))?;
        action_tx.send(Action::FetchPanel(PanelKind::Projects))?;
        action_tx.send(Action::FetchPanel(PanelKind::SecurityNews))?;

        return Ok(app_state);
    }

    pub fn has_credential(&self) -> bool {
        return !self.credential.is_empty();
    }

    /// Hands a submission to the session and forwards the resulting request
    /// to the worker. Returns whether the input was consumed.
    pub fn submit(
        &mut self,
        text: Option<&str>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        let has_credential = self.has_credential();
        if let Some(context) = self.session.submit(text, has_credential) {
            tx.send(Action::GenerateRequest(context))?;
            self.follow = true;
            return Ok(true);
        }

        return Ok(false);
    }

    pub fn submit_suggestion(
        &mut self,
        number: u8,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        let idx = usize::from(number).saturating_sub(1);
        if idx >= SUGGESTIONS.len() {
            return Ok(false);
        }

        return self.submit(Some(SUGGESTIONS[idx]), tx);
    }

    pub fn handle_generation_completed(&mut self, reply: Option<String>) {
        self.session.complete(reply);
        self.follow = true;
    }

    pub fn handle_generation_failed(&mut self, message: &str) {
        self.session.fail(message);
    }

    pub fn handle_panel_loaded(&mut self, kind: PanelKind, result: Result<PanelData, String>) {
        match (kind, result) {
            (PanelKind::NetworkInfo, Ok(PanelData::NetworkInfo(info))) => {
                self.network_info = PanelState::Populated(info);
            }
            (PanelKind::Projects, Ok(PanelData::Projects(projects))) => {
                self.projects = PanelState::Populated(projects);
            }
            (PanelKind::SecurityNews, Ok(PanelData::SecurityNews(items))) => {
                self.news = PanelState::Populated(items);
            }
            (PanelKind::NetworkInfo, Err(message)) => {
                self.network_info = PanelState::Failed(message);
            }
            (PanelKind::Projects, Err(message)) => {
                self.projects = PanelState::Failed(message);
            }
            (PanelKind::SecurityNews, Err(message)) => {
                self.news = PanelState::Failed(message);
            }
            _ => (),
        }
    }

    pub async fn handle_command(&mut self, command: &SlashCommand) -> Result<()> {
        if command.is_help() {
            self.showing_help = !self.showing_help;
            return Ok(());
        }

        if command.is_model_list() {
            let listing = MODEL_OPTIONS
                .iter()
                .map(|(id, hint)| {
                    return format!("{id} ({hint})");
                })
                .collect::<Vec<String>>()
                .join(", ");
            self.notice = Some(format!("Models: {listing}"));
            return Ok(());
        }

        if command.is_model_set() {
            if command.args.is_empty() {
                self.notice = Some("Usage: /model MODEL_ID".to_string());
                return Ok(());
            }

            let model = command.args[0].to_string();
            self.session.set_model(&model);
            Config::set(ConfigKey::Model, &model);
            self.notice = Some(format!("{model} has entered the chat."));
            return Ok(());
        }

        if command.is_key_set() {
            let value = command.args.join(" ").trim().to_string();
            self.credential = value.to_string();
            Config::set(ConfigKey::GeminiToken, &value);
            self.credentials.on_credential_change(&value).await?;
            self.session.clear_error();
            if value.is_empty() {
                self.notice = Some("API key cleared.".to_string());
            } else {
                self.notice = Some("API key updated.".to_string());
            }
            return Ok(());
        }

        if command.is_remember() {
            let enabled = command
                .args
                .first()
                .map(|arg| {
                    return arg != "off";
                })
                .unwrap_or(true);
            Config::set(ConfigKey::RememberCredential, &enabled.to_string());
            self.credentials
                .set_persistence(enabled, &self.credential)
                .await?;
            if enabled {
                self.notice = Some("API key will be remembered on this machine.".to_string());
            } else {
                self.notice =
                    Some("API key forgotten. It stays in memory for this session only.".to_string());
            }
            return Ok(());
        }

        return Ok(());
    }

    /// Esc handler: closes help first, then the status bar.
    pub fn dismiss(&mut self) {
        if self.showing_help {
            self.showing_help = false;
            return;
        }

        self.session.clear_error();
        self.notice = None;
    }

    /// The status bar line, errors taking precedence over notices. The
    /// boolean marks an error.
    pub fn status_line(&self) -> Option<(String, bool)> {
        if let Some(error) = self.session.error() {
            return Some((format!("Error: {error}"), true));
        }
        if let Some(notice) = &self.notice {
            return Some((notice.to_string(), false));
        }

        return None;
    }

    pub fn scroll_up(&mut self) {
        self.follow = false;
        self.scroll.up();
    }

    pub fn scroll_down(&mut self) {
        self.follow = false;
        self.scroll.down();
    }

    pub fn scroll_page_up(&mut self) {
        self.follow = false;
        self.scroll.up_page();
    }

    pub fn scroll_page_down(&mut self) {
        self.follow = false;
        self.scroll.down_page();
    }
}
