use anyhow::Result;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::PanelData;
use crate::domain::models::PanelKind;
use crate::infrastructure::backends::default_backend;
use crate::infrastructure::panels::network_info;
use crate::infrastructure::panels::projects;
use crate::infrastructure::panels::security_news;

async fn fetch_panel(kind: PanelKind) -> Result<PanelData> {
    match kind {
        PanelKind::NetworkInfo => {
            let info = network_info::fetch(network_info::DEFAULT_URL).await?;
            return Ok(PanelData::NetworkInfo(info));
        }
        PanelKind::Projects => {
            let repos =
                projects::fetch(projects::DEFAULT_URL, &Config::get(ConfigKey::GithubUser)).await?;
            return Ok(PanelData::Projects(repos));
        }
        PanelKind::SecurityNews => {
            let items =
                security_news::fetch(security_news::DEFAULT_URL, &Config::get(ConfigKey::FeedUrl))
                    .await?;
            return Ok(PanelData::SecurityNews(items));
        }
    }
}

/// Worker loop on the other side of the action channel. All outbound HTTP
/// happens here so the UI never blocks on the network.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                return Ok(());
            }

            let worker_tx = tx.clone();
            match action.unwrap() {
                Action::GenerateRequest(context) => {
                    // The backend is rebuilt per request so a key set with
                    // /key applies to the very next call.
                    tokio::spawn(async move {
                        match default_backend().generate(context).await {
                            Ok(reply) => {
                                let _ = worker_tx.send(Event::GenerationCompleted(reply));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "generation request failed");
                                let _ = worker_tx.send(Event::GenerationFailed(err.to_string()));
                            }
                        }
                    });
                }
                Action::FetchPanel(kind) => {
                    tokio::spawn(async move {
                        let result = fetch_panel(kind).await.map_err(|err| {
                            tracing::error!(error = ?err, panel = ?kind, "panel fetch failed");
                            return err.to_string();
                        });
                        let _ = worker_tx.send(Event::PanelLoaded(kind, result));
                    });
                }
            }
        }
    }
}
