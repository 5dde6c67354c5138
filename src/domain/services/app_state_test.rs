use std::env;

use anyhow::Result;
use tokio::sync::mpsc;

use super::AppState;
use super::SUGGESTIONS;
use crate::domain::models::Action;
use crate::domain::models::NetworkInfo;
use crate::domain::models::PanelData;
use crate::domain::models::PanelKind;
use crate::domain::models::PanelState;
use crate::domain::models::SlashCommand;
use crate::domain::services::ChatSession;
use crate::domain::services::CredentialStore;
use crate::domain::services::Scroll;

fn test_app_state(name: &str, credential: &str) -> AppState {
    let data_dir = env::temp_dir().join(format!("parlor-app-state-{}-{}", name, std::process::id()));
    return AppState {
        session: ChatSession::new("gemini-2.5-flash", None),
        credential: credential.to_string(),
        credentials: CredentialStore::new(data_dir, true),
        network_info: PanelState::Loading,
        projects: PanelState::Loading,
        news: PanelState::Loading,
        scroll: Scroll::default(),
        follow: true,
        showing_help: false,
        notice: None,
    };
}

#[test]
fn it_sends_a_generation_request_on_submit() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = test_app_state("submit", "abc123");

    assert!(app_state.submit(Some("hello"), &tx)?);
    assert!(app_state.session.in_flight());

    match rx.try_recv()? {
        Action::GenerateRequest(context) => {
            assert_eq!(context.contents.len(), 2);
            assert_eq!(context.contents[1].text(), "hello");
        }
        _ => panic!("wrong action type"),
    }

    return Ok(());
}

#[test]
fn it_rejects_submissions_without_a_credential() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = test_app_state("no-credential", "");

    assert!(!app_state.submit(Some("hello"), &tx)?);
    assert!(rx.try_recv().is_err());
    assert_eq!(app_state.session.history().len(), 1);
    assert!(app_state.session.error().is_some());
    assert!(!app_state.session.in_flight());

    return Ok(());
}

#[test]
fn it_submits_suggestions_by_number() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = test_app_state("suggestion", "abc123");

    assert!(app_state.submit_suggestion(1, &tx)?);
    assert_eq!(app_state.session.history()[1].text(), SUGGESTIONS[0]);
    assert!(rx.try_recv().is_ok());

    assert!(!app_state.submit_suggestion(9, &tx)?);

    return Ok(());
}

#[test]
fn it_transitions_panels_to_populated() {
    let mut app_state = test_app_state("panel-ok", "");
    let info = NetworkInfo {
        ip: "203.0.113.7".to_string(),
        org: None,
        city: None,
        region: None,
        country: None,
    };

    app_state.handle_panel_loaded(PanelKind::NetworkInfo, Ok(PanelData::NetworkInfo(info)));
    assert!(matches!(
        app_state.network_info,
        PanelState::Populated(ref info) if info.ip == "203.0.113.7"
    ));
}

#[test]
fn it_transitions_panels_to_failed() {
    let mut app_state = test_app_state("panel-err", "");

    app_state.handle_panel_loaded(PanelKind::Projects, Err("GitHub API error: 404".to_string()));
    assert!(matches!(
        app_state.projects,
        PanelState::Failed(ref message) if message.contains("404")
    ));
}

#[test]
fn it_surfaces_generation_failures_in_the_status_line() {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = test_app_state("failure", "abc123");

    app_state.submit(Some("hello"), &tx).unwrap();
    app_state.handle_generation_failed("Gemini request failed with status 500");

    let (message, is_error) = app_state.status_line().unwrap();
    assert!(is_error);
    assert!(message.contains("500"));

    app_state.dismiss();
    assert!(app_state.status_line().is_none());
}

#[tokio::test]
async fn it_switches_models_via_command() -> Result<()> {
    let mut app_state = test_app_state("model", "abc123");
    let command = SlashCommand::parse("/model gemini-2.5-pro").unwrap();

    app_state.handle_command(&command).await?;
    assert_eq!(app_state.session.model(), "gemini-2.5-pro");
    assert!(app_state.notice.is_some());

    return Ok(());
}

#[tokio::test]
async fn it_updates_and_persists_the_credential_via_command() -> Result<()> {
    let mut app_state = test_app_state("key", "");
    let command = SlashCommand::parse("/key abc123").unwrap();

    app_state.handle_command(&command).await?;
    assert_eq!(app_state.credential, "abc123");
    assert_eq!(app_state.credentials.load().await, Some("abc123".to_string()));

    let forget = SlashCommand::parse("/remember off").unwrap();
    app_state.handle_command(&forget).await?;
    assert_eq!(app_state.credentials.load().await, None);
    assert_eq!(app_state.credential, "abc123");

    return Ok(());
}

#[tokio::test]
async fn it_toggles_help_via_command() -> Result<()> {
    let mut app_state = test_app_state("help", "");
    let command = SlashCommand::parse("/help").unwrap();

    app_state.handle_command(&command).await?;
    assert!(app_state.showing_help);

    app_state.dismiss();
    assert!(!app_state.showing_help);

    return Ok(());
}
