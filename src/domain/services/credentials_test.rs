use std::env;
use std::path;

use anyhow::Result;

use super::CredentialStore;

fn test_dir(name: &str) -> path::PathBuf {
    return env::temp_dir().join(format!("parlor-credentials-{}-{}", name, std::process::id()));
}

#[tokio::test]
async fn it_round_trips_a_credential() -> Result<()> {
    let mut store = CredentialStore::new(test_dir("round-trip"), true);
    store.on_credential_change("abc123").await?;
    assert_eq!(store.load().await, Some("abc123".to_string()));

    store.set_persistence(false, "abc123").await?;
    assert_eq!(store.load().await, None);
    assert!(!store.remembering());

    return Ok(());
}

#[tokio::test]
async fn it_erases_when_the_credential_is_cleared() -> Result<()> {
    let store = CredentialStore::new(test_dir("cleared"), true);
    store.on_credential_change("abc123").await?;
    store.on_credential_change("").await?;
    assert_eq!(store.load().await, None);

    return Ok(());
}

#[tokio::test]
async fn it_persists_a_held_credential_when_enabled() -> Result<()> {
    let mut store = CredentialStore::new(test_dir("enabled"), false);
    store.on_credential_change("abc123").await?;
    assert_eq!(store.load().await, None);

    store.set_persistence(true, "abc123").await?;
    assert_eq!(store.load().await, Some("abc123".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_does_not_write_while_remember_is_off() -> Result<()> {
    let store = CredentialStore::new(test_dir("off"), false);
    store.on_credential_change("abc123").await?;
    assert_eq!(store.load().await, None);

    return Ok(());
}

#[tokio::test]
async fn it_loads_nothing_when_the_slot_was_never_written() {
    let store = CredentialStore::new(test_dir("missing"), true);
    assert_eq!(store.load().await, None);
}
