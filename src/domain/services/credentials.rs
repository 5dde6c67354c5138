#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

const CREDENTIAL_FILE: &str = "gemini-api-key";

/// Bridges the in-memory credential to the single durable slot on disk,
/// standing in for the fixed localStorage key the web playground used.
pub struct CredentialStore {
    data_dir: path::PathBuf,
    remember: bool,
}

impl Default for CredentialStore {
    fn default() -> CredentialStore {
        return CredentialStore::new(CredentialStore::default_dir(), true);
    }
}

impl CredentialStore {
    pub fn new(data_dir: path::PathBuf, remember: bool) -> CredentialStore {
        return CredentialStore { data_dir, remember };
    }

    pub fn default_dir() -> path::PathBuf {
        return dirs::data_dir().unwrap().join("parlor");
    }

    pub fn remembering(&self) -> bool {
        return self.remember;
    }

    fn file_path(&self) -> path::PathBuf {
        return self.data_dir.join(CREDENTIAL_FILE);
    }

    pub async fn load(&self) -> Option<String> {
        let value = fs::read_to_string(self.file_path()).await.ok()?;
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }

        return Some(trimmed);
    }

    /// Flips the remember toggle. Turning it off erases the stored value
    /// immediately; turning it on persists the currently held credential.
    pub async fn set_persistence(&mut self, enabled: bool, credential: &str) -> Result<()> {
        self.remember = enabled;
        return self.write_through(credential).await;
    }

    /// Called on every credential edit so the durable slot always mirrors
    /// the held value.
    pub async fn on_credential_change(&self, credential: &str) -> Result<()> {
        return self.write_through(credential).await;
    }

    // Both mutation sites funnel through here.
    async fn write_through(&self, credential: &str) -> Result<()> {
        if !self.remember || credential.is_empty() {
            return self.erase().await;
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).await?;
        }

        let mut file = fs::File::create(self.file_path()).await?;
        file.write_all(credential.as_bytes()).await?;

        return Ok(());
    }

    async fn erase(&self) -> Result<()> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }
}
