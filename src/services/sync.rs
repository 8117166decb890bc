use anyhow::{bail, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::http::SyncClient;
use crate::store::FileStore;

/// Moves the whole document between the local file and the shared remote
/// endpoint. There is no merge: whichever side writes last wins, the same
/// contract the remote store itself has.
pub struct SyncService {
    config: AppConfig,
}

impl SyncService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, push: bool) -> Result<()> {
        let Ok(remote_url) = std::env::var("REMOTE_DATA_URL") else {
            bail!("REMOTE_DATA_URL is not set; remote sync is disabled");
        };
        let data_path =
            std::env::var("DATA_PATH").unwrap_or_else(|_| "golf_scores.json".to_string());

        let client = SyncClient::new(&remote_url, &self.config.sync)?;
        let file = FileStore::new(&data_path);

        if push {
            self.push(&client, &file).await
        } else {
            self.pull(&client, &file).await
        }
    }

    async fn pull(&self, client: &SyncClient, file: &FileStore) -> Result<()> {
        info!("Fetching remote document");
        let data = client.fetch_document().await?;
        info!(
            "Fetched {} season(s); overwriting {}",
            data.years.len(),
            file.path().display()
        );
        file.save(&data)?;
        info!("Pull complete");
        Ok(())
    }

    async fn push(&self, client: &SyncClient, file: &FileStore) -> Result<()> {
        let data = file.load()?;
        info!(
            "Pushing {} season(s) from {}",
            data.years.len(),
            file.path().display()
        );
        client.push_document(&data).await?;
        info!("Push complete");
        Ok(())
    }
}
