use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::roster::default_roster;
use crate::config::settings::AppConfig;
use crate::store::{FileStore, SeasonStore};

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let data_path =
            std::env::var("DATA_PATH").unwrap_or_else(|_| "golf_scores.json".to_string());
        let file = FileStore::new(&data_path);
        let data = file.load()?;
        info!(
            "Loaded {} season(s) from {}",
            data.years.len(),
            file.path().display()
        );

        let store = SeasonStore::new(
            data,
            default_roster(),
            self.config.ranking.min_participants,
        );
        let state = Arc::new(AppState {
            store: RwLock::new(store),
            file,
            config: self.config.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
