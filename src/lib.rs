pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;
use tracing::info;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use db::{DbOperations, Repository, Todo, User};

/// Application state shared across all workers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(config: Settings, store: Arc<dyn Repository>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Connects the pool and makes sure the schema exists before any request is served.
    pub async fn connect(config: Settings) -> Result<Self> {
        let db = DbOperations::new_with_options(
            &config.database.url,
            config.database.max_connections,
            config.database.acquire_timeout(),
        )
        .await?;
        info!("Connected to database");

        db.init_schema().await?;

        Ok(Self::new(config, Arc::new(db)))
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.store.close().await;
        Ok(())
    }
}
