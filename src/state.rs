use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::history::repo::{HistoryRepo, InMemoryHistoryRepo, PgHistoryRepo};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub history: Arc<dyn HistoryRepo>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let history = match &config.database_url {
            Some(url) => {
                let db = PgPoolOptions::new()
                    .max_connections(config.database_max_connections)
                    .connect(url)
                    .await
                    .context("connect to database")?;

                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    tracing::warn!(error = %e, "migration failed; continuing");
                }
                Arc::new(PgHistoryRepo::new(db)) as Arc<dyn HistoryRepo>
            }
            None => {
                tracing::warn!("DATABASE_URL not set; history is kept in memory only");
                Arc::new(InMemoryHistoryRepo::new()) as Arc<dyn HistoryRepo>
            }
        };

        Ok(Self::from_parts(config, history))
    }

    pub fn from_parts(config: Arc<AppConfig>, history: Arc<dyn HistoryRepo>) -> Self {
        Self { config, history }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            database_max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
        });
        Self::from_parts(config, Arc::new(InMemoryHistoryRepo::new()))
    }
}
