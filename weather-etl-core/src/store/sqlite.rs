use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{path::Path, str::FromStr};
use tracing::debug;

use crate::{error::EtlResult, model::WeatherRecord};

use super::{CREATE_TABLE, SELECT_ALL, UPSERT, WeatherStore, bind_record};

/// `weather_data` in a SQLite file, created on first use.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> EtlResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Self::connect_with(options).await
    }

    pub async fn open(path: &Path) -> EtlResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect_with(options).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> EtlResult<Self> {
        // One connection: an in-memory database only lives as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl WeatherStore for SqliteStore {
    async fn ensure_schema(&self) -> EtlResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn upsert_all(&self, records: &[WeatherRecord]) -> EtlResult<()> {
        let mut tx = self.pool.begin().await?;

        for record in records {
            bind_record!(sqlx::query(UPSERT), record)
                .execute(&mut *tx)
                .await?;
            debug!(city = %record.city, "upserted weather row");
        }

        tx.commit().await?;
        Ok(())
    }

    async fn fetch_all(&self) -> EtlResult<Vec<WeatherRecord>> {
        let rows = sqlx::query_as::<_, WeatherRecord>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
