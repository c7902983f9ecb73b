use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::debug;

use crate::{error::EtlResult, model::WeatherRecord};

use super::{CREATE_TABLE, SELECT_ALL, UPSERT, WeatherStore, bind_record};

/// `weather_data` in a PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn connect(database_url: &str) -> EtlResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl WeatherStore for PostgresStore {
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
