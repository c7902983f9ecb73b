//! One run of the job: fetch every city, normalize, upsert.

use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

use crate::{
    Config,
    config::RetryPolicy,
    error::EtlResult,
    provider::{self, WeatherSource},
    store, transform,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub stored: usize,
    pub captured_at: NaiveDateTime,
    pub attempts: u32,
}

#[derive(Debug)]
pub struct Pipeline {
    source: Box<dyn WeatherSource>,
    cities: Vec<String>,
    database_url: String,
}

impl Pipeline {
    pub fn new(
        source: Box<dyn WeatherSource>,
        cities: Vec<String>,
        database_url: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cities,
            database_url: database_url.into(),
        }
    }

    /// Wire the OpenWeather source, city list and database from config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source = provider::source_from_config(config)?;
        Ok(Self::new(source, config.cities.clone(), config.database_url.clone()))
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Fetch -> normalize -> load, once. Any failure skips the stages after it.
    pub async fn run_once(&self) -> EtlResult<RunSummary> {
        let readings = provider::extract(self.source.as_ref(), &self.cities).await?;

        let captured_at = Local::now().naive_local();
        let records = transform::normalize(&readings, captured_at)?;

        store::load(&self.database_url, &records).await?;

        Ok(RunSummary {
            stored: records.len(),
            captured_at,
            attempts: 1,
        })
    }

    /// Repeat the whole run until it succeeds or the policy is exhausted.
    pub async fn run_with_retry(&self, policy: &RetryPolicy) -> EtlResult<RunSummary> {
        let max_attempts = policy.max_attempts();
        let mut attempt = 1;

        loop {
            match self.run_once().await {
                Ok(summary) => {
                    info!(attempt, stored = summary.stored, "weather run finished");
                    return Ok(RunSummary { attempts: attempt, ..summary });
                }
                Err(err) if attempt < max_attempts => {
                    warn!(
                        attempt,
                        max_attempts,
                        delay_secs = policy.delay_secs,
                        error = %err,
                        "weather run failed, retrying"
                    );
                    tokio::time::sleep(policy.delay()).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(attempt, error = %err, "weather run failed, giving up");
                    return Err(err);
                }
            }
        }
    }
}
