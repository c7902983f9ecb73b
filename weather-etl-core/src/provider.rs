use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, info};

use crate::{
    Config,
    error::EtlResult,
    model::CityReading,
    provider::openweather::OpenWeatherSource,
};

pub mod openweather;

/// Anything that can produce the current raw reading for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self, city: &str) -> EtlResult<Value>;
}

/// Build the OpenWeather source from config, reading the API key from the
/// credentials file.
pub fn source_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherSource>> {
    let api_key = config.api_key()?;
    Ok(Box::new(OpenWeatherSource::new(config.base_url.clone(), api_key)))
}

/// Fetch every city in order.
///
/// Stops at the first failure and returns it; no partial results are
/// handed back.
pub async fn extract(source: &dyn WeatherSource, cities: &[String]) -> EtlResult<Vec<CityReading>> {
    let mut readings = Vec::with_capacity(cities.len());

    for city in cities {
        let raw = source.current(city).await?;
        debug!(city = %city, "fetched current weather");
        readings.push(CityReading::new(city.as_str(), raw));
    }

    info!(count = readings.len(), "extracted weather readings");
    Ok(readings)
}
