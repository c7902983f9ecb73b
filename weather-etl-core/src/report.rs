//! Quick console summary of current conditions, one city at a time.
//!
//! Unlike the ETL run, a failed city does not stop the others.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{EtlError, EtlResult},
    provider::WeatherSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub city: String,
    pub temperature: f64,
    pub condition: String,
    pub humidity: i32,
}

#[derive(Debug, Deserialize)]
struct SummaryMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct SummaryCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Summary {
    main: SummaryMain,
    weather: Vec<SummaryCondition>,
}

impl CityReport {
    pub fn from_raw(city: &str, raw: &Value) -> EtlResult<Self> {
        let summary = Summary::deserialize(raw).map_err(|source| EtlError::Normalize {
            city: city.to_string(),
            source,
        })?;

        let condition = summary
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| EtlError::MissingCondition { city: city.to_string() })?;

        Ok(Self {
            city: city.to_string(),
            temperature: summary.main.temp,
            condition: condition.description,
            humidity: summary.main.humidity,
        })
    }
}

/// Fetch and summarize each city, keeping every outcome in input order.
pub async fn collect(
    source: &dyn WeatherSource,
    cities: &[String],
) -> Vec<(String, EtlResult<CityReport>)> {
    let mut out = Vec::with_capacity(cities.len());

    for city in cities {
        let outcome = match source.current(city).await {
            Ok(raw) => CityReport::from_raw(city, &raw),
            Err(err) => Err(err),
        };
        out.push((city.clone(), outcome));
    }

    out
}
