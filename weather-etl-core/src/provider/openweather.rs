use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::warn;

use crate::error::{EtlError, EtlResult};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap "current weather" endpoint, queried in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherSource {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherSource {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherSource {
    async fn current(&self, city: &str) -> EtlResult<Value> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|source| EtlError::Request {
                city: city.to_string(),
                source: source.without_url(),
            })?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warn!(city, %status, body = %truncate_body(&body), "weather request rejected");
            return Err(EtlError::Status {
                city: city.to_string(),
                status,
            });
        }

        let body = res.text().await.map_err(|source| EtlError::Body {
            city: city.to_string(),
            source: source.without_url(),
        })?;

        serde_json::from_str(&body).map_err(|source| EtlError::Decode {
            city: city.to_string(),
            source,
        })
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
