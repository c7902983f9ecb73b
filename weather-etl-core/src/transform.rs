//! Reshapes raw OpenWeather payloads into flat [`WeatherRecord`]s.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use crate::{
    error::{EtlError, EtlResult},
    model::{CityReading, OwCurrent, WeatherRecord},
};

/// Normalize every reading, keeping input order.
///
/// `captured_at` is stamped on every record as its `time_recorded`.
pub fn normalize(readings: &[CityReading], captured_at: NaiveDateTime) -> EtlResult<Vec<WeatherRecord>> {
    let records = readings
        .iter()
        .map(|reading| normalize_one(reading, captured_at))
        .collect::<EtlResult<Vec<_>>>()?;

    info!(count = records.len(), "normalized weather readings");
    Ok(records)
}

pub fn normalize_one(reading: &CityReading, captured_at: NaiveDateTime) -> EtlResult<WeatherRecord> {
    let city = reading.city.as_str();

    let parsed = OwCurrent::deserialize(&reading.raw).map_err(|source| EtlError::Normalize {
        city: city.to_string(),
        source,
    })?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| EtlError::MissingCondition { city: city.to_string() })?;

    Ok(WeatherRecord {
        city: city.to_string(),
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        minimum_temp: parsed.main.temp_min,
        maximum_temp: parsed.main.temp_max,
        pressure: parsed.main.pressure,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        wind_direction: parsed.wind.deg,
        weather_code: condition.id,
        time_recorded: captured_at,
        sunrise: epoch_to_local(city, "sunrise", parsed.sys.sunrise)?,
        sunset: epoch_to_local(city, "sunset", parsed.sys.sunset)?,
    })
}

/// Local wall-clock time for a Unix timestamp.
fn epoch_to_local(city: &str, field: &'static str, secs: i64) -> EtlResult<NaiveDateTime> {
    DateTime::from_timestamp(secs, 0)
        .map(|utc| utc.with_timezone(&Local).naive_local())
        .ok_or_else(|| EtlError::Timestamp {
            city: city.to_string(),
            field,
            value: secs,
        })
}
