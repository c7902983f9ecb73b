use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One city's untouched API response, as produced by the fetch step.
#[derive(Debug, Clone, PartialEq)]
pub struct CityReading {
    pub city: String,
    pub raw: Value,
}

impl CityReading {
    pub fn new(city: impl Into<String>, raw: Value) -> Self {
        Self { city: city.into(), raw }
    }
}

/// Flat row stored in `weather_data`, one per city.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct WeatherRecord {
    pub city: String,
    pub temperature: f64,
    #[sqlx(rename = "feelslike")]
    pub feels_like: f64,
    #[sqlx(rename = "minimumtemp")]
    pub minimum_temp: f64,
    #[sqlx(rename = "maximumtemp")]
    pub maximum_temp: f64,
    pub pressure: i32,
    pub humidity: i32,
    #[sqlx(rename = "windspeed")]
    pub wind_speed: f64,
    #[sqlx(rename = "winddirection")]
    pub wind_direction: i32,
    #[sqlx(rename = "weathercode")]
    pub weather_code: i32,
    #[sqlx(rename = "timerecorded")]
    pub time_recorded: NaiveDateTime,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

// Subset of the OpenWeather "current weather" payload the job reads.

#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrent {
    pub main: OwMain,
    pub wind: OwWind,
    pub sys: OwSys,
    pub weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i32,
    pub humidity: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwSys {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwCondition {
    pub id: i32,
}
