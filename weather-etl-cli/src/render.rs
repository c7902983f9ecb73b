use anyhow::Context;
use weather_etl_core::{CityReport, EtlError, RunSummary, WeatherRecord};

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn city_outcome(city: &str, outcome: &Result<CityReport, EtlError>) -> String {
    match outcome {
        Ok(report) => city_report(report),
        Err(err) => match err.status() {
            Some(status) => format!("{city}: ❌ Failed - Status Code {}", status.as_u16()),
            None => format!("{city}: ❌ Failed - {err}"),
        },
    }
}

pub fn city_report(report: &CityReport) -> String {
    format!(
        "\nWeather in {}\n-------------------\nTemperature: {}°C\nCondition: {}\nHumidity: {}%",
        report.city, report.temperature, report.condition, report.humidity
    )
}

pub fn run_summary(summary: &RunSummary) -> String {
    let tries = if summary.attempts == 1 { "attempt" } else { "attempts" };
    format!(
        "Stored {} cities at {} ({} {tries})",
        summary.stored,
        summary.captured_at.format(TIME_FMT),
        summary.attempts
    )
}

pub fn records_table(rows: &[WeatherRecord]) -> String {
    if rows.is_empty() {
        return "No weather data stored yet.".to_string();
    }

    let width = rows.iter().map(|r| r.city.chars().count()).max().unwrap_or(4).max(4);

    let mut out = format!(
        "{:<width$}  {:>6}  {:>6}  {:>5}  {:>4}  {:>6}  {:>4}  {:>5}  {}\n",
        "city", "temp", "feels", "hPa", "hum", "wind", "deg", "code", "recorded"
    );
    for r in rows {
        out.push_str(&format!(
            "{:<width$}  {:>6.1}  {:>6.1}  {:>5}  {:>4}  {:>6.1}  {:>4}  {:>5}  {}\n",
            r.city,
            r.temperature,
            r.feels_like,
            r.pressure,
            r.humidity,
            r.wind_speed,
            r.wind_direction,
            r.weather_code,
            r.time_recorded.format(TIME_FMT),
        ));
    }
    out.pop();
    out
}

pub fn records_json(rows: &[WeatherRecord]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize stored rows to JSON")
}
