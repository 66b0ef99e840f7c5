use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::{FetchMode, Query};

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub query: Query,
    pub mode: FetchMode,
}

impl WeatherRequest {
    pub fn forecast(query: Query) -> Self {
        Self { query, mode: FetchMode::Forecast }
    }

    pub fn current(query: Query) -> Self {
        Self { query, mode: FetchMode::Current }
    }
}

/// Body returned by `current.json` and `forecast.json`.
///
/// Only the fields the dashboard displays are modelled; everything else in the
/// provider's document is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: Current,
    #[serde(default)]
    pub forecast: Option<Forecast>,
    #[serde(default)]
    pub alerts: Option<Alerts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    /// Local wall-clock time at the location, e.g. `2025-09-08 14:30`.
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative icon path, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`.
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("//") { format!("https:{}", self.icon) } else { self.icon.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: Condition,
    pub humidity: f64,
    pub wind_kph: f64,
    pub vis_km: f64,
    pub pressure_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DaySummary,
    pub astro: Astro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub condition: Condition,
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub daily_chance_of_rain: f64,
    pub avghumidity: f64,
    pub maxwind_kph: f64,
}

/// Sunrise and sunset as the provider formats them (`06:05 AM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Alerts {
    #[serde(default)]
    pub alert: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub headline: String,
    pub severity: String,
    pub event: String,
    pub effective: String,
    pub expires: String,
}
