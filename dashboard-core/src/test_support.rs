use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    FetchError, WeatherProvider, WeatherRequest, WeatherResponse,
    model::{Astro, Condition, Current, DaySummary, Forecast, ForecastDay, Location},
};

pub fn sample_response(name: &str) -> WeatherResponse {
    let condition = |text: &str, code: u32| Condition {
        text: text.to_string(),
        icon: format!("//cdn.weatherapi.com/weather/64x64/day/{code}.png"),
    };
    let day = |d: u32, max: f64, min: f64, rain: f64| ForecastDay {
        date: NaiveDate::from_ymd_opt(2025, 9, d).expect("valid date"),
        day: DaySummary {
            condition: condition("Patchy rain nearby", 176),
            maxtemp_c: max,
            mintemp_c: min,
            daily_chance_of_rain: rain,
            avghumidity: 71.0,
            maxwind_kph: 18.4,
        },
        astro: Astro { sunrise: "06:05 AM".into(), sunset: "06:38 PM".into() },
    };

    WeatherResponse {
        location: Location {
            name: name.to_string(),
            country: "India".into(),
            localtime: "2025-09-08 14:30".into(),
        },
        current: Current {
            temp_c: 31.4,
            feelslike_c: 35.6,
            condition: condition("Partly cloudy", 116),
            humidity: 62.0,
            wind_kph: 14.8,
            vis_km: 6.0,
            pressure_mb: 1004.0,
        },
        forecast: Some(Forecast {
            forecastday: vec![day(8, 33.2, 25.1, 84.5), day(9, 32.0, 24.6, 40.0), day(10, 34.5, 26.0, 0.0)],
        }),
        alerts: None,
    }
}

/// Canned answers keyed by the query string. Unknown queries get a 400.
#[derive(Debug, Default)]
pub struct MockProvider {
    responses: HashMap<String, WeatherResponse>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<WeatherRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: &str, response: WeatherResponse) -> Self {
        self.responses.insert(query.to_string(), response);
        self
    }

    pub fn delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<WeatherRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, FetchError> {
        self.calls.lock().expect("calls lock").push(request.clone());

        let key = request.query.to_string();
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }

        self.responses.get(&key).cloned().ok_or_else(|| FetchError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: r#"{"error":{"code":1006,"message":"No matching location found."}}"#.into(),
        })
    }
}
