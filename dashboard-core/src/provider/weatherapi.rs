use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    model::{WeatherRequest, WeatherResponse},
    query::FetchMode,
};

use super::{FetchError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const FORECAST_DAYS: u8 = 3;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    fn endpoint_url(&self, mode: FetchMode) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), mode.endpoint())
    }

    fn query_params(&self, request: &WeatherRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("q", request.query.to_string()),
        ];

        match request.mode {
            FetchMode::Current => params.push(("aqi", "yes".to_string())),
            FetchMode::Forecast => {
                params.push(("days", FORECAST_DAYS.to_string()));
                params.push(("aqi", "yes".to_string()));
                params.push(("alerts", "yes".to_string()));
            }
        }

        params
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, FetchError> {
        let url = self.endpoint_url(request.mode);
        debug!(%url, query = %request.query, "requesting weather");

        let res = self.http.get(&url).query(&self.query_params(request)).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
