use crate::{Config, WeatherRequest, WeatherResponse, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

pub mod weatherapi;

/// Shown for every failed lookup, whatever the cause.
pub const CITY_NOT_FOUND: &str = "City not found";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather API responded with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to parse weather API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The dashboard does not tell a missing city apart from a network fault;
    /// the typed variant is only logged.
    pub fn user_message(&self) -> &'static str {
        CITY_NOT_FOUND
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, FetchError>;
}

/// Construct the weatherapi.com client from the stored API key and base URL.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Arc::new(WeatherApiProvider::with_base_url(api_key.to_owned(), config.base_url.clone())))
}
