//! Device location lookup used by the "use my location" action.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

pub const IP_LOOKUP_URL: &str = "http://ip-api.com/json/";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum GeoError {
    /// The lookup ran but did not produce a position.
    #[error("location lookup denied: {0}")]
    Denied(String),

    #[error("no geolocation capability configured")]
    Unsupported,
}

impl GeoError {
    /// Message shown inline on the dashboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::Denied(_) => "Unable to get your location",
            GeoError::Unsupported => "Geolocation is not supported on this device",
        }
    }
}

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn locate(&self) -> Result<Coordinates, GeoError>;
}

/// Always answers with the coordinates from the config file.
#[derive(Debug, Clone)]
pub struct FixedGeolocator {
    coords: Coordinates,
}

impl FixedGeolocator {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        Ok(self.coords)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::Unsupported)
    }
}

/// Approximates the device position from its public IP address.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    url: String,
    http: Client,
}

impl IpGeolocator {
    pub fn new() -> Self {
        Self::with_url(IP_LOOKUP_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), http: Client::new() }
    }
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn locate(&self) -> Result<Coordinates, GeoError> {
        let res = self
            .http
            .get(&self.url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| GeoError::Denied(format!("lookup request failed: {e}")))?;

        if !res.status().is_success() {
            return Err(GeoError::Denied(format!("lookup returned status {}", res.status())));
        }

        let body: IpLookupResponse = res
            .json()
            .await
            .map_err(|e| GeoError::Denied(format!("unreadable lookup response: {e}")))?;

        match (body.status.as_str(), body.lat, body.lon) {
            ("success", Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(GeoError::Denied(body.message.unwrap_or_else(|| body.status.clone()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_geolocator_returns_configured_position() {
        let coords = Coordinates { latitude: 26.9, longitude: 75.8 };
        let located = FixedGeolocator::new(coords).locate().await.expect("fixed always succeeds");
        assert_eq!(located, coords);
    }

    #[tokio::test]
    async fn disabled_geolocator_reports_unsupported() {
        let err = DisabledGeolocator.locate().await.unwrap_err();
        assert!(matches!(err, GeoError::Unsupported));
        assert_eq!(err.user_message(), "Geolocation is not supported on this device");
    }

    #[test]
    fn denied_maps_to_generic_message() {
        let err = GeoError::Denied("private range".into());
        assert_eq!(err.user_message(), "Unable to get your location");
    }
}
