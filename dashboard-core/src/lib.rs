//! Core library for the `weather-dashboard` binary.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weatherapi.com client and device geolocation
//! - The fetch/loading/error lifecycle behind the dashboard
//! - A pure render projection from view state to display strings
//!
//! It is used by `weather-dashboard`, but the session can be driven by any
//! front end that feeds it input and polls its event channel.

pub mod config;
pub mod fetcher;
pub mod geo;
pub mod input;
pub mod model;
pub mod provider;
pub mod query;
pub mod render;
pub mod session;
pub mod state;

pub use config::{Config, GeolocationConfig, GeolocationMode};
pub use model::{WeatherRequest, WeatherResponse};
pub use provider::{FetchError, WeatherProvider};
pub use query::{FetchMode, Query};
pub use render::DashboardView;
pub use session::{LookupId, Session, SessionEvent};
pub use state::{Phase, RequestId, ViewState};

#[cfg(test)]
pub(crate) mod test_support;
