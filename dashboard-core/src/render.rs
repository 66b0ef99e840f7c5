//! Pure projection of [`ViewState`] into display-ready strings.
//!
//! Terminal drawing and plain-text output both consume [`DashboardView`], so
//! all rounding and date formatting lives here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    model::{Alert, Current, ForecastDay, Location},
    state::{Phase, ViewState},
};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub search: SearchBar,
    pub error: Option<String>,
    pub current: Option<CurrentPanel>,
    pub forecast: Vec<ForecastRow>,
    pub alerts: Vec<AlertEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchBar {
    pub text: String,
    pub button_label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPanel {
    /// `Jaipur, India`
    pub place: String,
    pub date: String,
    pub temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub icon_url: String,
    pub tiles: [DetailTile; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub label: String,
    pub condition: String,
    pub icon_url: String,
    pub temperature: String,
    pub rain: String,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: String,
    pub wind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    pub title: String,
    pub severity: String,
    pub window: String,
}

pub fn render(state: &ViewState, input_text: &str) -> DashboardView {
    let loading = state.phase() == Phase::Loading;
    let search = SearchBar {
        text: input_text.to_string(),
        button_label: if loading { SEARCHING_LABEL } else { SEARCH_LABEL },
        enabled: !loading,
    };

    // An error replaces the weather panels entirely.
    let data = if state.error.is_some() { None } else { state.data.as_ref() };

    let current = data.map(|d| current_panel(&d.location, &d.current));
    let forecast = data
        .and_then(|d| d.forecast.as_ref())
        .map(|f| f.forecastday.iter().enumerate().map(|(i, day)| forecast_row(i, day)).collect())
        .unwrap_or_default();
    let alerts = data
        .and_then(|d| d.alerts.as_ref())
        .map(|a| a.alert.iter().map(alert_entry).collect())
        .unwrap_or_default();

    DashboardView { search, error: state.error.clone(), current, forecast, alerts }
}

fn current_panel(location: &Location, current: &Current) -> CurrentPanel {
    CurrentPanel {
        place: format!("{}, {}", location.name, location.country),
        date: format_local_date(&location.localtime),
        temperature: format!("{}°C", round_half_away(current.temp_c)),
        feels_like: format!("Feels like {}°C", round_half_away(current.feelslike_c)),
        condition: current.condition.text.clone(),
        icon_url: current.condition.icon_url(),
        tiles: [
            DetailTile { label: "Humidity", value: format!("{}%", current.humidity) },
            DetailTile { label: "Wind Speed", value: format!("{} km/h", current.wind_kph) },
            DetailTile { label: "Visibility", value: format!("{} km", current.vis_km) },
            DetailTile { label: "Pressure", value: format!("{} mb", current.pressure_mb) },
        ],
    }
}

fn forecast_row(index: usize, day: &ForecastDay) -> ForecastRow {
    let summary = &day.day;
    ForecastRow {
        label: day_label(index, day.date),
        condition: summary.condition.text.clone(),
        icon_url: summary.condition.icon_url(),
        temperature: format!(
            "{}° / {}°",
            round_half_away(summary.maxtemp_c),
            round_half_away(summary.mintemp_c)
        ),
        rain: format!("{}% rain", round_half_away(summary.daily_chance_of_rain)),
        sunrise: format_clock(&day.astro.sunrise),
        sunset: format_clock(&day.astro.sunset),
        humidity: format!("{}%", summary.avghumidity),
        wind: format!("{} km/h", round_half_away(summary.maxwind_kph)),
    }
}

fn alert_entry(alert: &Alert) -> AlertEntry {
    let title =
        if alert.headline.is_empty() { alert.event.clone() } else { alert.headline.clone() };
    let window = match (alert.effective.is_empty(), alert.expires.is_empty()) {
        (false, false) => format!("{} until {}", alert.effective, alert.expires),
        (false, true) => format!("from {}", alert.effective),
        (true, false) => format!("until {}", alert.expires),
        (true, true) => String::new(),
    };
    AlertEntry { title, severity: alert.severity.clone(), window }
}

/// Round to the nearest integer, halves away from zero (`-2.5` → `-3`).
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

/// `Today`, `Tomorrow`, then the short weekday name of `date`.
pub fn day_label(index: usize, date: NaiveDate) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a").to_string(),
    }
}

/// `06:05 AM` → `6:05 AM`. Unparseable input (e.g. `No moonrise`) is returned as is.
pub fn format_clock(raw: &str) -> String {
    NaiveTime::parse_from_str(raw.trim(), "%I:%M %p")
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// `2025-09-08 14:30` → `Monday, September 8, 2025`.
pub fn format_local_date(localtime: &str) -> String {
    NaiveDateTime::parse_from_str(localtime.trim(), "%Y-%m-%d %H:%M")
        .map(|dt| dt.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|_| localtime.to_string())
}
