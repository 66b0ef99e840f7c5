use weather_dashboard_core::render::{
    AlertEntry, CurrentPanel, DashboardView, DetailTile, ForecastRow, SEARCH_LABEL, SearchBar,
};

pub fn sample_view() -> DashboardView {
    let tile = |label, value: &str| DetailTile { label, value: value.to_string() };
    let row = |label: &str, temperature: &str| ForecastRow {
        label: label.to_string(),
        condition: "Sunny".into(),
        icon_url: "https://cdn.weatherapi.com/weather/64x64/day/113.png".into(),
        temperature: temperature.to_string(),
        rain: "85% rain".into(),
        sunrise: "6:05 AM".into(),
        sunset: "6:38 PM".into(),
        humidity: "71%".into(),
        wind: "18 km/h".into(),
    };

    DashboardView {
        search: SearchBar { text: String::new(), button_label: SEARCH_LABEL, enabled: true },
        error: None,
        current: Some(CurrentPanel {
            place: "Jaipur, India".into(),
            date: "Monday, September 8, 2025".into(),
            temperature: "31°C".into(),
            feels_like: "Feels like 36°C".into(),
            condition: "Partly cloudy".into(),
            icon_url: "https://cdn.weatherapi.com/weather/64x64/day/116.png".into(),
            tiles: [
                tile("Humidity", "62%"),
                tile("Wind Speed", "14.8 km/h"),
                tile("Visibility", "6 km"),
                tile("Pressure", "1004 mb"),
            ],
        }),
        forecast: vec![row("Today", "33° / 25°"), row("Tomorrow", "32° / 25°"), row("Wed", "35° / 26°")],
        alerts: vec![AlertEntry {
            title: "Heat advisory".into(),
            severity: "Moderate".into(),
            window: String::new(),
        }],
    }
}
