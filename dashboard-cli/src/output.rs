//! Plain-text layout of a rendered dashboard, used by `show`.

use weather_dashboard_core::render::DashboardView;

pub fn to_lines(view: &DashboardView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
        return lines;
    }

    let Some(current) = &view.current else {
        return lines;
    };

    lines.push(current.place.clone());
    lines.push(current.date.clone());
    lines.push(format!("{}  ({})", current.temperature, current.feels_like));
    lines.push(format!("{}  {}", current.condition, current.icon_url));
    for tile in &current.tiles {
        lines.push(format!("  {:<11}{}", tile.label, tile.value));
    }

    if !view.forecast.is_empty() {
        lines.push(String::new());
        lines.push("3-Day Forecast".to_string());
        for row in &view.forecast {
            lines.push(format!(
                "  {:<9}{:<11}{:<10}{}",
                row.label, row.temperature, row.rain, row.condition
            ));
            lines.push(format!(
                "  {:<9}sunrise {}  sunset {}  humidity {}  wind {}",
                "", row.sunrise, row.sunset, row.humidity, row.wind
            ));
        }
    }

    if !view.alerts.is_empty() {
        lines.push(String::new());
        lines.push("Alerts".to_string());
        for alert in &view.alerts {
            lines.push(format!("  [{}] {}", alert.severity, alert.title));
            if !alert.window.is_empty() {
                lines.push(format!("    {}", alert.window));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_view as view;

    #[test]
    fn prints_current_forecast_and_alerts() {
        let lines = to_lines(&view());

        assert_eq!(lines[0], "Jaipur, India");
        assert!(lines.iter().any(|l| l == "31°C  (Feels like 36°C)"));
        assert!(lines.iter().any(|l| l.contains("Wind Speed") && l.ends_with("14.8 km/h")));
        assert!(lines.iter().any(|l| l.contains("Today") && l.contains("33° / 25°")));
        assert!(lines.iter().any(|l| l.contains("sunrise 6:05 AM")));
        assert!(lines.iter().any(|l| l == "  [Moderate] Heat advisory"));
    }

    #[test]
    fn error_replaces_everything() {
        let mut view = view();
        view.error = Some("City not found".into());

        assert_eq!(to_lines(&view), vec!["Error: City not found".to_string()]);
    }
}
