use anyhow::{Context, Result};
use inquire::{CustomType, Password, PasswordDisplayMode, Select, Text};
use weather_dashboard_core::{Config, GeolocationMode};

/// Interactive prompts for the settings stored in the config file.
pub fn run(config: &mut Config) -> Result<()> {
    let has_key = config.api_key().is_ok();
    let prompt = if has_key {
        "weatherapi.com API key (leave empty to keep the current one):"
    } else {
        "weatherapi.com API key:"
    };

    let api_key = Password::new(prompt)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let default_query = Text::new("City to show on startup:")
        .with_default(&config.default_query)
        .prompt()
        .context("Failed to read default city")?;
    config.default_query = default_query;

    let modes = GeolocationMode::all().to_vec();
    let cursor = modes.iter().position(|m| *m == config.geolocation.mode).unwrap_or(0);
    config.geolocation.mode = Select::new("How should \"use my location\" find you?", modes)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read geolocation mode")?;

    if config.geolocation.mode == GeolocationMode::Fixed {
        let geo = &mut config.geolocation;
        geo.latitude = Some(coordinate("Latitude:", geo.latitude)?);
        geo.longitude = Some(coordinate("Longitude:", geo.longitude)?);
    }

    // Surface a bad combination now instead of on first use.
    config.geolocator()?;
    config.default_query()?;

    Ok(())
}

fn coordinate(message: &str, current: Option<f64>) -> Result<f64> {
    let prompt = CustomType::<f64>::new(message).with_error_message("Please type a decimal number");
    let prompt = match current {
        Some(value) => prompt.with_default(value),
        None => prompt,
    };

    prompt.prompt().with_context(|| format!("Failed to read {}", message.trim_end_matches(':')))
}
