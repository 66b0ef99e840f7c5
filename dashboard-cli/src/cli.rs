use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use weather_dashboard_core::{
    Config, Query, ViewState, WeatherRequest, fetcher::fetch_once, input::InputController,
    provider::provider_from_config, render,
};

use crate::{configure, logging, output, tui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-dashboard",
    version,
    about = "Current weather and a 3-day forecast in your terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the weatherapi.com API key, default city and location mode.
    Configure,

    /// Fetch once and print the result.
    Show {
        /// City name or "lat,lon"; defaults to the configured default city.
        query: Option<String>,

        /// Only current conditions, no forecast.
        #[arg(long)]
        current: bool,

        /// Use the device location instead of a query.
        #[arg(long, conflicts_with = "query")]
        locate: bool,
    },

    /// Open the interactive dashboard (the default).
    Dashboard,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Dashboard) {
            Command::Configure => {
                logging::init_stderr();
                let mut config = Config::load()?;
                configure::run(&mut config)?;
                config.save()?;
                println!("Saved configuration to {}", Config::config_file_path()?.display());
            }
            Command::Show { query, current, locate } => {
                logging::init_stderr();
                show(query, current, locate).await?;
            }
            Command::Dashboard => {
                let config = Config::load()?;
                logging::init_file(&Config::log_file_path()?)?;
                tui::run(&config).await?;
            }
        }

        Ok(())
    }
}

async fn show(query: Option<String>, current: bool, locate: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let query = if locate {
        let input = InputController::new(config.geolocator()?);
        match input.locate().await {
            Ok(query) => query,
            Err(err) => bail!("{}", err.user_message()),
        }
    } else {
        match query {
            Some(raw) => Query::place(&raw).context("Query must not be empty")?,
            None => config.default_query()?,
        }
    };

    let request =
        if current { WeatherRequest::current(query) } else { WeatherRequest::forecast(query) };

    let mut state = ViewState::new();
    fetch_once(provider.as_ref(), &mut state, request).await;

    if let Some(error) = state.error {
        bail!(error);
    }

    for line in output::to_lines(&render::render(&state, "")) {
        println!("{line}");
    }

    Ok(())
}
