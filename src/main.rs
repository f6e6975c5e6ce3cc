use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forecast_lookup::{
    ForecastConfig, ForecastError, ForecastProvider, ForecastTable, WEATHER_FORECASTS, telemetry,
};
use serde_json::json;
use tracing::{debug, info};

/// Look up weather forecasts by date
#[derive(Parser)]
#[command(name = "forecast-lookup", version, about = "Date-keyed weather forecast lookup")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON forecast table to use instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the forecast for a date (YYYY-MM-DD)
    Lookup {
        #[arg(value_name = "DATE")]
        date: String,
    },
    /// Print every forecast in date order
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(forecast_err) = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<ForecastError>())
            {
                eprintln!("{}", forecast_err.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ForecastConfig::load_from_path(cli.config)?;
    if let Some(path) = cli.table {
        config.table.path = Some(path);
    }
    telemetry::init_tracing(&config.logging)?;

    let loaded;
    let table: &ForecastTable = match &config.table.path {
        Some(path) => {
            loaded = ForecastTable::load(path).with_context(|| {
                format!("Failed to load forecast table from {}", path.display())
            })?;
            &loaded
        }
        None => {
            debug!("Using built-in forecast table");
            &*WEATHER_FORECASTS
        }
    };

    match cli.command {
        Commands::Lookup { date } => lookup(table, &date, cli.json)?,
        Commands::List => list(table, cli.json)?,
    }
    Ok(())
}

fn lookup(provider: &impl ForecastProvider, date: &str, as_json: bool) -> Result<()> {
    let forecast = provider.forecast(date);
    info!(date, found = forecast.is_some(), "lookup");

    if as_json {
        println!(
            "{}",
            serde_json::to_string(&json!({ "date": date, "forecast": forecast }))?
        );
        return Ok(());
    }

    match forecast {
        Some(forecast) => println!("{date}: {forecast}"),
        None => println!("No forecast for {date}"),
    }
    Ok(())
}

fn list(table: &ForecastTable, as_json: bool) -> Result<()> {
    if as_json {
        let entries: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|(date, forecast)| (date.to_string(), json!(forecast)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("Forecast table is empty");
    }
    for (date, forecast) in table.iter() {
        println!("{date}: {forecast}");
    }
    Ok(())
}
