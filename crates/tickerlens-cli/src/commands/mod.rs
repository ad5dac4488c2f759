mod chart;
mod search;
mod status;

use std::sync::Arc;

use serde_json::Value;

use tickerlens_core::{ApiConfig, ConnectivityTracker, SearchController, StockApiClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let controller = controller(cli)?;

    match &cli.command {
        Command::Search(args) => search::run(args, controller).await,
        Command::Chart(args) => chart::run(args, controller).await,
        Command::Status(args) => status::run(args, controller),
    }
}

fn controller(cli: &Cli) -> Result<SearchController, CliError> {
    let config = resolve_config(cli)?;
    let connectivity = Arc::new(ConnectivityTracker::new());
    Ok(SearchController::new(StockApiClient::new(
        config,
        connectivity,
    )))
}

fn resolve_config(cli: &Cli) -> Result<ApiConfig, CliError> {
    let config = match &cli.base_url {
        Some(base_url) => ApiConfig::new(base_url.clone()),
        None => ApiConfig::from_env().ok_or_else(|| {
            CliError::Config(format!(
                "no data service configured; set {} or pass --base-url",
                tickerlens_core::ENV_BASE_URL
            ))
        })?,
    };

    Ok(config.with_timeout_ms(cli.timeout_ms))
}
