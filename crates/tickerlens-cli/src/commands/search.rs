use serde_json::Value;

use tickerlens_core::{SearchController, SearchState, Ticker};

use crate::cli::SearchArgs;
use crate::error::CliError;

pub async fn run(args: &SearchArgs, mut controller: SearchController) -> Result<Value, CliError> {
    // Validate before anything goes on the wire; an empty or malformed
    // argument exits without a network call.
    let ticker = Ticker::parse(&args.ticker)?;

    match controller.search(ticker.as_str()).await {
        SearchState::Success(snapshot) => Ok(serde_json::to_value(snapshot.as_ref())?),
        SearchState::Failed(error) => Err(CliError::Fetch(error.clone())),
        SearchState::Idle | SearchState::Loading { .. } => Err(CliError::Command(String::from(
            "search did not run to completion",
        ))),
    }
}
