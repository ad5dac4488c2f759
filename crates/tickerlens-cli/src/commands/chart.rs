use serde_json::{json, Value};

use tickerlens_core::{percent_change, reduce, SearchController, SearchState, Ticker};

use crate::cli::ChartArgs;
use crate::error::CliError;

pub async fn run(args: &ChartArgs, mut controller: SearchController) -> Result<Value, CliError> {
    let ticker = Ticker::parse(&args.ticker)?;

    match controller.search(ticker.as_str()).await {
        SearchState::Success(snapshot) => {
            // The period change anchors to the true endpoints, so it is
            // taken from the full series before reduction.
            let change = percent_change(&snapshot.chart_data);
            let points = reduce(&snapshot.chart_data, args.max_points);

            Ok(json!({
                "ticker": snapshot.ticker.as_str(),
                "currency": snapshot.currency.as_str(),
                "source_points": snapshot.chart_data.len(),
                "displayed_points": points.len(),
                "percent_change": change,
                "points": points,
            }))
        }
        SearchState::Failed(error) => Err(CliError::Fetch(error.clone())),
        SearchState::Idle | SearchState::Loading { .. } => Err(CliError::Command(String::from(
            "search did not run to completion",
        ))),
    }
}
