use serde_json::{json, Value};

use tickerlens_core::SearchController;

use crate::cli::StatusArgs;
use crate::error::CliError;

pub fn run(args: &StatusArgs, mut controller: SearchController) -> Result<Value, CliError> {
    if args.reset {
        controller.retry_connection();
    }

    let config = controller.client().config();
    Ok(json!({
        "online": controller.connectivity().is_online(),
        "base_url": config.base_url.as_str(),
        "timeout_ms": config.timeout_ms,
    }))
}
