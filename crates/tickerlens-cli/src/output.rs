use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(report: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report)?,
    }

    Ok(())
}

fn render_table(report: &Value) -> Result<(), CliError> {
    let Value::Object(fields) = report else {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    };

    let width = fields.keys().map(String::len).max().unwrap_or(0);
    for (name, value) in fields {
        match value {
            Value::Object(_) | Value::Array(_) => {
                println!("{name:<width$}:");
                for line in serde_json::to_string_pretty(value)?.lines() {
                    println!("  {line}");
                }
            }
            Value::String(text) => println!("{name:<width$}: {text}"),
            other => println!("{name:<width$}: {other}"),
        }
    }

    Ok(())
}
