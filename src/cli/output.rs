//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextBayesArgs};
use crate::error::Result;

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub training_set: String,
    pub training_instances: usize,
    pub test_set: String,
    pub test_instances: usize,
    pub vocabulary_size: usize,
    pub target_values: Vec<String>,
    pub output: String,
    pub duration_ms: u64,
}

/// Result structure for the evaluate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub data_set: String,
    pub training_instances: usize,
    pub test_instances: usize,
    pub vocabulary_size: usize,
    pub target_values: Vec<String>,
    pub correct: usize,
    pub accuracy: f64,
    pub output: Option<String>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TextBayesArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TextBayesArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("EvaluationResult") => {
            output_evaluation_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output an evaluation in human format.
fn output_evaluation_human(value: &serde_json::Value, args: &TextBayesArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(name) = obj.get("data_set").and_then(|n| n.as_str()) {
            println!("Data set: {name}");
        }
        if let Some(training) = obj.get("training_instances").and_then(|t| t.as_u64()) {
            println!("Training instances: {training}");
        }
        if let Some(test) = obj.get("test_instances").and_then(|t| t.as_u64()) {
            println!("Test instances: {test}");
        }
        if let Some(size) = obj.get("vocabulary_size").and_then(|s| s.as_u64()) {
            println!("Vocabulary size: {size}");
        }
        if let Some(values) = obj.get("target_values") {
            println!("Target values: {}", format_value(values));
        }
        if let Some(path) = obj.get("output").and_then(|o| o.as_str()) {
            println!("Predictions written to: {path}");
        }

        println!();
        if let (Some(correct), Some(accuracy)) = (
            obj.get("correct").and_then(|c| c.as_u64()),
            obj.get("accuracy").and_then(|a| a.as_f64()),
        ) {
            println!("Accuracy: {} ({correct} correct)", format_accuracy(accuracy));
        }

        if args.verbosity() > 1
            && let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64())
        {
            println!("Time: {duration}ms");
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &TextBayesArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TextBayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format an accuracy in [0, 1] as a percentage.
fn format_accuracy(accuracy: f64) -> String {
    format!("{:.2}%", accuracy * 100.0)
}
