//! Parse query arguments given on the command line

use super::CliError;
use crate::{Operation, QueryBuilder};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// `key=value` pairs, already percent-decoded
    pub pairs: Vec<String>,
    /// Enabled operation names; all built-ins when empty
    pub operations: Vec<String>,
    /// Operation for params that don't name one
    pub default_operation: Option<String>,
    /// Yield no filter instead of an error when nothing is declared
    pub allow_empty: bool,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Splits `key=value` at the first `=`.
pub fn parse_pair(pair: &str) -> Result<(String, String), CliError> {
    pair.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| CliError::MalformedPair(pair.to_string()))
}

fn operation_named(name: &str) -> Operation {
    Operation::lookup(name).unwrap_or_else(|| Operation::new(name))
}

/// Parse the pairs and render the result as JSON
pub fn execute_check(options: &CheckOptions) -> Result<String, CliError> {
    let pairs = options
        .pairs
        .iter()
        .map(|pair| parse_pair(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = QueryBuilder::new();
    if options.operations.is_empty() {
        builder.enable_all_operations();
    } else {
        builder.enable_operations(options.operations.iter().map(|name| operation_named(name)));
    }
    if let Some(name) = &options.default_operation {
        builder.default_operation(operation_named(name));
    }
    builder.allow_empty_filter(options.allow_empty);

    let query = builder.build();
    tracing::debug!(
        pairs = pairs.len(),
        operations = query.operations().len(),
        "Parsing query arguments"
    );
    let data = query.parse(pairs)?;

    let json = if options.pretty {
        serde_json::to_string_pretty(&data)
    } else {
        serde_json::to_string(&data)
    }?;
    Ok(json)
}
