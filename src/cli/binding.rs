use super::CliError;
use crate::parse_binding;

/// Parse a binding on its own and return its fully parenthesized form
pub fn execute_binding(binding: &str) -> Result<String, CliError> {
    let expression = parse_binding(binding).map_err(crate::QueryError::from)?;
    Ok(expression.to_string())
}
