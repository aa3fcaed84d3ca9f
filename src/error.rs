use thiserror::Error;

use crate::parser::ParseError;

/// Errors that abort parsing a query.
///
/// There is no partial result: any of these means the whole query was
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The binding expression is malformed
    #[error("invalid binding: {0}")]
    Syntax(#[from] ParseError),

    /// A `filter[param]` argument names an operation the query doesn't allow
    #[error("the operation \"{0}\" is unsupported")]
    UnsupportedOperation(String),

    /// The binding references an identification no `filter[param]` declares
    #[error("parameter \"{0}\" missing")]
    ParamNotFound(String),

    /// Lookup of an operation that was never enabled on a builder
    #[error("operation \"{0}\" is not enabled")]
    UnknownOperation(String),
}
