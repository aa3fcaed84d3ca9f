//! CLI support for filterparams
//!
//! Provides programmatic access to the `filterparams` command so the same
//! logic can be driven from tests or other tools.

mod binding;
mod check;
mod docs;

pub use binding::execute_binding;
pub use check::{execute_check, parse_pair, CheckOptions};
pub use docs::{get_doc_topic, get_docs_overview, DocTopic};

use std::io;

use thiserror::Error;

use crate::QueryError;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Argument without a `=` separating key and value
    #[error("Malformed pair '{0}': expected key=value")]
    MalformedPair(String),

    #[error("Unknown topic: '{0}'\nRun 'filterparams docs' to see available topics.")]
    UnknownTopic(String),
}
