//! Configured entry point for parsing query arguments.
//!
//! ```
//! use filterparams::{Operation, QueryBuilder};
//!
//! let query = QueryBuilder::new()
//!     .enable_operation(Operation::EQ)
//!     .enable_operation(Operation::LIKE)
//!     .build();
//!
//! let data = query
//!     .parse([
//!         ("filter[param][name][like][who]", "%smith%"),
//!         ("filter[param][status]", "active"),
//!         ("filter[binding]", "who & !status"),
//!         ("filter[order]", "desc(created)"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(data.filter().unwrap().to_string(), "(who & !status)");
//! assert!(data.orders()[0].is_descending());
//! ```

use serde::Serialize;

use crate::{
    arguments::{FilterArguments, OperationSettings},
    ast::{Expression, Order},
    error::QueryError,
    operation::Operation,
};

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryData {
    filter: Option<Expression>,
    orders: Vec<Order>,
}

impl QueryData {
    pub fn new(filter: Option<Expression>, orders: Vec<Order>) -> Self {
        QueryData { filter, orders }
    }

    /// The resolved filter. `None` only for a query built with
    /// [`QueryBuilder::allow_empty_filter`] that received no parameters.
    pub fn filter(&self) -> Option<&Expression> {
        self.filter.as_ref()
    }

    /// Sort directives, highest precedence first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn into_parts(self) -> (Option<Expression>, Vec<Order>) {
        (self.filter, self.orders)
    }
}

/// Collects the configuration of a [`Query`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    operations: Vec<Operation>,
    default_operation: Operation,
    allow_empty_filter: bool,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        QueryBuilder {
            operations: Vec::new(),
            default_operation: Operation::EQ,
            allow_empty_filter: false,
        }
    }
}

impl QueryBuilder {
    /// A builder with no operations enabled and `eq` as default operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows `operation` in `filter[param]` keys. Enabling twice is a no-op.
    pub fn enable_operation(&mut self, operation: Operation) -> &mut Self {
        if !self.has_operation(operation.name()) {
            self.operations.push(operation);
        }
        self
    }

    pub fn enable_operations<I>(&mut self, operations: I) -> &mut Self
    where
        I: IntoIterator<Item = Operation>,
    {
        for operation in operations {
            self.enable_operation(operation);
        }
        self
    }

    /// Enables every built-in operation.
    pub fn enable_all_operations(&mut self) -> &mut Self {
        self.enable_operations(Operation::builtin().iter().cloned())
    }

    pub fn remove_operations(&mut self) -> &mut Self {
        self.operations.clear();
        self
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.iter().any(|op| op.name() == name)
    }

    pub fn get_operation(&self, name: &str) -> Result<&Operation, QueryError> {
        self.operations
            .iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| QueryError::UnknownOperation(name.to_string()))
    }

    /// Operation assumed for `filter[param][<field>]` keys without one.
    pub fn default_operation(&mut self, operation: Operation) -> &mut Self {
        self.default_operation = operation;
        self
    }

    /// When set, a query without any parameter and without a binding yields
    /// no filter instead of failing on the empty binding.
    pub fn allow_empty_filter(&mut self, allow: bool) -> &mut Self {
        self.allow_empty_filter = allow;
        self
    }

    pub fn build(&self) -> Query {
        Query {
            operations: self.operations.clone(),
            default_operation: self.default_operation.clone(),
            allow_empty_filter: self.allow_empty_filter,
        }
    }
}

/// Parses query arguments with a fixed configuration.
///
/// A `Query` never changes after [`QueryBuilder::build`], so one instance can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct Query {
    operations: Vec<Operation>,
    default_operation: Operation,
    allow_empty_filter: bool,
}

impl Query {
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn default_operation(&self) -> &Operation {
        &self.default_operation
    }

    fn settings(&self) -> OperationSettings<'_> {
        OperationSettings {
            enabled: &self.operations,
            default: &self.default_operation,
        }
    }

    /// Decodes already percent-decoded key/value pairs into a filter and
    /// sort directives. Keys outside the `filter[...]` scheme are ignored.
    pub fn parse<I, K, V>(&self, pairs: I) -> Result<QueryData, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let arguments = FilterArguments::decode(pairs, self.settings())?;

        if self.allow_empty_filter && arguments.is_empty() && arguments.explicit_binding().is_none()
        {
            tracing::debug!("No filter parameters given");
            return Ok(QueryData::new(None, arguments.orders()));
        }

        let filter = arguments.parsed_binding()?;
        Ok(QueryData::new(Some(filter), arguments.orders()))
    }
}
