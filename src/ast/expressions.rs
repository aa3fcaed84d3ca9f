use std::fmt;

use serde::Serialize;

use crate::operation::Operation;

/// Leaf predicate of a filter.
///
/// The parser produces parameters carrying only their `identification`;
/// `name` starts out equal to it and `operation`/`value` are empty until the
/// binding is resolved against the declared `filter[param]` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Alias by which the binding refers to this parameter
    pub identification: String,

    /// Field being filtered
    pub name: String,

    /// Comparison to apply
    pub operation: Option<Operation>,

    /// Raw operand taken from the query value
    pub value: Option<String>,
}

impl Parameter {
    /// Unresolved parameter as it comes out of the binding parser.
    pub fn new(identification: impl Into<String>) -> Self {
        let identification = identification.into();
        Parameter {
            name: identification.clone(),
            identification,
            operation: None,
            value: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.operation.is_some() && self.value.is_some()
    }
}

/// Boolean filter tree.
///
/// # Example
/// ```text
/// left & (middle | data) | !right
/// ```
/// parses to
/// ```text
/// Or(And(left, Or(middle, data)), Negate(right))
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    /// Single predicate
    Parameter(Parameter),

    /// Both sides must hold
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Either side must hold
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Inner expression must not hold
    Negate { inner: Box<Expression> },
}

impl Expression {
    pub fn parameter(identification: impl Into<String>) -> Self {
        Expression::Parameter(Parameter::new(identification))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn negate(inner: Expression) -> Self {
        Expression::Negate {
            inner: Box::new(inner),
        }
    }

    /// All leaf parameters, left to right, depth first.
    pub fn parameters(&self) -> Vec<&Parameter> {
        let mut out = Vec::new();
        self.collect_parameters(&mut out);
        out
    }

    /// Mutable counterpart of [`Expression::parameters`], same order.
    pub fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        let mut out = Vec::new();
        self.collect_parameters_mut(&mut out);
        out
    }

    fn collect_parameters<'a>(&'a self, out: &mut Vec<&'a Parameter>) {
        match self {
            Expression::Parameter(param) => out.push(param),
            Expression::And { left, right } | Expression::Or { left, right } => {
                left.collect_parameters(out);
                right.collect_parameters(out);
            }
            Expression::Negate { inner } => inner.collect_parameters(out),
        }
    }

    fn collect_parameters_mut<'a>(&'a mut self, out: &mut Vec<&'a mut Parameter>) {
        match self {
            Expression::Parameter(param) => out.push(param),
            Expression::And { left, right } | Expression::Or { left, right } => {
                left.collect_parameters_mut(out);
                right.collect_parameters_mut(out);
            }
            Expression::Negate { inner } => inner.collect_parameters_mut(out),
        }
    }
}

/// Renders binding syntax. Combinators are always parenthesized so the
/// output parses back to the same tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Parameter(param) => f.write_str(&param.identification),
            Expression::And { left, right } => write!(f, "({} & {})", left, right),
            Expression::Or { left, right } => write!(f, "({} | {})", left, right),
            Expression::Negate { inner } => write!(f, "!{}", inner),
        }
    }
}
