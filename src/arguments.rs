//! Decoding of `filter[...]` query arguments and resolution of the binding.
//!
//! Recognized keys:
//!
//! ```text
//! filter[param][<field>]                          operation = default, alias = field
//! filter[param][<field>][<operation>]             alias = field
//! filter[param][<field>][<operation>][<alias>]
//! filter[binding]                                 explicit binding expression
//! filter[order]                                   one order token, repeatable
//! ```
//!
//! Every other key is ignored. Decoding and resolution are separate stages:
//! [`FilterArguments::decode`] collects definitions, then
//! [`FilterArguments::parsed_binding`] parses the binding and fills every
//! leaf in from those definitions.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::{
    ast::{Expression, Order},
    error::QueryError,
    operation::Operation,
    ordering::parse_orders,
    parser::{parse_binding, ParseError},
};

static KEY_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^filter\[([^\[\]]+)\](.*)$").expect("filter key pattern is valid")
});

static PARAM_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\[\]]+)\](?:\[([^\[\]]+)\])?(?:\[([^\[\]]+)\])?$")
        .expect("param key pattern is valid")
});

/// What a single `filter[param]` argument declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Field being filtered
    pub name: String,
    /// Comparison to apply, already checked against the enabled set
    pub operation: Operation,
    /// Raw query value
    pub value: String,
}

/// Recognized shapes of a query key.
#[derive(Debug, PartialEq, Eq)]
enum FilterKey<'a> {
    Param {
        field: &'a str,
        operation: Option<&'a str>,
        alias: Option<&'a str>,
    },
    Binding,
    Order,
}

impl<'a> FilterKey<'a> {
    fn decode(key: &'a str) -> Option<Self> {
        let captures = KEY_MATCHER.captures(key)?;
        let category = captures.get(1)?.as_str();
        let rest = captures.get(2).map_or("", |m| m.as_str());

        match category {
            "param" => {
                let param = PARAM_MATCHER.captures(rest)?;
                Some(FilterKey::Param {
                    field: param.get(1)?.as_str(),
                    operation: param.get(2).map(|m| m.as_str()),
                    alias: param.get(3).map(|m| m.as_str()),
                })
            }
            "binding" if rest.is_empty() => Some(FilterKey::Binding),
            "order" if rest.is_empty() => Some(FilterKey::Order),
            _ => None,
        }
    }
}

/// Operations a query accepts plus the one assumed when a key names none.
#[derive(Debug, Clone, Copy)]
pub struct OperationSettings<'a> {
    pub enabled: &'a [Operation],
    pub default: &'a Operation,
}

impl OperationSettings<'_> {
    fn resolve(&self, name: Option<&str>) -> Result<Operation, QueryError> {
        let name = name.unwrap_or(self.default.name());
        self.enabled
            .iter()
            .find(|op| op.name() == name)
            .cloned()
            .ok_or_else(|| QueryError::UnsupportedOperation(name.to_string()))
    }
}

/// Decoded `filter[...]` arguments of one query.
#[derive(Debug, Clone, Default)]
pub struct FilterArguments {
    arguments: BTreeMap<String, Definition>,
    binding: Option<String>,
    orders: Vec<String>,
}

impl FilterArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects definitions, the binding and order tokens from decoded
    /// key/value pairs, in encounter order.
    ///
    /// Fails on the first `filter[param]` whose operation is not enabled.
    pub fn decode<I, K, V>(pairs: I, settings: OperationSettings<'_>) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut arguments = FilterArguments::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());

            match FilterKey::decode(key) {
                Some(FilterKey::Param {
                    field,
                    operation,
                    alias,
                }) => {
                    let definition = Definition {
                        name: field.to_string(),
                        operation: settings.resolve(operation)?,
                        value: value.to_string(),
                    };
                    arguments.set_argument(alias.unwrap_or(field), definition);
                }
                Some(FilterKey::Binding) => arguments.set_binding(value),
                Some(FilterKey::Order) => arguments.add_order(value),
                None => tracing::trace!(key, "Ignoring query key"),
            }
        }

        Ok(arguments)
    }

    /// Declares a parameter, replacing any earlier one with the same
    /// identification.
    pub fn set_argument(&mut self, identification: impl Into<String>, definition: Definition) {
        self.arguments.insert(identification.into(), definition);
    }

    pub fn argument(&self, identification: &str) -> Option<&Definition> {
        self.arguments.get(identification)
    }

    /// Declared parameters, ordered by identification.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.arguments.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn set_binding(&mut self, binding: impl Into<String>) {
        self.binding = Some(binding.into());
    }

    /// The explicit binding, unless none or an empty one was given.
    pub fn explicit_binding(&self) -> Option<&str> {
        self.binding.as_deref().filter(|binding| !binding.is_empty())
    }

    pub fn add_order(&mut self, order: impl Into<String>) {
        self.orders.push(order.into());
    }

    /// Raw order tokens in encounter order.
    pub fn order_tokens(&self) -> &[String] {
        &self.orders
    }

    /// AND of every declared identification, leaves in identification
    /// order.
    ///
    /// Built as a tree rather than parsed from text, so identifications that
    /// contain binding operators or whitespace stay single leaves. Pairs are
    /// joined level by level, keeping the depth logarithmic in the number of
    /// parameters. Fails with [`ParseError::EmptyInput`] when nothing is
    /// declared, the same error an empty binding gives.
    pub fn default_expression(&self) -> Result<Expression, ParseError> {
        let mut level: Vec<Expression> = self.arguments.keys().map(Expression::parameter).collect();

        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut operands = level.into_iter();
            while let Some(left) = operands.next() {
                next.push(match operands.next() {
                    Some(right) => Expression::and(left, right),
                    None => left,
                });
            }
            level = next;
        }

        level.pop().ok_or(ParseError::EmptyInput)
    }

    /// The unresolved binding: the explicit one parsed, the default one
    /// otherwise.
    pub fn binding(&self) -> Result<Expression, ParseError> {
        match self.explicit_binding() {
            Some(binding) => parse_binding(binding),
            None => {
                tracing::debug!(
                    parameters = self.arguments.len(),
                    "No binding given, joining all parameters"
                );
                self.default_expression()
            }
        }
    }

    /// Fills every leaf of `expression` in from the declared parameters.
    pub fn resolve(&self, mut expression: Expression) -> Result<Expression, QueryError> {
        for parameter in expression.parameters_mut() {
            let definition = self
                .argument(&parameter.identification)
                .ok_or_else(|| QueryError::ParamNotFound(parameter.identification.clone()))?;

            parameter.name = definition.name.clone();
            parameter.operation = Some(definition.operation.clone());
            parameter.value = Some(definition.value.clone());
        }
        Ok(expression)
    }

    /// Parses the binding and resolves it.
    pub fn parsed_binding(&self) -> Result<Expression, QueryError> {
        let expression = self.resolve(self.binding()?)?;
        tracing::debug!(
            parameters = expression.parameters().len(),
            "Resolved binding"
        );
        Ok(expression)
    }

    /// Sort directives for the order tokens that parse.
    pub fn orders(&self) -> Vec<Order> {
        parse_orders(&self.orders)
    }
}

/// Decodes `pairs`, resolves the binding and parses the orders in one go.
pub fn assemble<I, K, V>(
    pairs: I,
    settings: OperationSettings<'_>,
) -> Result<(Expression, Vec<Order>), QueryError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let arguments = FilterArguments::decode(pairs, settings)?;
    let expression = arguments.parsed_binding()?;
    Ok((expression, arguments.orders()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_key_shapes() {
        assert_eq!(
            FilterKey::decode("filter[param][name]"),
            Some(FilterKey::Param {
                field: "name",
                operation: None,
                alias: None
            })
        );
        assert_eq!(
            FilterKey::decode("filter[param][name][like][who]"),
            Some(FilterKey::Param {
                field: "name",
                operation: Some("like"),
                alias: Some("who")
            })
        );
        assert_eq!(FilterKey::decode("filter[binding]"), Some(FilterKey::Binding));
        assert_eq!(FilterKey::decode("filter[order]"), Some(FilterKey::Order));
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        for key in [
            "nonFilter",
            "filter",
            "filter[param]",
            "filter[param][]",
            "filter[param][a][b][c][d]",
            "filter[unrecognized]",
            "filter[binding][extra]",
            "other[category][differ]",
        ] {
            assert_eq!(FilterKey::decode(key), None, "Failed for key: {}", key);
        }
    }
}
