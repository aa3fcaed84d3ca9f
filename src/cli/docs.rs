//! Documentation content for the filterparams CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Keys,
    Binding,
    Order,
    Operations,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keys" | "key" | "params" => Some(Self::Keys),
            "binding" | "bindings" | "grammar" => Some(Self::Binding),
            "order" | "orders" | "sort" => Some(Self::Order),
            "operations" | "operation" | "ops" => Some(Self::Operations),
            _ => None,
        }
    }

    fn content(self) -> &'static str {
        match self {
            Self::Keys => KEYS,
            Self::Binding => BINDING,
            Self::Order => ORDER,
            Self::Operations => OPERATIONS,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"FILTERPARAMS DOCUMENTATION

filterparams turns filter[...] query arguments into a boolean filter tree
and a list of sort directives.

  filterparams check 'filter[param][name][like]=%smith%' 'filter[order]=desc(name)'

TOPICS

  keys         Recognized query keys
  binding      Boolean binding grammar
  order        Sort tokens
  operations   Built-in filter operations

Run 'filterparams docs <topic>' for details.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    DocTopic::from_name(name)
        .map(DocTopic::content)
        .ok_or_else(|| CliError::UnknownTopic(name.to_string()))
}

const KEYS: &str = r#"KEYS

  filter[param][<field>]                          operation = default (eq)
  filter[param][<field>][<operation>]             identification = field
  filter[param][<field>][<operation>][<alias>]    identification = alias
  filter[binding]                                 binding expression
  filter[order]                                   sort token, repeatable

Any other key is ignored. A param key given twice keeps its last value.
"#;

const BINDING: &str = r#"BINDING

  Expr    := OrExpr
  OrExpr  := AndExpr ( '|' AndExpr )*
  AndExpr := NotExpr ( '&' NotExpr )*
  NotExpr := '!' NotExpr | Atom
  Atom    := Identifier | '(' Expr ')'

'!' binds tighter than '&', '&' tighter than '|'. Every identifier must be
declared by a filter[param] key. Without a binding all params are joined
with '&'.

  filterparams binding 'left & (middle | data) | !right'
  => ((left & (middle | data)) | !right)
"#;

const ORDER: &str = r#"ORDER

  name          ascending
  asc(name)     ascending
  desc(name)    descending

Field names use letters, digits, '_' and '-'. Tokens of any other shape are
dropped. Earlier tokens take precedence.
"#;

const OPERATIONS: &str = r#"OPERATIONS

  eq      equal
  lt      less than
  lte     less than or equal
  gt      greater than
  gte     greater than or equal
  in      membership
  like    SQL LIKE
  ilike   case-insensitive SQL LIKE

'check' enables all of them unless --operation is given.
"#;
