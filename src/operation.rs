//! Registry of filter operations.
//!
//! An [`Operation`] is an opaque name such as `eq` or `like` that tells the
//! consumer of a parsed filter which comparison to apply. The crate never
//! interprets operations; it only checks them against the set a
//! [`Query`](crate::Query) was built with.

use std::{borrow::Cow, fmt};

use serde::Serialize;

/// A named filter operation.
///
/// Two operations are equal when their names are equal, so a custom
/// `Operation::new("eq")` is interchangeable with [`Operation::EQ`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Operation(Cow<'static, str>);

static BUILTIN: [Operation; 8] = [
    Operation::EQ,
    Operation::LT,
    Operation::LTE,
    Operation::GT,
    Operation::GTE,
    Operation::IN,
    Operation::LIKE,
    Operation::ILIKE,
];

impl Operation {
    /// Equality (`eq`)
    pub const EQ: Operation = Operation(Cow::Borrowed("eq"));
    /// Less than (`lt`)
    pub const LT: Operation = Operation(Cow::Borrowed("lt"));
    /// Less than or equal (`lte`)
    pub const LTE: Operation = Operation(Cow::Borrowed("lte"));
    /// Greater than (`gt`)
    pub const GT: Operation = Operation(Cow::Borrowed("gt"));
    /// Greater than or equal (`gte`)
    pub const GTE: Operation = Operation(Cow::Borrowed("gte"));
    /// Membership (`in`)
    pub const IN: Operation = Operation(Cow::Borrowed("in"));
    /// SQL `LIKE` (`like`)
    pub const LIKE: Operation = Operation(Cow::Borrowed("like"));
    /// Case-insensitive SQL `LIKE` (`ilike`)
    pub const ILIKE: Operation = Operation(Cow::Borrowed("ilike"));

    /// Creates a custom operation.
    pub fn new(name: impl Into<String>) -> Self {
        Operation(Cow::Owned(name.into()))
    }

    /// All operations shipped with the crate.
    pub fn builtin() -> &'static [Operation] {
        &BUILTIN
    }

    /// Finds a built-in operation by name.
    pub fn lookup(name: &str) -> Option<Operation> {
        BUILTIN.iter().find(|op| op.name() == name).cloned()
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn test_lookup_builtin() {
    assert_eq!(Operation::lookup("like"), Some(Operation::LIKE));
    assert_eq!(Operation::lookup("ilike"), Some(Operation::ILIKE));
    assert_eq!(Operation::lookup("notSupported"), None);
}

#[test]
fn test_custom_equals_builtin_by_name() {
    assert_eq!(Operation::new("eq"), Operation::EQ);
    assert_ne!(Operation::new("between"), Operation::EQ);
}
