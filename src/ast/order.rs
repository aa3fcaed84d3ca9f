use serde::Serialize;

/// One sort key.
///
/// Immutable once created. A sequence of orders is applied in sequence
/// order, earlier entries taking precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    field: String,
    descending: bool,
}

impl Order {
    /// `"desc"` (any case) sorts descending, anything else ascending.
    pub fn new(field: impl Into<String>, sort_order: &str) -> Self {
        if sort_order.eq_ignore_ascii_case("desc") {
            Order::desc(field)
        } else {
            Order::asc(field)
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Order {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Order {
            field: field.into(),
            descending: true,
        }
    }

    /// Field to order by
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }
}
