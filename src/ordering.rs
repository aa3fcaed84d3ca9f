//! Parsing of `filter[order]` tokens.
//!
//! ```text
//! name          ascending by name
//! asc(name)     ascending by name
//! desc(date)    descending by date
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Order;

static ORDER_MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(asc|desc)\(([A-Za-z0-9_-]+)\)|([A-Za-z0-9_-]+))$")
        .expect("order pattern is valid")
});

/// Parses one order token. Surrounding whitespace is trimmed before
/// matching. Returns `None` when the token has none of the accepted shapes.
pub fn parse_order(token: &str) -> Option<Order> {
    let captures = ORDER_MATCHER.captures(token.trim())?;

    if let Some(field) = captures.get(3) {
        return Some(Order::asc(field.as_str()));
    }

    match (captures.get(1), captures.get(2)) {
        (Some(direction), Some(field)) => Some(Order::new(field.as_str(), direction.as_str())),
        _ => None,
    }
}

/// Parses order tokens in sequence, dropping the ones that don't match.
pub fn parse_orders<I, S>(tokens: I) -> Vec<Order>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref();
            let order = parse_order(token);
            if order.is_none() {
                tracing::trace!(token, "Dropping unrecognized order token");
            }
            order
        })
        .collect()
}
