// tests/order_tests.rs

use filterparams::ast::Order;
use filterparams::ordering::{parse_order, parse_orders};

#[test]
fn test_bare_field_is_ascending() {
    assert_eq!(parse_order("name"), Some(Order::asc("name")));
}

#[test]
fn test_asc_and_desc() {
    assert_eq!(parse_order("asc(name)"), Some(Order::asc("name")));
    assert_eq!(parse_order("desc(date)"), Some(Order::desc("date")));
}

#[test]
fn test_field_characters() {
    assert_eq!(parse_order("created_at"), Some(Order::asc("created_at")));
    assert_eq!(parse_order("desc(first-name2)"), Some(Order::desc("first-name2")));
}

#[test]
fn test_direction_words_as_bare_fields() {
    assert_eq!(parse_order("asc"), Some(Order::asc("asc")));
    assert_eq!(parse_order("desc"), Some(Order::asc("desc")));
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    assert_eq!(parse_order("  desc(date) "), Some(Order::desc("date")));
}

#[test]
fn test_non_matching_tokens() {
    for token in [
        "",
        "desc()",
        "desc(date",
        "down(date)",
        "desc(a b)",
        "name.sub",
        "DESC(date)",
        "a,b",
    ] {
        assert_eq!(parse_order(token), None, "Failed for token: {:?}", token);
    }
}

#[test]
fn test_orders_keep_sequence_and_drop_invalid() {
    let orders = parse_orders(["name", "bad token", "desc(date)", "asc(id)"]);
    assert_eq!(
        orders,
        vec![Order::asc("name"), Order::desc("date"), Order::asc("id")]
    );

    let fields: Vec<_> = orders.iter().map(Order::field).collect();
    let descending: Vec<_> = orders.iter().map(Order::is_descending).collect();
    assert_eq!(fields, vec!["name", "date", "id"]);
    assert_eq!(descending, vec![false, true, false]);
}

#[test]
fn test_order_new_sort_order() {
    assert!(Order::new("date", "desc").is_descending());
    assert!(Order::new("date", "DESC").is_descending());
    assert!(!Order::new("date", "asc").is_descending());
    assert!(!Order::new("date", "sideways").is_descending());
}
