// tests/builder_tests.rs

use filterparams::{Operation, QueryBuilder, QueryError};

#[test]
fn test_enable_operation() {
    let mut builder = QueryBuilder::new();
    builder.enable_operation(Operation::EQ);
    assert!(builder.has_operation(Operation::EQ.name()));
}

#[test]
fn test_has_operation_negative() {
    let mut builder = QueryBuilder::new();
    builder.enable_operation(Operation::GTE);
    assert!(!builder.has_operation("eq"));
}

#[test]
fn test_get_operation() {
    let mut builder = QueryBuilder::new();
    builder.enable_operation(Operation::EQ);
    assert_eq!(builder.get_operation("eq"), Ok(&Operation::EQ));
}

#[test]
fn test_get_operation_negative() {
    let mut builder = QueryBuilder::new();
    builder.enable_operation(Operation::LIKE);
    assert_eq!(
        builder.get_operation("eq"),
        Err(QueryError::UnknownOperation("eq".to_string()))
    );
}

#[test]
fn test_enable_twice_is_noop() {
    let query = QueryBuilder::new()
        .enable_operation(Operation::EQ)
        .enable_operation(Operation::new("eq"))
        .build();
    assert_eq!(query.operations(), &[Operation::EQ]);
}

#[test]
fn test_enable_all_and_remove() {
    let mut builder = QueryBuilder::new();
    builder.enable_all_operations();
    for op in Operation::builtin() {
        assert!(builder.has_operation(op.name()), "Missing {}", op);
    }

    builder.remove_operations();
    assert!(!builder.has_operation("eq"));
    assert!(builder.build().operations().is_empty());
}

#[test]
fn test_default_operation() {
    assert_eq!(QueryBuilder::new().build().default_operation(), &Operation::EQ);
    let query = QueryBuilder::new().default_operation(Operation::ILIKE).build();
    assert_eq!(query.default_operation(), &Operation::ILIKE);
}

#[test]
fn test_built_query_is_independent_of_builder() {
    let mut builder = QueryBuilder::new();
    builder.enable_operation(Operation::EQ);
    let query = builder.build();

    builder.remove_operations().enable_operation(Operation::LT);
    assert_eq!(query.operations(), &[Operation::EQ]);
    assert!(query.parse([("filter[param][a]", "1")]).is_ok());
    assert!(builder.build().parse([("filter[param][a]", "1")]).is_err());
}
