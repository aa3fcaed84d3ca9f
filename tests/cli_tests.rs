// tests/cli_tests.rs

use filterparams::cli::{
    execute_binding, execute_check, get_doc_topic, get_docs_overview, parse_pair, CheckOptions,
    CliError, DocTopic,
};
use filterparams::QueryError;
use serde_json::{json, Value};

fn check(pairs: &[&str]) -> Result<Value, CliError> {
    let options = CheckOptions {
        pairs: pairs.iter().map(|p| p.to_string()).collect(),
        ..Default::default()
    };
    let out = execute_check(&options)?;
    Ok(serde_json::from_str(&out)?)
}

#[test]
fn test_parse_pair() {
    assert_eq!(
        parse_pair("filter[binding]=a=b").unwrap(),
        ("filter[binding]".to_string(), "a=b".to_string())
    );
    assert_eq!(
        parse_pair("filter[param][x]=").unwrap(),
        ("filter[param][x]".to_string(), String::new())
    );
    assert!(matches!(parse_pair("novalue"), Err(CliError::MalformedPair(_))));
}

#[test]
fn test_check_json_output() {
    let output = check(&[
        "filter[param][name][like][who]=%smith%",
        "filter[param][age][gte]=18",
        "filter[binding]=who & !age",
        "filter[order]=desc(age)",
    ])
    .unwrap();

    assert_eq!(
        output,
        json!({
            "filter": {
                "type": "and",
                "left": {
                    "type": "parameter",
                    "identification": "who",
                    "name": "name",
                    "operation": "like",
                    "value": "%smith%"
                },
                "right": {
                    "type": "negate",
                    "inner": {
                        "type": "parameter",
                        "identification": "age",
                        "name": "age",
                        "operation": "gte",
                        "value": "18"
                    }
                }
            },
            "orders": [{ "field": "age", "descending": true }]
        })
    );
}

#[test]
fn test_check_restricted_operations() {
    let options = CheckOptions {
        pairs: vec!["filter[param][name][like]=%a%".to_string()],
        operations: vec!["eq".to_string()],
        ..Default::default()
    };
    assert!(matches!(
        execute_check(&options),
        Err(CliError::Query(QueryError::UnsupportedOperation(op))) if op == "like"
    ));
}

#[test]
fn test_check_default_operation() {
    let options = CheckOptions {
        pairs: vec!["filter[param][name]=%a%".to_string()],
        default_operation: Some("ilike".to_string()),
        ..Default::default()
    };
    let output: Value = serde_json::from_str(&execute_check(&options).unwrap()).unwrap();
    assert_eq!(output["filter"]["operation"], "ilike");
}

#[test]
fn test_check_allow_empty() {
    let options = CheckOptions {
        pairs: vec!["page=2".to_string()],
        allow_empty: true,
        ..Default::default()
    };
    let output: Value = serde_json::from_str(&execute_check(&options).unwrap()).unwrap();
    assert_eq!(output, json!({ "filter": null, "orders": [] }));

    assert!(matches!(
        check(&["page=2"]),
        Err(CliError::Query(QueryError::Syntax(_)))
    ));
}

#[test]
fn test_check_pretty() {
    let options = CheckOptions {
        pairs: vec!["filter[param][a]=1".to_string()],
        pretty: true,
        ..Default::default()
    };
    assert!(execute_check(&options).unwrap().contains('\n'));
}

#[test]
fn test_binding_command() {
    assert_eq!(
        execute_binding("left & (middle | data) | !right").unwrap(),
        "((left & (middle | data)) | !right)"
    );
    assert!(matches!(
        execute_binding("a &"),
        Err(CliError::Query(QueryError::Syntax(_)))
    ));
}

#[test]
fn test_docs() {
    assert!(get_docs_overview().contains("TOPICS"));
    assert_eq!(DocTopic::from_name("ops"), Some(DocTopic::Operations));
    assert!(get_doc_topic("binding").unwrap().contains("NotExpr"));
    assert!(matches!(
        get_doc_topic("nope"),
        Err(CliError::UnknownTopic(topic)) if topic == "nope"
    ));
}
