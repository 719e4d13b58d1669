//! Integration tests for common Caliper workflows.
//!
//! These tests verify that the most common use cases work correctly
//! through the facade crate.

use caliper::prelude::*;
use serde_json::json;

// =============================================================================
// Signup Form Validation
// =============================================================================

#[test]
fn test_signup_form_workflow() {
    let signup = Schema::object([
        (
            "username",
            RuleSet::new()
                .required()
                .type_string()
                .min_length(3)
                .max_length(32)
                .into(),
        ),
        ("email", RuleSet::new().required().email().into()),
        (
            "age",
            RuleSet::new().type_integer().min(13.0).into(),
        ),
    ]);

    let mut ok = json!({
        "username": "ada_lovelace",
        "email": "ada@example.com",
        "age": 36,
    });
    assert!(validate(&signup, &mut ok).is_empty());

    let mut bad = json!({
        "username": "al",
        "email": "not-an-email",
        "age": 9,
    });
    let report = validate(&signup, &mut bad);
    assert_eq!(
        report.messages(),
        [
            "username length must be greater than 3",
            "email must be email",
            "age must be greater than 13",
        ]
    );
}

// =============================================================================
// Config Document with Defaults
// =============================================================================

#[test]
fn test_config_defaults_workflow() {
    let config = Schema::object([
        ("host", RuleSet::new().type_string().with_default("127.0.0.1").into()),
        ("port", RuleSet::new().type_integer().min(1.0).max(65535.0).with_default(8080).into()),
        ("debug", RuleSet::new().with_default(false).into()),
    ]);

    let mut value = json!({ "host": "0.0.0.0" });
    let report = validate(&config, &mut value);

    assert!(report.is_empty());
    // missing fields were filled in from the defaults, in place
    assert_eq!(
        value,
        json!({ "host": "0.0.0.0", "port": 8080, "debug": false })
    );
}

// =============================================================================
// Custom Rules and Messages
// =============================================================================

#[test]
fn test_custom_rules_workflow() {
    let schema = Schema::object([(
        "sku",
        RuleSet::new()
            .required()
            .type_string()
            .regexp(regex::Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap())
            .message(|path| format!("{path} must look like ABC-1234"))
            .into(),
    )]);

    let mut value = json!({ "sku": "widget" });
    let report = validate(&schema, &mut value);
    assert_eq!(report.messages(), ["sku must look like ABC-1234"]);
}

// =============================================================================
// Report Consumption
// =============================================================================

#[test]
fn test_report_consumption_workflow() {
    let schema = Schema::object([("name", RuleSet::new().required().into())]);
    let mut value = json!({ "stray": 1 });
    let report = validate(&schema, &mut value);

    assert_eq!(report.len(), 2);
    assert_eq!(
        report.to_string(),
        "stray is unexpected\nname is required\n"
    );
    assert_eq!(
        report.to_json(),
        json!({ "errors": ["stray is unexpected", "name is required"] })
    );

    let messages: Vec<String> = report.into_iter().collect();
    assert_eq!(messages, vec!["stray is unexpected", "name is required"]);
}
