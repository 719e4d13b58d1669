//! Field-level validation rules for JSON values.
//!
//! A [`RuleSet`] is a fluent, reusable chain of checks for a single field:
//! presence, type, numeric and length bounds, email/regexp shape, and
//! custom predicates. The chain always evaluates in a fixed order —
//! required first, then type checks, then value constraints — so a missing
//! or mistyped value never trips checks written for the expected type.
//!
//! # Examples
//!
//! ```
//! use caliper_rules::RuleSet;
//! use serde_json::json;
//!
//! let username = RuleSet::new().required().type_string().min_length(3);
//!
//! assert!(username.validate(Some(&json!("ada")), "username").is_ok());
//!
//! let errors = username.validate(Some(&json!("ab")), "username").unwrap_err();
//! assert_eq!(errors, vec!["username length must be greater than 3"]);
//!
//! // A missing optional field is always valid.
//! let nickname = RuleSet::new().type_string();
//! assert!(nickname.validate(None, "nickname").is_ok());
//! ```
//!
//! Failure messages can be replaced per rule:
//!
//! ```
//! use caliper_rules::RuleSet;
//! use serde_json::json;
//!
//! let age = RuleSet::new()
//!     .min(21.0)
//!     .message(|path| format!("{path} must be at least 21"));
//!
//! let errors = age.validate(Some(&json!(18)), "age").unwrap_err();
//! assert_eq!(errors, vec!["age must be at least 21"]);
//! ```

mod checks;
mod rules;

pub use rules::*;
