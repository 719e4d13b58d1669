// Caliper - declarative validation for nested JSON values
//
// This library provides fluent rule-set builders for field-level checks and
// a recursive traversal engine that walks a schema tree against a candidate
// value, collecting path-qualified diagnostics.

// Re-export the rule-set builder
pub use caliper_rules::*;

// Re-export the schema tree and traversal engine
pub use caliper_schema::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{RuleSet, Schema, ValidationErrors, validate};
}
