//! Schema-driven validation of nested JSON values.
//!
//! A [`Schema`] describes the expected shape of a value tree — objects,
//! arrays of objects, arrays of primitives — with
//! [`RuleSet`](caliper_rules::RuleSet) leaves attached to the scalar
//! fields. [`validate`] walks the schema against a candidate value and
//! collects every deviation into a [`ValidationErrors`] report, each
//! message prefixed with the dotted/bracketed path of the offending field.
//!
//! # Examples
//!
//! ```
//! use caliper_rules::RuleSet;
//! use caliper_schema::{Schema, validate};
//! use serde_json::json;
//!
//! let schema = Schema::object([
//!     ("name", RuleSet::new().required().type_string().into()),
//!     (
//!         "addresses",
//!         Schema::array(Schema::object([
//!             ("zip", RuleSet::new().required().into()),
//!         ])),
//!     ),
//! ]);
//!
//! let mut value = json!({
//!     "name": "ada",
//!     "addresses": [{ "zip": "10115" }, {}],
//! });
//!
//! let report = validate(&schema, &mut value);
//! assert_eq!(report.messages(), ["addresses[1].zip is required"]);
//! ```

mod engine;
mod report;
mod schema;

pub use engine::*;
pub use report::*;
pub use schema::*;
