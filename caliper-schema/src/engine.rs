// Recursive schema traversal

use caliper_rules::RuleSet;
use serde_json::Value;
use tracing::{debug, trace};

use crate::report::ValidationErrors;
use crate::schema::Schema;

/// Validate `value` against `schema`, returning every deviation as a
/// path-qualified message.
///
/// The candidate is `&mut` because rule-sets configured with a default
/// write that default into the input object when the field is missing; the
/// checks then run against the substituted value. No candidate shape makes
/// this function panic — a malformed value only produces more messages.
///
/// # Examples
///
/// ```
/// use caliper_rules::RuleSet;
/// use caliper_schema::{Schema, validate};
/// use serde_json::json;
///
/// let schema = Schema::object([
///     ("name", RuleSet::new().required().type_string().into()),
/// ]);
///
/// let mut value = json!({ "name": "ada" });
/// assert!(validate(&schema, &mut value).is_empty());
///
/// let mut value = json!({ "nickname": "ada" });
/// assert_eq!(
///     validate(&schema, &mut value).messages(),
///     ["nickname is unexpected", "name is required"]
/// );
/// ```
pub fn validate(schema: &Schema, value: &mut Value) -> ValidationErrors {
    let mut messages = Vec::new();
    walk(schema, Some(value), "", &mut messages);
    debug!("validation finished with {} violation(s)", messages.len());
    ValidationErrors::new(messages)
}

/// `None` means the value is missing from its parent container; walking a
/// schema against a missing value behaves exactly like walking it against
/// an empty object, so required sub-fields still surface.
fn walk(schema: &Schema, value: Option<&mut Value>, path: &str, out: &mut Vec<String>) {
    match schema {
        Schema::Rules(rules) => {
            // A bare rules node has no parent container, so there is
            // nothing to substitute a default into.
            if let Err(errors) = rules.validate(value.map(|v| &*v), path) {
                out.extend(errors);
            }
        }
        Schema::Object(fields) => walk_object(fields, value, path, out),
        Schema::ObjectArray(element) => walk_object_array(element, value, path, out),
        Schema::ValueArray(rules) => walk_value_array(rules, value, path, out),
    }
}

fn walk_object(
    fields: &[(String, Schema)],
    mut value: Option<&mut Value>,
    path: &str,
    out: &mut Vec<String>,
) {
    // Fields present in the candidate but absent from the schema.
    if let Some(Value::Object(map)) = value.as_deref() {
        for key in map.keys() {
            if !fields.iter().any(|(name, _)| name == key) {
                out.push(format!("{} is unexpected", join(path, key)));
            }
        }
    }

    for (name, node) in fields {
        let child_path = join(path, name);
        match node {
            Schema::Rules(rules) => {
                let field = match value.as_deref_mut() {
                    Some(Value::Object(map)) => {
                        if !map.contains_key(name) {
                            if let Some(default) = rules.default_value() {
                                trace!("substituting default for missing field {}", child_path);
                                map.insert(name.clone(), default.clone());
                            }
                        }
                        map.get(name)
                    }
                    // Named fields only exist under object parents.
                    _ => None,
                };
                if let Err(errors) = rules.validate(field, &child_path) {
                    out.extend(errors);
                }
            }
            nested => match value.as_deref_mut() {
                Some(Value::Object(map)) => walk(nested, map.get_mut(name), &child_path, out),
                Some(_) => {
                    // The parent exists but is not an object: recurse
                    // against an empty stand-in so shape errors still
                    // surface. Nothing written to it survives.
                    let mut placeholder = Value::Object(serde_json::Map::new());
                    walk(nested, Some(&mut placeholder), &child_path, out);
                }
                None => walk(nested, None, &child_path, out),
            },
        }
    }
}

fn walk_object_array(
    element: &Schema,
    value: Option<&mut Value>,
    path: &str,
    out: &mut Vec<String>,
) {
    match value {
        Some(Value::Array(items)) => {
            for (i, item) in items.iter_mut().enumerate() {
                walk(element, Some(item), &index(path, i), out);
            }
        }
        // A missing array still gets one pass at index 0 so that required
        // element fields surface.
        None => walk(element, None, &index(path, 0), out),
        Some(_) => {}
    }
}

fn walk_value_array(
    rules: &RuleSet,
    value: Option<&mut Value>,
    path: &str,
    out: &mut Vec<String>,
) {
    match value {
        Some(Value::Array(items)) => {
            if rules.is_required() && items.is_empty() {
                out.push(format!("{path} can not be empty array"));
            }
            for (i, item) in items.iter().enumerate() {
                if let Err(errors) = rules.validate(Some(item), &index(path, i)) {
                    out.extend(errors);
                }
            }
        }
        None => {
            // One pass at the bare path, purely to surface the required
            // message. A missing optional array is skipped entirely.
            if rules.is_required() {
                if let Err(errors) = rules.validate(None, path) {
                    out.extend(errors);
                }
            }
        }
        Some(_) => {
            if rules.is_required() {
                out.push(format!("{path} must be array"));
            }
        }
    }
}

/// `parent.field`, or bare `field` at the root.
fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// `parent[i]`, or bare `[i]` at the root.
fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliper_rules::RuleSet;
    use serde_json::json;

    #[test]
    fn test_path_join() {
        assert_eq!(join("", "name"), "name");
        assert_eq!(join("user", "name"), "user.name");
        assert_eq!(join("users[0]", "name"), "users[0].name");
    }

    #[test]
    fn test_path_index() {
        assert_eq!(index("", 0), "[0]");
        assert_eq!(index("tags", 2), "tags[2]");
    }

    #[test]
    fn test_object_walk_against_a_scalar_reads_fields_as_missing() {
        let schema = Schema::object([("name", RuleSet::new().required().into())]);
        let mut value = json!("not an object");
        let report = validate(&schema, &mut value);
        assert_eq!(report.messages(), ["name is required"]);
    }

    #[test]
    fn test_missing_nested_object_behaves_like_an_empty_one() {
        let schema = Schema::object([(
            "profile",
            Schema::object([
                ("name", RuleSet::new().required().into()),
                ("bio", RuleSet::new().type_string().into()),
            ]),
        )]);
        let mut value = json!({});
        let report = validate(&schema, &mut value);
        assert_eq!(report.messages(), ["profile.name is required"]);
    }

    #[test]
    fn test_object_array_ignores_a_non_array_candidate() {
        let schema = Schema::object([(
            "users",
            Schema::array(Schema::object([(
                "name",
                RuleSet::new().required().into(),
            )])),
        )]);
        let mut value = json!({ "users": "not an array" });
        assert!(validate(&schema, &mut value).is_empty());
    }

    #[test]
    fn test_rules_at_the_root() {
        let schema = Schema::from(RuleSet::new().type_integer());
        let mut value = json!(5);
        assert!(validate(&schema, &mut value).is_empty());
    }

    #[test]
    fn test_nested_arrays_under_a_scalar_parent() {
        let schema = Schema::object([(
            "cfg",
            Schema::object([
                (
                    "tags",
                    Schema::array(RuleSet::new().required().type_string().into()),
                ),
                (
                    "users",
                    Schema::array(Schema::object([(
                        "name",
                        RuleSet::new().required().into(),
                    )])),
                ),
            ]),
        )]);
        // cfg is present but not an object, so its sub-schemas see an empty
        // stand-in: the primitive array reports its shape, the object array
        // has nothing to iterate
        let mut value = json!({ "cfg": 42 });
        let report = validate(&schema, &mut value);
        assert_eq!(report.messages(), ["cfg.tags must be array"]);
    }

    #[test]
    fn test_array_of_objects_at_the_root() {
        let schema = Schema::array(Schema::object([(
            "name",
            RuleSet::new().required().into(),
        )]));
        let mut value = json!([{}, { "name": "ada" }]);
        let report = validate(&schema, &mut value);
        assert_eq!(report.messages(), ["[0].name is required"]);
    }

    #[test]
    fn test_array_of_primitives_at_the_root() {
        let schema = Schema::array(RuleSet::new().required().type_string().into());
        let mut value = json!(["a", 3]);
        let report = validate(&schema, &mut value);
        assert_eq!(report.messages(), ["[1] must be string"]);
    }
}
