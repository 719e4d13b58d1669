// Schema tree

use caliper_rules::RuleSet;

/// One node of a validation schema.
///
/// A schema is a tree of three composable shapes — object, array of
/// objects, array of primitives — with rule-set leaves attached to the
/// scalar fields. The shape of every node is fixed at construction, so the
/// engine dispatches by pattern match rather than by probing the candidate.
#[derive(Clone)]
pub enum Schema {
    /// Chain of checks for a single field.
    Rules(RuleSet),
    /// Mapping from field name to sub-schema, in declaration order.
    Object(Vec<(String, Schema)>),
    /// One schema applied to every element of a candidate array.
    ObjectArray(Box<Schema>),
    /// One rule-set applied to every element of a candidate array of
    /// primitives.
    ValueArray(RuleSet),
}

impl Schema {
    /// Object schema from `(name, node)` pairs.
    ///
    /// Field order is preserved and governs the order of emitted errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper_rules::RuleSet;
    /// use caliper_schema::Schema;
    ///
    /// let user = Schema::object([
    ///     ("name", RuleSet::new().required().type_string().into()),
    ///     ("age", RuleSet::new().type_integer().min(0.0).into()),
    /// ]);
    /// ```
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Object(
            fields
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    /// Array schema.
    ///
    /// A rules-leaf element makes an array-of-primitives schema; any other
    /// element makes an array-of-objects schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use caliper_rules::RuleSet;
    /// use caliper_schema::Schema;
    ///
    /// // every element is a string
    /// let tags = Schema::array(RuleSet::new().required().type_string().into());
    ///
    /// // every element is an object with a `name` field
    /// let users = Schema::array(Schema::object([
    ///     ("name", RuleSet::new().required().into()),
    /// ]));
    /// ```
    pub fn array(element: Schema) -> Self {
        match element {
            Schema::Rules(rules) => Schema::ValueArray(rules),
            other => Schema::ObjectArray(Box::new(other)),
        }
    }
}

impl From<RuleSet> for Schema {
    fn from(rules: RuleSet) -> Self {
        Schema::Rules(rules)
    }
}
