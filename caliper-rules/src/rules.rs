// Rule-set builder and chain evaluation

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::checks;

/// Formats the failure message for a rule, given the field's path.
pub type MessageFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Caller-supplied predicate for [`RuleSet::custom`] rules.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// What a rule tells the chain after running: keep going, or stop because
/// the remaining checks would be meaningless (missing value, wrong type).
#[derive(Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Continue,
    Stop,
}

#[derive(Clone)]
enum RuleKind {
    Required,
    TypeInteger,
    TypeFloat,
    TypeObject,
    TypeString,
    Min(f64),
    Max(f64),
    MinLength(usize),
    MaxLength(usize),
    Email,
    Regexp(Regex),
    Custom(Predicate),
}

impl RuleKind {
    /// Priority class within the chain: the required check runs first, then
    /// type checks, then value constraints. Call order is preserved inside
    /// a class.
    fn priority(&self) -> u8 {
        match self {
            RuleKind::Required => 0,
            RuleKind::TypeInteger
            | RuleKind::TypeFloat
            | RuleKind::TypeObject
            | RuleKind::TypeString => 1,
            _ => 2,
        }
    }

    fn default_message(&self, path: &str) -> String {
        match self {
            RuleKind::Required => format!("{path} is required"),
            RuleKind::TypeInteger => format!("{path} must be integer"),
            RuleKind::TypeFloat => format!("{path} must be float"),
            RuleKind::TypeObject => format!("{path} must be object"),
            RuleKind::TypeString => format!("{path} must be string"),
            RuleKind::Min(bound) => format!("{path} must be greater than {bound}"),
            RuleKind::Max(bound) => format!("{path} must be less than {bound}"),
            RuleKind::MinLength(bound) => {
                format!("{path} length must be greater than {bound}")
            }
            RuleKind::MaxLength(bound) => {
                format!("{path} length must be less than {bound}")
            }
            RuleKind::Email => format!("{path} must be email"),
            RuleKind::Regexp(pattern) => {
                format!("{path} must be valid for regular expression {pattern}")
            }
            RuleKind::Custom(_) => format!("{path} must be valid for custom function"),
        }
    }
}

#[derive(Clone)]
struct Rule {
    kind: RuleKind,
    message: Option<MessageFn>,
}

impl Rule {
    fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    fn render(&self, path: &str) -> String {
        match &self.message {
            Some(custom) => custom(path),
            None => self.kind.default_message(path),
        }
    }

    fn check(&self, value: Option<&Value>, path: &str, errors: &mut Vec<String>) -> Outcome {
        let value = match value {
            Some(value) => value,
            None => {
                // Only the required rule reacts to a missing value, and it
                // sits first in the chain, so nothing else ever sees one.
                if matches!(self.kind, RuleKind::Required) {
                    errors.push(self.render(path));
                    return Outcome::Stop;
                }
                return Outcome::Continue;
            }
        };

        match &self.kind {
            RuleKind::Required => Outcome::Continue,
            RuleKind::TypeInteger => self.type_check(checks::is_integer(value), path, errors),
            RuleKind::TypeFloat => self.type_check(checks::is_float(value), path, errors),
            RuleKind::TypeObject => self.type_check(value.is_object(), path, errors),
            RuleKind::TypeString => self.type_check(value.is_string(), path, errors),
            RuleKind::Min(bound) => {
                // Non-numeric values are the type checks' business.
                if let Some(n) = value.as_f64() {
                    if n < *bound {
                        errors.push(self.render(path));
                    }
                }
                Outcome::Continue
            }
            RuleKind::Max(bound) => {
                if let Some(n) = value.as_f64() {
                    if n > *bound {
                        errors.push(self.render(path));
                    }
                }
                Outcome::Continue
            }
            RuleKind::MinLength(bound) => {
                if let Some(len) = checks::length_of(value) {
                    if len < *bound {
                        errors.push(self.render(path));
                    }
                }
                Outcome::Continue
            }
            RuleKind::MaxLength(bound) => {
                if let Some(len) = checks::length_of(value) {
                    if len > *bound {
                        errors.push(self.render(path));
                    }
                }
                Outcome::Continue
            }
            RuleKind::Email => {
                if !checks::is_email(value) {
                    errors.push(self.render(path));
                }
                Outcome::Continue
            }
            RuleKind::Regexp(pattern) => {
                if !pattern.is_match(&checks::text_of(value)) {
                    errors.push(self.render(path));
                }
                Outcome::Continue
            }
            RuleKind::Custom(predicate) => {
                if !predicate(value) {
                    errors.push(self.render(path));
                }
                Outcome::Continue
            }
        }
    }

    /// Type mismatches stop the chain so that constraints written for the
    /// expected type never fire on an incompatible value.
    fn type_check(&self, ok: bool, path: &str, errors: &mut Vec<String>) -> Outcome {
        if ok {
            Outcome::Continue
        } else {
            errors.push(self.render(path));
            Outcome::Stop
        }
    }
}

/// A reusable, ordered chain of checks for a single field.
///
/// Built fluently, then shared read-only across any number of validations;
/// every [`validate`](RuleSet::validate) call keeps its error state local,
/// so one instance can serve concurrent validations.
///
/// # Examples
///
/// ```
/// use caliper_rules::RuleSet;
/// use serde_json::json;
///
/// let age = RuleSet::new().required().type_integer().min(0.0);
///
/// assert!(age.validate(Some(&json!(42)), "age").is_ok());
///
/// let errors = age.validate(Some(&json!("old")), "age").unwrap_err();
/// assert_eq!(errors, vec!["age must be integer"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    required: bool,
    default: Option<Value>,
    last_added: Option<usize>,
}

impl RuleSet {
    /// An empty, non-required rule-set with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keeping the chain ordered by priority class, preserving call
    /// order within a class.
    fn push_rule(&mut self, rule: Rule) {
        let class = rule.kind.priority();
        let at = self
            .rules
            .iter()
            .take_while(|existing| existing.kind.priority() <= class)
            .count();
        self.rules.insert(at, rule);
        self.last_added = Some(at);
    }

    /// Fail when the field is missing entirely. A present `null` passes.
    ///
    /// Idempotent: calling this twice adds a single check.
    pub fn required(mut self) -> Self {
        if self.required {
            return self;
        }
        self.required = true;
        self.push_rule(Rule::new(RuleKind::Required));
        self
    }

    /// Fail unless the value is a whole number.
    pub fn type_integer(mut self) -> Self {
        self.push_rule(Rule::new(RuleKind::TypeInteger));
        self
    }

    /// Fail unless the value is a number.
    pub fn type_float(mut self) -> Self {
        self.push_rule(Rule::new(RuleKind::TypeFloat));
        self
    }

    /// Fail unless the value is an object.
    pub fn type_object(mut self) -> Self {
        self.push_rule(Rule::new(RuleKind::TypeObject));
        self
    }

    /// Fail unless the value is a string.
    pub fn type_string(mut self) -> Self {
        self.push_rule(Rule::new(RuleKind::TypeString));
        self
    }

    /// Fail when a numeric value is below `bound`.
    ///
    /// # Panics
    ///
    /// Panics when `bound` is not a finite number.
    pub fn min(mut self, bound: f64) -> Self {
        assert!(bound.is_finite(), "min() bound must be a finite number");
        self.push_rule(Rule::new(RuleKind::Min(bound)));
        self
    }

    /// Fail when a numeric value is above `bound`.
    ///
    /// # Panics
    ///
    /// Panics when `bound` is not a finite number.
    pub fn max(mut self, bound: f64) -> Self {
        assert!(bound.is_finite(), "max() bound must be a finite number");
        self.push_rule(Rule::new(RuleKind::Max(bound)));
        self
    }

    /// Fail when a string or array is shorter than `bound`.
    pub fn min_length(mut self, bound: usize) -> Self {
        self.push_rule(Rule::new(RuleKind::MinLength(bound)));
        self
    }

    /// Fail when a string or array is longer than `bound`.
    pub fn max_length(mut self, bound: usize) -> Self {
        self.push_rule(Rule::new(RuleKind::MaxLength(bound)));
        self
    }

    /// Fail unless the value is an email address.
    pub fn email(mut self) -> Self {
        self.push_rule(Rule::new(RuleKind::Email));
        self
    }

    /// Fail unless the value's string form matches `pattern`.
    pub fn regexp(mut self, pattern: Regex) -> Self {
        self.push_rule(Rule::new(RuleKind::Regexp(pattern)));
        self
    }

    /// Fail unless `predicate` accepts the value.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.push_rule(Rule::new(RuleKind::Custom(Arc::new(predicate))));
        self
    }

    /// Value to write into the candidate when the field is missing.
    ///
    /// This is a caller-visible mutation: the engine inserts the default
    /// into the input object before the chain runs, and the checks then see
    /// the substituted value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Replace the failure message of the most recently added rule.
    ///
    /// The formatter receives the field's path; capture any bound or
    /// pattern you want the message to mention. No effect before the first
    /// rule is added.
    pub fn message<F>(mut self, format: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        if let Some(at) = self.last_added {
            self.rules[at].message = Some(Arc::new(format));
        }
        self
    }

    /// Whether a missing value fails validation.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The configured default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Run the chain against one value.
    ///
    /// `None` means the field is missing from its container, which is
    /// distinct from a present `null`. A missing optional field is always
    /// valid, whatever else is configured. Errors accumulate in a buffer
    /// local to this call.
    pub fn validate(&self, value: Option<&Value>, path: &str) -> Result<(), Vec<String>> {
        if value.is_none() && !self.required {
            return Ok(());
        }

        let mut errors = Vec::new();
        for rule in &self.rules {
            if rule.check(value, path, &mut errors) == Outcome::Stop {
                break;
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
