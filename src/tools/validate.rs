//! Argument validation for `search_notices`.
//!
//! Checks the raw call arguments against the rules also declared in the
//! tool's JSON schema, collecting every violation instead of stopping at the
//! first one.

use std::fmt;

use serde_json::Value;

use super::search_notices::SearchRequest;

pub const DEFAULT_LIMIT: u32 = 5;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;

/// A single rule violation, addressed by its field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub reason: String,
}

impl FieldViolation {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// All violations found in one set of arguments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate and normalize raw tool arguments into a [`SearchRequest`].
pub fn validate(arguments: &Value) -> Result<SearchRequest, ValidationErrors> {
    let Some(obj) = arguments.as_object() else {
        return Err(ValidationErrors {
            violations: vec![FieldViolation::new("(root)", "expected an object")],
        });
    };

    let mut violations = Vec::new();

    let query = match obj.get("query") {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new("query", "required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(FieldViolation::new(
                "query",
                "must contain at least 1 character",
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(FieldViolation::new("query", "expected a string"));
            None
        }
    };

    let limit = match obj.get("limit") {
        None | Some(Value::Null) => Some(DEFAULT_LIMIT),
        Some(Value::Number(n)) => match integer_value(n) {
            Some(v) if (i64::from(MIN_LIMIT)..=i64::from(MAX_LIMIT)).contains(&v) => {
                Some(v as u32)
            }
            Some(v) if v < i64::from(MIN_LIMIT) => {
                violations.push(FieldViolation::new(
                    "limit",
                    format!("must be greater than or equal to {MIN_LIMIT}"),
                ));
                None
            }
            Some(_) => {
                violations.push(FieldViolation::new(
                    "limit",
                    format!("must be less than or equal to {MAX_LIMIT}"),
                ));
                None
            }
            None => {
                violations.push(FieldViolation::new("limit", "expected an integer"));
                None
            }
        },
        Some(_) => {
            violations.push(FieldViolation::new("limit", "expected a number"));
            None
        }
    };

    match (query, limit) {
        (Some(query), Some(limit)) if violations.is_empty() => Ok(SearchRequest { query, limit }),
        _ => Err(ValidationErrors { violations }),
    }
}

/// Integer view of a JSON number; `3.0` counts as an integer, `2.5` does not.
fn integer_value(n: &serde_json::Number) -> Option<i64> {
    if let Some(v) = n.as_i64() {
        return Some(v);
    }
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.is_finite())
        .map(|f| f.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}
