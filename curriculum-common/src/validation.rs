//! Course entry validation
//!
//! Checks the shape of every flattened entry before anything touches the
//! store. Values are never coerced or defaulted: `"units": "3"` is a
//! violation, not a 3. A single violation rejects the whole batch, but the
//! report lists every violation found so the source file can be fixed in
//! one pass.

use serde_json::{Map, Value};
use std::fmt;

use crate::db::Course;
use crate::loader::json_type_name;

/// One problem found in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position of the entry in the flattened batch; `None` for batch-level problems
    pub index: Option<usize>,
    /// Offending field, e.g. `units` or `tags[2]`
    pub field: Option<String>,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.index, &self.field) {
            (Some(index), Some(field)) => write!(f, "entry {} `{}`: {}", index, field, self.reason),
            (Some(index), None) => write!(f, "entry {}: {}", index, self.reason),
            (None, _) => write!(f, "{}", self.reason),
        }
    }
}

/// Every violation found in a rejected batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid course field(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Validate a flattened batch and convert it to typed courses
///
/// Succeeds only if every entry is valid; the returned courses keep the
/// batch order.
pub fn validate_batch(entries: &Value) -> Result<Vec<Course>, ValidationReport> {
    let Some(entries) = entries.as_array() else {
        return Err(ValidationReport {
            violations: vec![Violation {
                index: None,
                field: None,
                reason: format!(
                    "invalid courses data format: expected an array, found {}",
                    json_type_name(entries)
                ),
            }],
        });
    };

    let mut courses = Vec::with_capacity(entries.len());
    let mut violations = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if let Some(course) = validate_entry(index, entry, &mut violations) {
            courses.push(course);
        }
    }

    if violations.is_empty() {
        Ok(courses)
    } else {
        Err(ValidationReport { violations })
    }
}

fn validate_entry(index: usize, entry: &Value, violations: &mut Vec<Violation>) -> Option<Course> {
    let Some(object) = entry.as_object() else {
        violations.push(Violation {
            index: Some(index),
            field: None,
            reason: format!("expected an object, found {}", json_type_name(entry)),
        });
        return None;
    };

    let before = violations.len();
    let mut violation = |field: String, reason: String| {
        violations.push(Violation {
            index: Some(index),
            field: Some(field),
            reason,
        });
    };

    let code = required_string(object, "code", &mut violation);
    let description = required_string(object, "description", &mut violation);

    let units = match object.get("units") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            violation(
                "units".to_string(),
                format!("expected a number, found {}", json_type_name(other)),
            );
            None
        }
        None => {
            violation("units".to_string(), "is required".to_string());
            None
        }
    };

    let tags = match object.get("tags") {
        Some(Value::Array(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for (position, item) in items.iter().enumerate() {
                match item {
                    Value::String(tag) if !tag.is_empty() => tags.push(tag.clone()),
                    Value::String(_) => violation(
                        format!("tags[{}]", position),
                        "must not be empty".to_string(),
                    ),
                    other => violation(
                        format!("tags[{}]", position),
                        format!("expected a string, found {}", json_type_name(other)),
                    ),
                }
            }
            Some(tags)
        }
        Some(other) => {
            violation(
                "tags".to_string(),
                format!("expected an array, found {}", json_type_name(other)),
            );
            None
        }
        None => {
            violation("tags".to_string(), "is required".to_string());
            None
        }
    };

    if violations.len() != before {
        return None;
    }

    Some(Course {
        code: code?,
        description: description?,
        units: units?,
        tags: tags?,
    })
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    violation: &mut impl FnMut(String, String),
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            violation(field.to_string(), "must not be empty".to_string());
            None
        }
        Some(other) => {
            violation(
                field.to_string(),
                format!("expected a string, found {}", json_type_name(other)),
            );
            None
        }
        None => {
            violation(field.to_string(), "is required".to_string());
            None
        }
    }
}
