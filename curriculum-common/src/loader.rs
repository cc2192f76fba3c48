//! Curriculum source loading
//!
//! The source file is a JSON array of grouping objects, one per curriculum
//! year. Each grouping maps an arbitrary key (usually a semester label) to
//! either a single course entry or an array of entries:
//!
//! ```json
//! [
//!   { "1st Sem": [ { "code": "IT 101", ... } ], "2nd Sem": [ ... ] },
//!   { "1st Sem": [ ... ] }
//! ]
//! ```
//!
//! Flattening keeps entry order (groupings in file order, keys in file order,
//! entries in array order) and drops the grouping keys.

use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Default source file name, resolved against the working directory
pub const DEFAULT_SOURCE_FILE: &str = "courses.json";

/// Read and parse the whole source file
pub fn read_source(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

/// Flatten a parsed curriculum document into one array of raw entries
///
/// Entries are not inspected here; that is the validator's job.
pub fn flatten_curriculum(document: &Value) -> Result<Value> {
    let groupings = document.as_array().ok_or_else(|| {
        Error::Format(format!(
            "expected an array of grouping objects, found {}",
            json_type_name(document)
        ))
    })?;

    let mut entries = Vec::new();

    for (index, grouping) in groupings.iter().enumerate() {
        let grouping = grouping.as_object().ok_or_else(|| {
            Error::Format(format!(
                "grouping {} is {}, expected an object",
                index,
                json_type_name(grouping)
            ))
        })?;

        for value in grouping.values() {
            match value {
                Value::Array(items) => entries.extend(items.iter().cloned()),
                other => entries.push(other.clone()),
            }
        }
    }

    Ok(Value::Array(entries))
}

/// Read `path` and flatten it, ready for validation
pub fn load_curriculum(path: &Path) -> Result<Value> {
    let document = read_source(path)?;
    let entries = flatten_curriculum(&document)?;

    let count = entries.as_array().map_or(0, Vec::len);
    info!("Read {} course entries from {}", count, path.display());

    Ok(entries)
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
