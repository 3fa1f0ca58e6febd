//! Validation of untyped work item candidates.
//!
//! A candidate is valid when:
//! - it is a JSON object
//! - it has both the `command` and `priority` keys
//! - `command` is a string
//! - `priority` is a non-negative integer
//!
//! Any other keys are ignored.

use pqueue_models::{WorkItem, COMMAND_KEY, PRIORITY_KEY};
use serde_json::Value;

use crate::error::{QueueError, Result};

/// Validates `candidate` and returns an owned copy of its canonical fields.
///
/// Checks run in a fixed order and the first failure is returned. The
/// candidate is never retained: the command is copied into a new `String`.
pub fn validate_item(candidate: &Value) -> Result<WorkItem> {
    let map = candidate.as_object().ok_or_else(|| {
        QueueError::InvalidType(format!(
            "expected a mapping, received {}",
            kind(candidate)
        ))
    })?;

    let missing: Vec<&str> = [COMMAND_KEY, PRIORITY_KEY]
        .into_iter()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(QueueError::MissingField(missing.join(", ")));
    }

    let command = &map[COMMAND_KEY];
    let command = command.as_str().ok_or_else(|| {
        QueueError::InvalidType(format!(
            "`{COMMAND_KEY}` expected string, received {}",
            kind(command)
        ))
    })?;

    let priority = &map[PRIORITY_KEY];
    let priority = match priority {
        Value::Number(n) if n.is_u64() => n.as_u64(),
        Value::Number(n) if n.is_i64() => {
            return Err(QueueError::InvalidValue(format!(
                "`{PRIORITY_KEY}` expected non-negative integer, received {n}"
            )));
        }
        _ => None,
    }
    .ok_or_else(|| {
        QueueError::InvalidType(format!(
            "`{PRIORITY_KEY}` expected integer, received {}",
            kind(priority)
        ))
    })?;

    Ok(WorkItem::new(command, priority))
}

/// Names the JSON kind of `value` for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
