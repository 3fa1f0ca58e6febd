//! Work item types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key holding the command text of a work item mapping.
pub const COMMAND_KEY: &str = "command";

/// Key holding the priority of a work item mapping.
pub const PRIORITY_KEY: &str = "priority";

/// Priority of a work item. Higher values are extracted first.
pub type Priority = u64;

/// A unit of work: an opaque command paired with a priority.
///
/// Serializes as `{"command": ..., "priority": ...}`. Unknown keys are
/// dropped on deserialization, so only the two canonical fields survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkItem {
    command: String,
    priority: Priority,
}

impl WorkItem {
    /// Creates a new work item.
    pub fn new(command: impl Into<String>, priority: Priority) -> Self {
        Self {
            command: command.into(),
            priority,
        }
    }

    /// Returns the command text.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Consumes the item, returning its command and priority.
    pub fn into_parts(self) -> (String, Priority) {
        (self.command, self.priority)
    }

    /// Returns true if `probe` is a mapping whose canonical fields equal
    /// this item's.
    ///
    /// Keys other than [`COMMAND_KEY`] and [`PRIORITY_KEY`] are ignored.
    /// A probe that is not a mapping, or whose fields have other types,
    /// never matches.
    pub fn matches(&self, probe: &Value) -> bool {
        let Some(map) = probe.as_object() else {
            return false;
        };

        map.get(COMMAND_KEY).and_then(Value::as_str) == Some(self.command.as_str())
            && map.get(PRIORITY_KEY).and_then(Value::as_u64) == Some(self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_and_accessors() {
        let item = WorkItem::new("build", 3);
        assert_eq!(item.command(), "build");
        assert_eq!(item.priority(), 3);
        assert_eq!(item.into_parts(), ("build".to_string(), 3));
    }

    #[test]
    fn test_serialize_uses_canonical_keys() {
        let item = WorkItem::new("foo", 10);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({ COMMAND_KEY: "foo", PRIORITY_KEY: 10 }));
    }

    #[test]
    fn test_deserialize_drops_extra_keys() {
        let item: WorkItem =
            serde_json::from_value(json!({ "command": "foo", "priority": 1, "owner": "me" }))
                .unwrap();
        assert_eq!(item, WorkItem::new("foo", 1));
    }

    #[test]
    fn test_deserialize_rejects_negative_priority() {
        let result: Result<WorkItem, _> =
            serde_json::from_value(json!({ "command": "foo", "priority": -1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_canonical_fields() {
        let item = WorkItem::new("foo", 10);

        assert!(item.matches(&json!({ "command": "foo", "priority": 10 })));
        assert!(!item.matches(&json!({ "command": "foo", "priority": 11 })));
        assert!(!item.matches(&json!({ "command": "bar", "priority": 10 })));
    }

    #[test]
    fn test_matches_ignores_extra_keys() {
        let item = WorkItem::new("foo", 10);
        assert!(item.matches(&json!({ "command": "foo", "priority": 10, "tag": [1, 2] })));
    }

    #[test]
    fn test_matches_rejects_other_shapes() {
        let item = WorkItem::new("foo", 10);

        assert!(!item.matches(&json!(["foo", 10])));
        assert!(!item.matches(&json!({ "command": "foo" })));
        assert!(!item.matches(&json!({ "command": "foo", "priority": 10.0 })));
        assert!(!item.matches(&json!({ "command": "foo", "priority": "10" })));
        assert!(!item.matches(&Value::Null));
    }
}
