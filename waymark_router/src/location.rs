//! Location descriptors and the normalization of link targets into them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostic::Diagnostic;

/// Query string parameters of a location.
pub type Query = serde_json::Map<String, Value>;

/// Canonical location handed to the navigation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescriptor {
    /// Absolute when it starts with `/`, relative to the current route otherwise.
    pub pathname: String,
    /// Query string parameters, encoded by the navigation service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
    /// Fragment, with or without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Opaque state stored with the history entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl LocationDescriptor {
    /// Location with only a pathname.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Sets the query.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the hash.
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets the history state.
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = Some(state);
        self
    }

    /// Whether the pathname starts at the root.
    pub fn is_absolute(&self) -> bool {
        self.pathname.starts_with('/')
    }
}

/// Where a link points: a bare path, or a full descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    /// A pathname and nothing else.
    Path(String),
    /// A pathname with its query, hash and state.
    Descriptor(LocationDescriptor),
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self::Path(String::new())
    }
}

impl From<&str> for TargetSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for TargetSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<LocationDescriptor> for TargetSpec {
    fn from(location: LocationDescriptor) -> Self {
        Self::Descriptor(location)
    }
}

/// Location fields given next to the target rather than inside it.
///
/// This is the older calling convention; prefer a [`TargetSpec::Descriptor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyExtras {
    /// Present whenever set, even when empty.
    pub query: Option<Query>,
    /// Present unless empty.
    pub hash: Option<String>,
    /// Present unless `null`, `false`, `0` or `""`.
    pub state: Option<Value>,
}

impl LegacyExtras {
    /// Names of the fields that are set to something other than an empty value.
    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();

        if self.query.is_some() {
            fields.push("query");
        }
        if self.hash.as_deref().is_some_and(|hash| !hash.is_empty()) {
            fields.push("hash");
        }
        if self.state.as_ref().is_some_and(is_truthy) {
            fields.push("state");
        }

        fields
    }
}

/// Result of [`normalize_location`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLocation {
    /// The canonical descriptor.
    pub location: LocationDescriptor,
    /// Set when legacy extras were used.
    pub diagnostic: Option<Diagnostic>,
}

/// Builds one canonical descriptor out of a link target and its legacy extras.
///
/// The first matching rule wins:
/// 1. If any extra is set, the target's pathname is combined with the extras, which
///    override the matching fields of a descriptor target. Fields of the descriptor
///    that no extra sets are kept, so a descriptor query survives a legacy `hash`. A
///    [`DeprecatedUsage`](Diagnostic::DeprecatedUsage) diagnostic is attached.
/// 2. A path target becomes a descriptor with just that pathname.
/// 3. A descriptor target is returned unchanged.
pub fn normalize_location(target: TargetSpec, extras: LegacyExtras) -> NormalizedLocation {
    let fields = extras.present_fields();
    let mut location = match target {
        TargetSpec::Path(pathname) => LocationDescriptor::new(pathname),
        TargetSpec::Descriptor(location) => location,
    };

    if fields.is_empty() {
        return NormalizedLocation {
            location,
            diagnostic: None,
        };
    }

    if fields.contains(&"query") {
        location.query = extras.query;
    }
    if fields.contains(&"hash") {
        location.hash = extras.hash;
    }
    if fields.contains(&"state") {
        location.state = extras.state;
    }

    let diagnostic = Diagnostic::DeprecatedUsage { fields };
    tracing::warn!(pathname = %location.pathname, "{diagnostic}");

    NormalizedLocation {
        location,
        diagnostic: Some(diagnostic),
    }
}

// Mirrors how loosely typed callers decide whether a field was given at all.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn query(value: Value) -> Query {
        match value {
            Value::Object(map) => map,
            _ => Query::new(),
        }
    }

    #[test]
    fn test_normalize_plain_path() {
        let normalized = normalize_location("/a".into(), LegacyExtras::default());

        assert_eq!(normalized.location, LocationDescriptor::new("/a"));
        assert!(normalized.diagnostic.is_none());
    }

    #[test]
    fn test_normalize_passes_descriptor_through() {
        let descriptor = LocationDescriptor::new("/search")
            .with_query(query(json!({ "q": "rust" })))
            .with_hash("#results")
            .with_state(json!({ "from": "home" }));

        let normalized = normalize_location(descriptor.clone().into(), LegacyExtras::default());

        assert_eq!(normalized.location, descriptor);
        assert!(normalized.diagnostic.is_none());
    }

    #[test]
    fn test_normalize_legacy_query_on_descriptor() {
        let extras = LegacyExtras {
            query: Some(query(json!({ "q": 1 }))),
            ..LegacyExtras::default()
        };

        let normalized = normalize_location(LocationDescriptor::new("/a").into(), extras);

        assert_eq!(
            normalized.location,
            LocationDescriptor::new("/a").with_query(query(json!({ "q": 1 })))
        );
        assert_eq!(
            normalized.diagnostic,
            Some(Diagnostic::DeprecatedUsage {
                fields: vec!["query"]
            })
        );
    }

    #[test]
    fn test_normalize_legacy_extras_on_path() {
        let extras = LegacyExtras {
            query: None,
            hash: Some("#top".to_owned()),
            state: Some(json!({ "modal": true })),
        };

        let normalized = normalize_location("/docs".into(), extras);

        assert_eq!(
            normalized.location,
            LocationDescriptor::new("/docs")
                .with_hash("#top")
                .with_state(json!({ "modal": true }))
        );
        assert_eq!(
            normalized.diagnostic,
            Some(Diagnostic::DeprecatedUsage {
                fields: vec!["hash", "state"]
            })
        );
    }

    #[test]
    fn test_normalize_legacy_extras_keep_descriptor_fields() {
        let descriptor = LocationDescriptor::new("/a")
            .with_query(query(json!({ "page": 2 })))
            .with_hash("#old");
        let extras = LegacyExtras {
            hash: Some("#new".to_owned()),
            ..LegacyExtras::default()
        };

        let normalized = normalize_location(descriptor.into(), extras);

        assert_eq!(
            normalized.location,
            LocationDescriptor::new("/a")
                .with_query(query(json!({ "page": 2 })))
                .with_hash("#new")
        );
    }

    #[test]
    fn test_normalize_ignores_empty_extras() {
        let extras = LegacyExtras {
            query: None,
            hash: Some(String::new()),
            state: Some(json!(null)),
        };

        let normalized = normalize_location("/a".into(), extras);

        assert_eq!(normalized.location, LocationDescriptor::new("/a"));
        assert!(normalized.diagnostic.is_none());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_target_spec_from_json() {
        let path: TargetSpec = serde_json::from_value(json!("/users")).unwrap();
        assert_eq!(path, TargetSpec::Path("/users".to_owned()));

        let descriptor: TargetSpec =
            serde_json::from_value(json!({ "pathname": "/users", "hash": "#top" })).unwrap();
        assert_eq!(
            descriptor,
            TargetSpec::Descriptor(LocationDescriptor::new("/users").with_hash("#top"))
        );
    }

    #[test]
    fn test_descriptor_serialization_skips_missing_fields() {
        let value = serde_json::to_value(LocationDescriptor::new("/a")).unwrap();

        assert_eq!(value, json!({ "pathname": "/a" }));
    }
}
