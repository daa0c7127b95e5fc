use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generic API response envelope: an arbitrary payload plus the
/// human-readable and machine-readable framing around it.
///
/// This is the typed counterpart of the loose JSON object validated by
/// [`crate::shape::validate_response`]. The payload in `data` is carried
/// as-is and never inspected; the envelope only guarantees the framing
/// fields around it.
///
/// # Examples
///
/// ## Basic Construction
/// ```
/// use shapeguard::envelope::ResponseEnvelope;
/// use serde_json::json;
///
/// let ok = ResponseEnvelope::ok(json!({"posts": []}), "Fetched posts.");
/// assert!(ok.success);
///
/// let failed = ResponseEnvelope::fail("Unable to get posts.")
///     .with_error("title", "Title is required.");
/// assert!(!failed.success);
/// assert_eq!(failed.errors.as_ref().unwrap()["title"], "Title is required.");
/// ```
///
/// # Serialization
///
/// Extensions are flattened back into the top-level object, so an envelope
/// survives a serialize/validate round trip with extra fields intact:
/// ```
/// use shapeguard::envelope::ResponseEnvelope;
/// use serde_json::json;
///
/// let env = ResponseEnvelope::ok(json!(null), "ok").with_extension("requestId", json!(7));
/// let value = serde_json::to_value(&env).unwrap();
/// assert_eq!(value["requestId"], json!(7));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// The payload. Any JSON value, including `null`; its internal shape is
    /// deliberately never validated.
    pub data: Value,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Whether the request the envelope describes succeeded.
    pub success: bool,
    /// Optional flat map of field-level error descriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FxHashMap<String, String>>,
    /// Additional top-level fields beyond the reserved four.
    ///
    /// The source shape this models allowed arbitrary extra keys; here they
    /// live in an explicit side map instead of passing silently.
    #[serde(flatten)]
    pub extensions: FxHashMap<String, Value>,
}

impl ResponseEnvelope {
    /// Creates a successful envelope around `data`.
    #[must_use]
    pub fn ok(data: Value, message: &str) -> Self {
        Self {
            data,
            message: message.to_string(),
            success: true,
            errors: None,
            extensions: FxHashMap::default(),
        }
    }

    /// Creates a failed envelope with a `null` payload.
    #[must_use]
    pub fn fail(message: &str) -> Self {
        Self {
            data: Value::Null,
            message: message.to_string(),
            success: false,
            errors: None,
            extensions: FxHashMap::default(),
        }
    }

    /// Adds a field-level error entry, creating the `errors` map if needed.
    #[must_use]
    pub fn with_error(mut self, field: impl Into<String>, description: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(FxHashMap::default)
            .insert(field.into(), description.into());
        self
    }

    /// Adds an extension field.
    #[must_use]
    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}
