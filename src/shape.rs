//! Runtime shape validation for type-erased response data.
//!
//! Data crossing an API boundary usually arrives as a type-erased
//! `serde_json::Value`. This module decides whether such a value conforms to
//! the generic response-envelope shape before any code trusts it, with two
//! entry points:
//!
//! - [`is_response_object`] — a bare guard predicate for call sites that only
//!   need a yes/no answer.
//! - [`validate_response`] — the boundary form, returning the narrowed
//!   [`ResponseEnvelope`] on success or the first failing check as a
//!   structured [`ShapeError`], so callers never re-derive fields after the
//!   check.
//!
//! Both are total functions: they return a definite answer for any input and
//! never panic. A validator that panics on unexpected shapes would defeat its
//! purpose as a guard.
//!
//! # Examples
//!
//! ```
//! use shapeguard::shape::{is_response_object, validate_response};
//! use serde_json::json;
//!
//! let value = json!({
//!     "data": {"posts": []},
//!     "message": "Fetched posts.",
//!     "success": true,
//! });
//! assert!(is_response_object(&value));
//!
//! let envelope = validate_response(&value).unwrap();
//! assert_eq!(envelope.message, "Fetched posts.");
//!
//! let bad = json!({"data": null, "message": 42, "success": true});
//! assert!(validate_response(&bad).is_err());
//! ```

use miette::Diagnostic;
use rustc_hash::FxHashMap;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::envelope::ResponseEnvelope;

/// The envelope's reserved top-level keys; anything else is an extension.
pub const RESERVED_KEYS: [&str; 4] = ["data", "message", "success", "errors"];

/// Why a value failed envelope validation. Carries the first failing check,
/// in the order the checks run.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The value is not a JSON object at all (a scalar, `null`, or an
    /// array — arrays are deliberately rejected even though some source
    /// environments treat them as records).
    #[error("expected a response object, found {found}")]
    #[diagnostic(code(shapeguard::shape::not_an_object))]
    NotAnObject { found: &'static str },

    /// A reserved key is missing entirely.
    #[error("missing required field `{field}`")]
    #[diagnostic(code(shapeguard::shape::missing_field))]
    MissingField { field: &'static str },

    /// A reserved key is present but holds the wrong type of value.
    #[error("field `{field}` expected {expected}, found {found}")]
    #[diagnostic(code(shapeguard::shape::wrong_type))]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The `errors` map contains a non-string value.
    #[error("errors entry `{key}` expected string, found {found}")]
    #[diagnostic(code(shapeguard::shape::non_string_error))]
    NonStringErrorEntry { key: String, found: &'static str },
}

/// Get a human-readable type name for a JSON value.
#[must_use]
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checks whether `value` conforms to the response-envelope shape.
///
/// Pure, total predicate: deterministic for a given input, no side effects,
/// never panics. Equivalent to `validate_response(value).is_ok()` for every
/// input, which a property test enforces.
///
/// The checks, in order: `value` is a JSON object, `data` is present (any
/// value, `null` included), `message` is a string, `success` is a boolean,
/// and `errors` is absent, `null`, or a map whose every value is a string
/// (an empty map passes). `data`'s own shape is never inspected.
///
/// # Examples
///
/// ```
/// use shapeguard::shape::is_response_object;
/// use serde_json::json;
///
/// assert!(is_response_object(&json!({
///     "data": null,
///     "message": "ok",
///     "success": true,
///     "errors": {},
/// })));
///
/// // Arrays are not envelopes, and neither are scalars.
/// assert!(!is_response_object(&json!([1, 2, 3])));
/// assert!(!is_response_object(&json!("data")));
/// ```
#[must_use]
pub fn is_response_object(value: &Value) -> bool {
    parse(value).is_ok()
}

/// Validates `value` at the boundary and narrows it to a typed
/// [`ResponseEnvelope`].
///
/// Runs the same ordered checks as [`is_response_object`], then moves the
/// reserved fields into the envelope and any remaining top-level keys into
/// its `extensions` map. On failure returns the first failing check; the
/// decision to reject, retry, or fall back stays entirely with the caller.
///
/// # Errors
///
/// Returns a [`ShapeError`] describing the first check that failed.
pub fn validate_response(value: &Value) -> Result<ResponseEnvelope, ShapeError> {
    match parse(value) {
        Ok(envelope) => Ok(envelope),
        Err(err) => {
            trace!(%err, "response envelope rejected");
            Err(err)
        }
    }
}

fn parse(value: &Value) -> Result<ResponseEnvelope, ShapeError> {
    let obj = match value {
        Value::Object(obj) => obj,
        other => {
            return Err(ShapeError::NotAnObject {
                found: value_type_name(other),
            });
        }
    };

    // Presence only: `data: null` is a present key, not a missing one.
    if !obj.contains_key("data") {
        return Err(ShapeError::MissingField { field: "data" });
    }

    let message = match obj.get("message") {
        None => return Err(ShapeError::MissingField { field: "message" }),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(ShapeError::WrongType {
                field: "message",
                expected: "string",
                found: value_type_name(other),
            });
        }
    };

    let success = match obj.get("success") {
        None => return Err(ShapeError::MissingField { field: "success" }),
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(ShapeError::WrongType {
                field: "success",
                expected: "boolean",
                found: value_type_name(other),
            });
        }
    };

    let errors = match obj.get("errors") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => {
            let mut out = FxHashMap::default();
            for (key, entry) in map {
                match entry {
                    Value::String(s) => {
                        out.insert(key.clone(), s.clone());
                    }
                    other => {
                        return Err(ShapeError::NonStringErrorEntry {
                            key: key.clone(),
                            found: value_type_name(other),
                        });
                    }
                }
            }
            Some(out)
        }
        Some(other) => {
            return Err(ShapeError::WrongType {
                field: "errors",
                expected: "object",
                found: value_type_name(other),
            });
        }
    };

    let extensions = obj
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect();

    Ok(ResponseEnvelope {
        data: obj.get("data").cloned().unwrap_or(Value::Null),
        message,
        success,
        errors,
        extensions,
    })
}
