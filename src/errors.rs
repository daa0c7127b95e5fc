//! Coded application errors for propagation and dispatch.
//!
//! [`CodedError`] is the single error kind application code constructs when
//! a failure is detected, carries up the call chain, and dispatches on by
//! its optional machine-readable `code`. The code set is open-ended but
//! conventionally enumerated; the common ones are provided as associated
//! constants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable error value with a required human-readable message, an
/// optional machine-readable code, and a category name.
///
/// Construction is total: it never fails, even when handed malformed
/// metadata. Attaching a non-string dynamic value as `code` or `name`
/// silently drops that field rather than erroring, so the error stays
/// constructible and usable at the exact moment something else has already
/// gone wrong.
///
/// # Examples
///
/// ```
/// use shapeguard::errors::CodedError;
///
/// let err = CodedError::msg("Order exists.").with_code(CodedError::ORDER_EXISTS);
/// assert_eq!(err.message(), "Order exists.");
/// assert!(err.matches_code(CodedError::ORDER_EXISTS));
/// assert_eq!(err.to_string(), "Error: Order exists.");
/// ```
///
/// Malformed metadata degrades instead of failing:
///
/// ```
/// use shapeguard::errors::CodedError;
/// use serde_json::json;
///
/// let err = CodedError::msg("x").with_code(json!(123));
/// assert_eq!(err.code(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedError {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default = "default_name")]
    name: String,
}

fn default_name() -> String {
    CodedError::DEFAULT_NAME.to_string()
}

impl CodedError {
    /// The category label used when no `name` override is supplied.
    pub const DEFAULT_NAME: &'static str = "Error";

    /// Request validation failed.
    pub const BAD_REQUEST: &'static str = "BAD_REQUEST";
    /// Caller is not authorized.
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";
    /// Requested entity does not exist.
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    /// Domain conflict: the order already exists.
    pub const ORDER_EXISTS: &'static str = "ORDER_EXISTS";

    /// Creates an error with the given message, no code, and the default
    /// name.
    pub fn msg<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            code: None,
            name: default_name(),
        }
    }

    /// Attaches a machine-readable code from a dynamic value.
    ///
    /// Anything other than a string is dropped and the builder continues.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Value>) -> Self {
        if let Value::String(code) = code.into() {
            self.code = Some(code);
        }
        self
    }

    /// Overrides the category name from a dynamic value.
    ///
    /// Anything other than a string is dropped and the default stands.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Value>) -> Self {
        if let Value::String(name) = name.into() {
            self.name = name;
        }
        self
    }

    /// Builds an error from a JSON configuration record.
    ///
    /// Returns `None` only when `message` is missing or not a string;
    /// malformed `code` or `name` entries are merely dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeguard::errors::CodedError;
    /// use serde_json::json;
    ///
    /// let err = CodedError::from_config(&json!({
    ///     "message": "Order exists.",
    ///     "code": "ORDER_EXISTS",
    ///     "name": 42,
    /// })).unwrap();
    /// assert_eq!(err.code(), Some("ORDER_EXISTS"));
    /// assert_eq!(err.name(), "Error");
    ///
    /// assert!(CodedError::from_config(&json!({"code": "BAD_REQUEST"})).is_none());
    /// ```
    #[must_use]
    pub fn from_config(config: &Value) -> Option<Self> {
        let obj = config.as_object()?;
        let message = obj.get("message")?.as_str()?;
        let mut err = Self::msg(message);
        if let Some(code) = obj.get("code") {
            err = err.with_code(code.clone());
        }
        if let Some(name) = obj.get("name") {
            err = err.with_name(name.clone());
        }
        Some(err)
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable discriminant, when one was validly supplied.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Category label; [`Self::DEFAULT_NAME`] unless overridden.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this error carries the given code.
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl std::fmt::Display for CodedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for CodedError {}
