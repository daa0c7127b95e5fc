//! # Shapeguard: Boundary Guards for Type-Erased Values
//!
//! Shapeguard is a small library for code that handles type-erased data at
//! API boundaries: validating that a dynamic JSON value has the shape of a
//! generic response envelope, detecting whether a type-erased value is a
//! deferred computation, and propagating failures as immutable coded errors.
//!
//! ## Core Concepts
//!
//! - **Envelope**: The typed response record (`data`, `message`, `success`,
//!   optional field-error map, explicit extensions)
//! - **Shape**: Total, panic-free validation narrowing a raw JSON value to
//!   an envelope
//! - **Deferred**: The deferred-computation primitive and its exact-identity
//!   detector
//! - **Errors**: Coded, immutable error values dispatched on a string code
//!
//! ## Quick Start
//!
//! ### Guarding a Fetched Payload
//!
//! ```
//! use shapeguard::shape::validate_response;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "data": {"posts": [{"id": 1, "title": "Hello"}]},
//!     "message": "Fetched posts.",
//!     "success": true,
//!     "requestId": "abc-123",
//! });
//!
//! let envelope = validate_response(&raw).unwrap();
//! assert!(envelope.success);
//! assert_eq!(envelope.extensions["requestId"], json!("abc-123"));
//!
//! // Rejection is a value, never a panic: the caller decides what to do.
//! let err = validate_response(&json!({"message": "no data here"})).unwrap_err();
//! assert_eq!(err.to_string(), "missing required field `data`");
//! ```
//!
//! ### Reporting a Failure
//!
//! ```
//! use shapeguard::errors::CodedError;
//! use shapeguard::shape::validate_response;
//! use serde_json::json;
//!
//! fn load_posts(raw: &serde_json::Value) -> Result<serde_json::Value, CodedError> {
//!     match validate_response(raw) {
//!         Ok(envelope) if envelope.success => Ok(envelope.data),
//!         Ok(envelope) => Err(CodedError::msg(envelope.message)),
//!         Err(_) => Err(CodedError::msg("Unable to get posts.")
//!             .with_code(CodedError::BAD_REQUEST)),
//!     }
//! }
//!
//! let err = load_posts(&json!("not an envelope")).unwrap_err();
//! assert!(err.matches_code(CodedError::BAD_REQUEST));
//! ```
//!
//! ### Detecting a Deferred Value
//!
//! ```
//! use shapeguard::deferred::{Deferred, is_deferred};
//! use serde_json::{Value, json};
//! use std::any::Any;
//!
//! let maybe_pending: Box<dyn Any> = Box::new(Deferred::ready(json!({"ok": true})));
//! assert!(is_deferred::<Value>(maybe_pending.as_ref()));
//! ```
//!
//! ## Module Guide
//!
//! - [`envelope`] - The typed response envelope and its builders
//! - [`shape`] - Shape validation: predicate and narrowing boundary check
//! - [`deferred`] - Deferred values and exact-identity detection
//! - [`errors`] - Coded error values and the conventional code set

pub mod deferred;
pub mod envelope;
pub mod errors;
pub mod shape;
