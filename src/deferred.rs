//! Deferred-value detection over type-erased containers.
//!
//! Asynchronous orchestration code sometimes holds a `Box<dyn Any>` that may
//! or may not be a pending computation, and needs to decide whether to await
//! it before further processing. [`Deferred`] is the crate's deferred
//! primitive, and [`is_deferred`] / [`as_deferred`] answer that question by
//! exact type identity.
//!
//! Detection is intentionally narrower than "implements `Future`": only a
//! genuine [`Deferred<T>`] matches, never a foreign future type or a value
//! that merely exposes a `then`-like method. That trades false negatives for
//! custom future types against zero false positives.
//!
//! Detection never polls, awaits, or inspects resolution state; it answers
//! only "is this a deferred value", never "has it settled, and with what".
//!
//! # Examples
//!
//! ```
//! use shapeguard::deferred::{Deferred, is_deferred};
//! use serde_json::{Value, json};
//! use std::any::Any;
//!
//! let pending: Box<dyn Any> = Box::new(Deferred::ready(json!({"ok": true})));
//! assert!(is_deferred::<Value>(pending.as_ref()));
//!
//! let plain: Box<dyn Any> = Box::new(json!({"ok": true}));
//! assert!(!is_deferred::<Value>(plain.as_ref()));
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;

/// A deferred computation producing a `T`.
///
/// Wraps a pinned, boxed, `Send` future behind one nominal type so that
/// detection has a single concrete identity to check against. `Deferred` is
/// itself a [`Future`]; awaiting it drives the inner computation.
pub struct Deferred<T>(BoxFuture<'static, T>);

impl<T> Deferred<T> {
    /// Wraps a future as a deferred value.
    pub fn new(future: impl Future<Output = T> + Send + 'static) -> Self {
        Self(Box::pin(future))
    }

    /// A deferred value that resolves immediately. Still deferred for
    /// detection purposes; settlement state is never inspected.
    pub fn ready(value: T) -> Self
    where
        T: Send + 'static,
    {
        Self::new(std::future::ready(value))
    }
}

impl<T> Future for Deferred<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        self.get_mut().0.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Checks whether a type-erased value is exactly a [`Deferred<T>`].
///
/// Pure, total predicate. The output type parameter participates in the
/// identity check: a `Deferred<String>` is not a `Deferred<Value>`.
///
/// # Examples
///
/// ```
/// use shapeguard::deferred::{Deferred, is_deferred};
/// use std::any::Any;
///
/// let boxed: Box<dyn Any> = Box::new(Deferred::ready(1_u32));
/// assert!(is_deferred::<u32>(boxed.as_ref()));
/// assert!(!is_deferred::<String>(boxed.as_ref()));
/// ```
#[must_use]
pub fn is_deferred<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Deferred<T>>()
}

/// Narrows a type-erased box to a [`Deferred<T>`], returning the original
/// box unchanged when the type does not match.
///
/// # Errors
///
/// Returns `Err` with the input box when `value` is not a `Deferred<T>`.
pub fn as_deferred<T: 'static>(value: Box<dyn Any>) -> Result<Deferred<T>, Box<dyn Any>> {
    value.downcast::<Deferred<T>>().map(|deferred| *deferred)
}
