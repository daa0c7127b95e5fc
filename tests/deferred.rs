use serde_json::{Value, json};
use shapeguard::deferred::{Deferred, as_deferred, is_deferred};
use std::any::Any;

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(fut)
}

/// A type that merely exposes a `then`-like method; a structural check
/// would wave it through, the identity check must not.
struct Thenable;

impl Thenable {
    fn then(&self, callback: fn(Value)) {
        callback(json!(null));
    }
}

#[test]
fn detects_genuine_deferred_values() {
    let boxed: Box<dyn Any> = Box::new(Deferred::ready(json!({"ok": true})));
    assert!(is_deferred::<Value>(boxed.as_ref()));

    let from_async: Box<dyn Any> = Box::new(Deferred::new(async { json!(42) }));
    assert!(is_deferred::<Value>(from_async.as_ref()));
}

#[test]
fn rejects_plain_values() {
    let cases: Vec<Box<dyn Any>> = vec![
        Box::new(7_i64),
        Box::new("pending".to_string()),
        Box::new(json!({"then": "soon"})),
        Box::new(()),
        Box::new(|| json!(1)),
    ];
    for value in &cases {
        assert!(!is_deferred::<Value>(value.as_ref()));
    }
}

#[test]
fn rejects_thenable_impostors() {
    let thenable = Thenable;
    thenable.then(|_| {});
    let boxed: Box<dyn Any> = Box::new(thenable);
    assert!(!is_deferred::<Value>(boxed.as_ref()));
}

#[test]
fn output_type_participates_in_identity() {
    let boxed: Box<dyn Any> = Box::new(Deferred::ready(json!("soon")));
    assert!(is_deferred::<Value>(boxed.as_ref()));
    assert!(!is_deferred::<String>(boxed.as_ref()));
}

#[test]
fn detection_is_idempotent_and_does_not_consume() {
    let boxed: Box<dyn Any> = Box::new(Deferred::ready(json!(1)));
    assert!(is_deferred::<Value>(boxed.as_ref()));
    assert!(is_deferred::<Value>(boxed.as_ref()));

    // Detection never polls: the value still resolves afterwards.
    let deferred = as_deferred::<Value>(boxed).ok().unwrap();
    assert_eq!(block_on(deferred), json!(1));
}

#[test]
fn narrowing_returns_the_box_on_mismatch() {
    let boxed: Box<dyn Any> = Box::new("not deferred".to_string());
    let returned = as_deferred::<Value>(boxed).err().unwrap();
    assert_eq!(
        returned.downcast_ref::<String>().map(String::as_str),
        Some("not deferred")
    );
}

#[test]
fn deferred_resolves_when_awaited() {
    block_on(async {
        let deferred = Deferred::new(async {
            tokio::task::yield_now().await;
            json!({"posts": []})
        });
        assert_eq!(deferred.await, json!({"posts": []}));
    });
}
