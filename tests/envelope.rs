use serde_json::{Value, json};
use shapeguard::envelope::ResponseEnvelope;
use shapeguard::shape::{is_response_object, validate_response};

#[test]
fn constructors_set_the_framing_fields() {
    let ok = ResponseEnvelope::ok(json!([1, 2]), "Fetched.");
    assert!(ok.success);
    assert_eq!(ok.data, json!([1, 2]));
    assert!(ok.errors.is_none());

    let failed = ResponseEnvelope::fail("Unable to get posts.");
    assert!(!failed.success);
    assert_eq!(failed.data, Value::Null);
    assert_eq!(failed.message, "Unable to get posts.");
}

#[test]
fn with_error_builds_the_map_incrementally() {
    let envelope = ResponseEnvelope::fail("Invalid post.")
        .with_error("title", "Title is required.")
        .with_error("body", "Body too short.");
    let errors = envelope.errors.unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["title"], "Title is required.");
}

#[test]
fn serialized_envelopes_pass_their_own_validation() {
    let envelope = ResponseEnvelope::ok(json!({"id": 7}), "ok")
        .with_error("note", "partial result")
        .with_extension("requestId", json!("abc-123"));
    let value = serde_json::to_value(&envelope).unwrap();

    assert!(is_response_object(&value));
    let back = validate_response(&value).unwrap();
    assert_eq!(back, envelope);
}

#[test]
fn absent_errors_and_extensions_stay_off_the_wire() {
    let value = serde_json::to_value(ResponseEnvelope::ok(json!(null), "ok")).unwrap();
    assert!(value.get("errors").is_none());
    assert_eq!(
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        ["data", "message", "success"]
    );
}

#[test]
fn envelopes_deserialize_directly() {
    let envelope: ResponseEnvelope = serde_json::from_value(json!({
        "data": {"posts": []},
        "message": "ok",
        "success": true,
        "page": 2,
    }))
    .unwrap();
    assert_eq!(envelope.extensions["page"], json!(2));
    assert!(envelope.errors.is_none());
}
