//! Tests for the registry module.
//!
//! Covers the registry's observable contract end to end:
//! - round-trip registration and lookup
//! - duplicate rejection and batch semantics
//! - sequenced-response consumption and exhaustion
//! - validation gating and clear/reset behavior

use super::*;
use crate::error::MockError;
use serde_json::json;

fn spec(status: u16) -> ResponseSpec {
    ResponseSpec {
        body: json!({}),
        headers: None,
        status_code: status,
        timeout_ms: 0,
    }
}

fn mock(name: &str, path: &str, method: &str, response: MockResponse) -> MockDefinition {
    MockDefinition {
        name: name.to_string(),
        request: RequestSpec {
            path: path.to_string(),
            method: method.to_string(),
        },
        response,
    }
}

fn hello_mock() -> MockDefinition {
    mock(
        "Hello",
        "/hello",
        "GET",
        MockResponse::Single(ResponseSpec {
            body: json!({"hello": "world"}),
            headers: None,
            status_code: 200,
            timeout_ms: 0,
        }),
    )
}

#[test]
fn test_round_trip() {
    let registry = MockRegistry::new();
    let original = hello_mock();
    registry.add(MockSubmission::One(original.clone())).unwrap();

    let found = registry
        .find(&IncomingRequest::new("/hello", "GET"))
        .unwrap()
        .expect("registered mock should match");
    assert_eq!(found, original);
}

#[test]
fn test_method_discriminates_the_key() {
    let registry = MockRegistry::new();
    registry.add(MockSubmission::One(hello_mock())).unwrap();

    let found = registry
        .find(&IncomingRequest::new("/hello", "GET"))
        .unwrap()
        .unwrap();
    match found.response {
        MockResponse::Single(spec) => assert_eq!(spec.body, json!({"hello": "world"})),
        other => panic!("expected single response, got {other:?}"),
    }

    assert!(registry
        .find(&IncomingRequest::new("/hello", "POST"))
        .unwrap()
        .is_none());
}

#[test]
fn test_lookup_is_case_insensitive_on_method_only() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::One(mock(
            "Lower",
            "/lower",
            "get",
            MockResponse::Single(spec(200)),
        )))
        .unwrap();

    // Lowercase registration matches an uppercase lookup...
    assert!(registry
        .find(&IncomingRequest::new("/lower", "GET"))
        .unwrap()
        .is_some());
    // ...but path casing still discriminates.
    assert!(registry
        .find(&IncomingRequest::new("/Lower", "GET"))
        .unwrap()
        .is_none());
}

#[test]
fn test_duplicate_add_is_rejected_and_original_kept() {
    let registry = MockRegistry::new();
    let original = hello_mock();
    registry.add(MockSubmission::One(original.clone())).unwrap();

    let mut conflicting = hello_mock();
    conflicting.name = "Different".to_string();
    conflicting.response = MockResponse::Single(spec(503));

    let err = registry
        .add(MockSubmission::One(conflicting))
        .unwrap_err();
    assert!(matches!(err, MockError::AlreadyExists(_)));

    let found = registry
        .find(&IncomingRequest::new("/hello", "GET"))
        .unwrap()
        .unwrap();
    assert_eq!(found, original);
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_duplicate_detection_ignores_method_case() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::One(mock(
            "A",
            "/dup",
            "get",
            MockResponse::Single(spec(200)),
        )))
        .unwrap();

    let err = registry
        .add(MockSubmission::One(mock(
            "B",
            "/dup",
            "GET",
            MockResponse::Single(spec(200)),
        )))
        .unwrap_err();
    assert!(matches!(err, MockError::AlreadyExists(_)));
}

#[test]
fn test_batch_add_registers_each_element() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::Many(vec![
            mock("A", "/a", "GET", MockResponse::Single(spec(200))),
            mock("B", "/b", "POST", MockResponse::Single(spec(201))),
        ]))
        .unwrap();

    assert_eq!(registry.count(), 2);
    assert!(registry
        .find(&IncomingRequest::new("/a", "GET"))
        .unwrap()
        .is_some());
    assert!(registry
        .find(&IncomingRequest::new("/b", "POST"))
        .unwrap()
        .is_some());
}

#[test]
fn test_batch_add_commits_elements_before_a_collision() {
    let registry = MockRegistry::new();
    let err = registry
        .add(MockSubmission::Many(vec![
            mock("A", "/a", "GET", MockResponse::Single(spec(200))),
            mock("A again", "/a", "GET", MockResponse::Single(spec(200))),
            mock("C", "/c", "GET", MockResponse::Single(spec(200))),
        ]))
        .unwrap_err();
    assert!(matches!(err, MockError::AlreadyExists(_)));

    // The element before the collision is stored; the one after is not.
    assert_eq!(registry.count(), 1);
    assert!(registry
        .find(&IncomingRequest::new("/a", "GET"))
        .unwrap()
        .is_some());
    assert!(registry
        .find(&IncomingRequest::new("/c", "GET"))
        .unwrap()
        .is_none());
}

#[test]
fn test_sequence_consumed_in_order_then_not_found() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::One(mock(
            "Seq",
            "/seq",
            "GET",
            MockResponse::Sequence(vec![spec(201), spec(202), spec(203)]),
        )))
        .unwrap();

    let request = IncomingRequest::new("/seq", "GET");
    for expected in [201u16, 202, 203] {
        let found = registry.find(&request).unwrap().unwrap();
        match found.response {
            MockResponse::Single(spec) => assert_eq!(spec.status_code, expected),
            other => panic!("find should collapse sequences, got {other:?}"),
        }
    }

    let err = registry.find(&request).unwrap_err();
    assert!(matches!(err, MockError::NotFound(_)));
    assert!(err.to_string().contains("exhausted"));
}

#[test]
fn test_single_response_mock_never_depletes() {
    let registry = MockRegistry::new();
    registry.add(MockSubmission::One(hello_mock())).unwrap();

    let request = IncomingRequest::new("/hello", "GET");
    for _ in 0..5 {
        assert!(registry.find(&request).unwrap().is_some());
    }
}

#[test]
fn test_clear_is_total_and_idempotent() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::Many(vec![
            mock("A", "/a", "GET", MockResponse::Single(spec(200))),
            mock("B", "/b", "DELETE", MockResponse::Single(spec(200))),
        ]))
        .unwrap();
    assert_eq!(registry.count(), 2);

    registry.clear();
    assert!(registry.all().is_empty());
    assert!(registry
        .find(&IncomingRequest::new("/a", "GET"))
        .unwrap()
        .is_none());

    registry.clear();
    assert_eq!(registry.count(), 0);
}

#[test]
fn test_all_returns_every_definition() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::Many(vec![
            mock("A", "/a", "GET", MockResponse::Single(spec(200))),
            mock("B", "/b", "PUT", MockResponse::Single(spec(204))),
            mock("C", "/c", "PATCH", MockResponse::Single(spec(500))),
        ]))
        .unwrap();

    let mut names: Vec<String> = registry.all().into_iter().map(|m| m.name).collect();
    names.sort();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn test_validation_failure_stores_nothing() {
    let registry = MockRegistry::new();

    let missing_path = mock("NoPath", "", "GET", MockResponse::Single(spec(200)));
    let bad_method = mock("BadMethod", "/x", "TRACE", MockResponse::Single(spec(200)));
    let bad_status = mock("BadStatus", "/y", "GET", MockResponse::Single(spec(199)));
    let missing_status = mock("NoStatus", "/z", "GET", MockResponse::Single(spec(0)));

    for invalid in [missing_path, bad_method, bad_status, missing_status] {
        let err = registry.add(MockSubmission::One(invalid)).unwrap_err();
        assert!(matches!(err, MockError::Validation(_)));
    }
    assert_eq!(registry.count(), 0);
}

#[test]
fn test_stored_definition_is_normalized() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::One(mock(
            "Lower",
            "/norm",
            "post",
            MockResponse::Single(spec(200)),
        )))
        .unwrap();

    let stored = registry.all().pop().unwrap();
    assert_eq!(stored.request.method, "POST");
}

#[test]
fn test_query_string_is_part_of_the_key() {
    let registry = MockRegistry::new();
    registry
        .add(MockSubmission::One(mock(
            "Query",
            "/search?q=rust",
            "GET",
            MockResponse::Single(spec(200)),
        )))
        .unwrap();

    assert!(registry
        .find(&IncomingRequest::new("/search?q=rust", "GET"))
        .unwrap()
        .is_some());
    assert!(registry
        .find(&IncomingRequest::new("/search", "GET"))
        .unwrap()
        .is_none());
}
