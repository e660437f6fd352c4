//! Mock transport behavior tests
//!
//! The mock transport must be a pure function of the test-supplied generator:
//! same method/url in, same payload out, JSON media type, failures passed
//! through untouched.

use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use repo_shuttle::{HttpTransport, MockHttpTransport, TransportError, JSON_MEDIA_TYPE};

#[test]
fn test_payload_is_method_colon_url() {
    let transport =
        MockHttpTransport::new(|method, url, _| Ok(format!("{method}:{url}").into_bytes()));

    let response = transport
        .build_request("GET", "https://x/y")
        .unwrap()
        .execute()
        .unwrap();

    assert_eq!(response.body, b"GET:https://x/y");
    assert_eq!(response.content_type, JSON_MEDIA_TYPE);
}

#[test]
fn test_repeated_requests_are_deterministic() {
    let transport =
        MockHttpTransport::new(|method, url, _| Ok(format!("{method} {url}").into_bytes()));

    for _ in 0..3 {
        let response = transport
            .build_request("POST", "https://api/repos")
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(response.body, b"POST https://api/repos");
    }
}

#[test]
fn test_build_request_performs_no_io() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);
    let transport = MockHttpTransport::new(move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    });

    let pending = transport.build_request("GET", "https://api/zen").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    pending.execute().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_generator_observes_request_body_and_headers() {
    let transport = MockHttpTransport::new(|_, _, request| {
        let mut echoed = request.body.clone().unwrap_or_default();
        if let Some(accept) = request.headers.get("Accept") {
            echoed.extend_from_slice(accept.as_bytes());
        }
        Ok(echoed)
    });

    let response = transport
        .build_request("PATCH", "https://api/pulls/7")
        .unwrap()
        .header("Accept", "application/json")
        .body(b"state=closed;".to_vec())
        .execute()
        .unwrap();

    assert_eq!(response.body, b"state=closed;application/json");
}

#[test]
fn test_generator_failure_propagates_untranslated() {
    let transport = MockHttpTransport::new(|_, _, _| {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such fixture"))
    });

    let err = transport
        .build_request("GET", "https://api/repos/missing")
        .unwrap()
        .execute()
        .unwrap_err();

    match err {
        TransportError::Io(inner) => {
            assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            assert_eq!(inner.to_string(), "no such fixture");
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_generator_dispatches_on_method_and_url() {
    let transport = MockHttpTransport::new(|method, url, _| match (method, url) {
        ("GET", "https://api/user") => Ok(b"{\"login\":\"shuttle-bot\"}".to_vec()),
        ("GET", _) => Ok(b"{}".to_vec()),
        _ => Err(io::Error::new(io::ErrorKind::Unsupported, "unexpected call")),
    });

    let user = transport
        .build_request("GET", "https://api/user")
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(user.body_utf8().unwrap(), "{\"login\":\"shuttle-bot\"}");

    let other = transport
        .build_request("GET", "https://api/other")
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(other.body, b"{}");

    assert!(transport
        .build_request("DELETE", "https://api/user")
        .unwrap()
        .execute()
        .is_err());
}
