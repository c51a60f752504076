use super::builders::{BODY, Handled};
use cors_core::CorsOutcome;

pub fn assert_forwarded(handled: &Handled) {
    match &handled.outcome {
        Ok(CorsOutcome::Forwarded(body)) => assert_eq!(*body, BODY),
        other => panic!("expected forwarded response, got {:?}", other),
    }
    assert!(handled.next_called, "continuation should run");
    assert_eq!(handled.exchange.status(), None);
}

pub fn assert_preflight(handled: &Handled) {
    match &handled.outcome {
        Ok(CorsOutcome::Preflight) => {}
        other => panic!("expected preflight response, got {:?}", other),
    }
    assert!(!handled.next_called, "continuation must not run on preflight");
    assert_eq!(handled.exchange.status(), Some(204));
}

pub fn assert_header_eq(handled: &Handled, name: &str, expected: &str) {
    assert_eq!(
        handled.header(name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_header_absent(handled: &Handled, name: &str) {
    assert!(
        handled.header(name).is_none(),
        "header {name} should be absent, found {:?}",
        handled.header(name)
    );
}
