mod common;

use common::builders::{RequestBuilder, cors, preflight_request, simple_request};
use cors_core::constants::header;
use cors_core::{Cors, Origin};
use insta::assert_yaml_snapshot;
use serde::Serialize;

#[derive(Serialize)]
struct HeaderSnapshot {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ExchangeSnapshot {
    status: Option<u16>,
    forwarded: bool,
    headers: Vec<HeaderSnapshot>,
}

fn capture(cors: &Cors, request: RequestBuilder) -> ExchangeSnapshot {
    let handled = request.check(cors);
    let status = handled.exchange.status();
    let forwarded = handled.next_called;
    let headers = handled
        .exchange
        .into_response_headers()
        .into_iter()
        .map(|(name, value)| HeaderSnapshot { name, value })
        .collect();
    ExchangeSnapshot {
        status,
        forwarded,
        headers,
    }
}

#[test]
fn default_preflight_snapshot() {
    let snapshot = capture(
        &cors().build(),
        preflight_request()
            .origin("https://snapshot.dev")
            .request_headers("X-Debug, Content-Type"),
    );

    assert_yaml_snapshot!("default_preflight_snapshot", snapshot);
}

#[test]
fn credentialed_preflight_snapshot() {
    let cors = cors()
        .credentials(true)
        .max_age("3600")
        .private_network_access(true)
        .build();

    let snapshot = capture(
        &cors,
        preflight_request()
            .origin("https://mirror.dev")
            .request_headers("X-Trace-Id")
            .private_network(),
    );

    assert_yaml_snapshot!("credentialed_preflight_snapshot", snapshot);
}

#[test]
fn isolated_simple_request_snapshot() {
    let cors = cors()
        .origin(Origin::exact("https://api.strict.dev"))
        .expose_headers(["X-Result", "X-Trace"])
        .secure_context(true)
        .build();

    let snapshot = capture(
        &cors,
        simple_request()
            .origin("https://api.strict.dev")
            .response_header(header::VARY, "Accept-Encoding"),
    );

    assert_yaml_snapshot!("isolated_simple_request_snapshot", snapshot);
}
