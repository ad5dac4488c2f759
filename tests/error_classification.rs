//! Behavior-driven tests for failure classification and connectivity.
//!
//! Every failure must map to exactly one taxonomy entry, be surfaced
//! verbatim as the Failed payload, and touch the connectivity flag only
//! when the server was never reached.

use tickerlens_tests::{
    harness, snapshot_body, FetchError, HttpError, HttpResponse, SearchState, Ticker,
};

#[tokio::test]
async fn when_the_request_times_out_the_system_goes_offline() {
    // Given: a service that never answers in time
    let (mut controller, http, connectivity) = harness();
    http.push(Err(HttpError::timed_out("deadline elapsed")));

    // When: a search runs into the hard timeout
    let state = controller.search("AAPL").await;

    // Then: the outcome is Timeout and connectivity flips offline
    assert_eq!(*state, SearchState::Failed(FetchError::Timeout));
    assert!(!connectivity.is_online());
}

#[tokio::test]
async fn when_the_server_is_unreachable_the_system_goes_offline() {
    // Given: a connection that never reaches a server
    let (mut controller, http, connectivity) = harness();
    http.push(Err(HttpError::connection_failed("connection refused")));

    // When: a search attempts the request
    let state = controller.search("AAPL").await;

    // Then: the outcome is NetworkUnreachable and connectivity flips offline
    assert_eq!(*state, SearchState::Failed(FetchError::NetworkUnreachable));
    assert!(!connectivity.is_online());
}

#[tokio::test]
async fn retry_connection_restores_online_without_a_network_call() {
    // Given: a search that went offline on a timeout
    let (mut controller, http, connectivity) = harness();
    http.push(Err(HttpError::timed_out("deadline elapsed")));
    let _ = controller.search("AAPL").await;
    let requests_before = http.request_count();

    // When: the user explicitly retries the connection
    controller.retry_connection();

    // Then: online again, error cleared, and no new request was issued
    assert!(connectivity.is_online());
    assert_eq!(*controller.state(), SearchState::Idle);
    assert_eq!(http.request_count(), requests_before);
}

#[tokio::test]
async fn an_unknown_ticker_is_not_found_and_proves_connectivity() {
    // Given: a service that does not know the symbol
    let (mut controller, http, connectivity) = harness();
    http.push(Ok(HttpResponse::with_status(
        404,
        "Not Found",
        r#"{"detail": "not found"}"#,
    )));

    // When: the search resolves
    let state = controller.search("nope").await;

    // Then: the ticker rides along in the error and connectivity is untouched
    assert_eq!(
        *state,
        SearchState::Failed(FetchError::NotFound {
            ticker: Ticker::parse("NOPE").expect("valid"),
        })
    );
    assert!(connectivity.is_online());
}

#[tokio::test]
async fn a_server_failure_is_classified_without_touching_connectivity() {
    // Given: a service that falls over
    let (mut controller, http, connectivity) = harness();
    http.push(Ok(HttpResponse::with_status(
        500,
        "Internal Server Error",
        "",
    )));

    // When: the search resolves
    let state = controller.search("AAPL").await;

    // Then: ServerError(500) and connectivity stays online
    assert_eq!(
        *state,
        SearchState::Failed(FetchError::ServerError { status: 500 })
    );
    assert!(connectivity.is_online());
}

#[tokio::test]
async fn gateway_errors_are_server_errors_too() {
    let (mut controller, http, _connectivity) = harness();
    http.push(Ok(HttpResponse::with_status(503, "Service Unavailable", "")));

    let state = controller.search("AAPL").await;

    assert_eq!(
        *state,
        SearchState::Failed(FetchError::ServerError { status: 503 })
    );
}

#[tokio::test]
async fn any_other_status_is_surfaced_with_its_text() {
    // Given: a status outside the modeled set
    let (mut controller, http, _connectivity) = harness();
    http.push(Ok(HttpResponse::with_status(429, "Too Many Requests", "")));

    // When: the search resolves
    let state = controller.search("AAPL").await;

    // Then: status and text survive into the error
    assert_eq!(
        *state,
        SearchState::Failed(FetchError::UnexpectedStatus {
            status: 429,
            status_text: String::from("Too Many Requests"),
        })
    );
}

#[tokio::test]
async fn an_unreadable_body_is_malformed_not_a_server_error() {
    // Given: a 2xx answer whose body is not a snapshot
    let (mut controller, http, connectivity) = harness();
    http.push(Ok(HttpResponse::ok_json("<html>gateway page</html>")));

    // When: the search resolves
    let state = controller.search("AAPL").await;

    // Then: MalformedResponse, and connectivity is untouched since the
    // server clearly answered
    assert_eq!(*state, SearchState::Failed(FetchError::MalformedResponse));
    assert!(connectivity.is_online());
}

#[tokio::test]
async fn a_success_after_going_offline_restores_online() {
    // Given: an offline flag from an earlier failed attempt
    let (mut controller, http, connectivity) = harness();
    http.push(Err(HttpError::timed_out("deadline elapsed")));
    http.push(Ok(HttpResponse::ok_json(snapshot_body("AAPL"))));
    let _ = controller.search("AAPL").await;
    assert!(!connectivity.is_online());

    // When: the next search succeeds
    let state = controller.search("AAPL").await;

    // Then: the successful round trip proves connectivity again
    assert!(matches!(state, SearchState::Success(_)));
    assert!(connectivity.is_online());
}

#[test]
fn classification_codes_are_stable() {
    // Structured output and logs key off these codes.
    assert_eq!(FetchError::NetworkUnreachable.code(), "fetch.network_unreachable");
    assert_eq!(FetchError::Timeout.code(), "fetch.timeout");
    assert_eq!(
        FetchError::NotFound {
            ticker: Ticker::parse("AAPL").expect("valid"),
        }
        .code(),
        "fetch.not_found"
    );
    assert_eq!(FetchError::ServerError { status: 500 }.code(), "fetch.server_error");
    assert_eq!(FetchError::MalformedResponse.code(), "fetch.malformed_response");
}

#[test]
fn only_transport_failures_count_as_connectivity_loss() {
    assert!(FetchError::NetworkUnreachable.connectivity_loss());
    assert!(FetchError::Timeout.connectivity_loss());
    assert!(!FetchError::ServerError { status: 500 }.connectivity_loss());
    assert!(!FetchError::MalformedResponse.connectivity_loss());
    assert!(!FetchError::UnexpectedStatus {
        status: 429,
        status_text: String::from("Too Many Requests"),
    }
    .connectivity_loss());
}
