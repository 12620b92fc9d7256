// SPDX-License-Identifier: MPL-2.0
//! `HttpLibrary` against a mock library API.

use bookshelf::application::port::{FetchError, LibraryRepository};
use bookshelf::infrastructure::HttpLibrary;
use serde_json::json;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn library(server: &MockServer) -> HttpLibrary {
    HttpLibrary::new(&server.uri(), Duration::from_secs(5)).expect("client builds")
}

async fn respond(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Successful responses
// ============================================================================

#[tokio::test]
async fn books_are_decoded_in_order() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/books",
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Kindred", "author": { "name": "Octavia E. Butler" } },
            { "id": 2, "title": "Dawn", "author": { "name": "Octavia E. Butler" } }
        ])),
    )
    .await;

    let books = library(&server).books().await.expect("books load");

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Kindred", "Dawn"]);
    assert_eq!(books[0].author.name, "Octavia E. Butler");
}

#[tokio::test]
async fn me_reads_the_fist_name_field() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/me",
        ResponseTemplate::new(200).set_body_json(json!({
            "email": "reader@example.com",
            "fistName": "Ada",
            "lastName": "Lovelace"
        })),
    )
    .await;

    let me = library(&server).me().await.expect("profile loads");

    assert_eq!(me.email, "reader@example.com");
    assert_eq!(me.full_name(), "Ada Lovelace");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;
    respond(&server, "/books", ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let client = HttpLibrary::new(&format!("{}/", server.uri()), Duration::from_secs(5))
        .expect("client builds");

    assert!(client.books().await.expect("books load").is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn client_errors_map_to_bad_request() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/books",
        ResponseTemplate::new(404).set_body_json(json!({ "message": "no catalogue" })),
    )
    .await;

    let err = library(&server).books().await.expect_err("404 fails");

    assert_eq!(err.code(), "ERR_BAD_REQUEST");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Request failed with status code 404");
    match err {
        FetchError::Status { body, .. } => {
            assert_eq!(body, Some(json!({ "message": "no catalogue" })));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_map_to_bad_response() {
    let server = MockServer::start().await;
    respond(&server, "/me", ResponseTemplate::new(500).set_body_string("oops")).await;

    let err = library(&server).me().await.expect_err("500 fails");

    assert_eq!(err.code(), "ERR_BAD_RESPONSE");
    assert_eq!(
        err,
        FetchError::Status {
            status: 500,
            body: None
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/books",
        ResponseTemplate::new(200).set_body_string("[{\"id\": \"not a number\"}]"),
    )
    .await;

    let err = library(&server).books().await.expect_err("bad body fails");

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    respond(
        &server,
        "/me",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "email": "late@example.com" }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let client = HttpLibrary::new(&server.uri(), Duration::from_millis(200)).expect("client builds");
    let err = client.me().await.expect_err("request times out");

    assert_eq!(err, FetchError::Timeout);
    assert_eq!(err.code(), "ECONNABORTED");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind a free port");
    let port = listener.local_addr().expect("local address").port();
    drop(listener);

    let client = HttpLibrary::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2))
        .expect("client builds");
    let err = client.books().await.expect_err("connection refused");

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert_eq!(err.code(), "ERR_NETWORK");
}
