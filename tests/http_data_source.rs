//! `HttpDataSource` against a fake attendee endpoint served by axum on an
//! ephemeral port.

use std::collections::HashMap;

use attendee_list::api::PageRequest;
use attendee_list::domain::{Attendee, ViewState};
use attendee_list::error::FetchError;
use attendee_list::services::{DataSource, HttpDataSource, Location, MemoryLocation, UrlStateCodec};
use attendee_list::ListController;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const EVENT: &str = "9e9bd979-9d10-4915-b339-3786b1634f33";

fn attendee(n: usize) -> Value {
    json!({
        "id": n,
        "name": format!("Attendee {n}"),
        "email": format!("attendee{n}@example.com"),
        "createdAt": "2024-04-01T12:00:00Z",
        "checkedInAt": if n % 2 == 0 { Value::Null } else { json!("2024-04-02T09:00:00Z") },
    })
}

/// 23 attendees named "Attendee N"; `query` filters by substring, `pageIndex`
/// selects a page of 10. Requests without an `x-request-id` are rejected.
async fn attendees(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !headers.contains_key("x-request-id") {
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "message": "missing request id" }))));
    }

    let page_index: usize = params
        .get("pageIndex")
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| (StatusCode::BAD_REQUEST, Json(json!({ "message": "bad pageIndex" }))))?;

    let matching: Vec<usize> = (1..=23)
        .filter(|n| match params.get("query") {
            Some(query) => format!("Attendee {n}").contains(query.as_str()),
            None => true,
        })
        .collect();

    let items: Vec<Value> = matching
        .iter()
        .skip(page_index * 10)
        .take(10)
        .map(|n| attendee(*n))
        .collect();

    Ok(Json(json!({
        "attendees": items,
        "total": matching.len(),
    })))
}

async fn start_server() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(&format!("/events/{EVENT}/attendees"), get(attendees))
        .route(
            "/events/broken/attendees",
            get(|| async { (StatusCode::OK, "not json") }),
        )
        .route(
            "/events/failing/attendees",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "database down" })),
                )
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    (format!("http://{addr}"), handle)
}

fn source(base: &str, event: &str) -> HttpDataSource<Attendee> {
    let endpoint = format!("{base}/events/{event}/attendees").parse().unwrap();
    HttpDataSource::new(endpoint, 5).unwrap()
}

#[tokio::test]
async fn fetches_first_page_without_query() {
    let (base, server) = start_server().await;

    let page = source(&base, EVENT)
        .fetch(PageRequest {
            page_index: 0,
            query: None,
        })
        .await
        .unwrap();

    assert_eq!(page.total_matching, 23);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, "1");
    assert!(page.items[0].checked_in_at.is_some());
    assert!(page.items[1].checked_in_at.is_none());

    server.abort();
}

#[tokio::test]
async fn sends_zero_based_index_and_query() {
    let (base, server) = start_server().await;

    let page = source(&base, EVENT)
        .fetch(PageRequest::for_state(&ViewState::new("Attendee 2", 1)))
        .await
        .unwrap();

    // "Attendee 2" and "Attendee 20".."Attendee 23"
    assert_eq!(page.total_matching, 5);
    assert_eq!(page.items.len(), 5);

    let last = source(&base, EVENT)
        .fetch(PageRequest::for_state(&ViewState::new("", 3)))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 3);
    assert_eq!(last.items[0].id, "21");

    server.abort();
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let (base, server) = start_server().await;

    let err = source(&base, "broken")
        .fetch(PageRequest {
            page_index: 0,
            query: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));

    server.abort();
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let (base, server) = start_server().await;

    let err = source(&base, "failing")
        .fetch(PageRequest {
            page_index: 0,
            query: None,
        })
        .await
        .unwrap_err();

    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "database down");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    server.abort();
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(&format!("http://{addr}"), EVENT)
        .fetch(PageRequest {
            page_index: 0,
            query: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn controller_drives_the_http_source() {
    let (base, server) = start_server().await;

    let location = MemoryLocation::new("http://app/attendees?page=2".parse().unwrap());
    let mut list = ListController::new(source(&base, EVENT), UrlStateCodec::new(location));

    list.refresh();
    list.wait_idle().await;
    assert_eq!(list.results().items.len(), 10);
    assert_eq!(list.results().items[0].id, "11");

    list.search_changed("Attendee 1");
    list.wait_idle().await;

    // "Attendee 1" and "Attendee 10".."Attendee 19"
    assert_eq!(list.results().total_matching, 11);
    assert_eq!(list.state().page_number, 1);
    assert_eq!(
        list.location().href().as_str(),
        "http://app/attendees?search=Attendee+1&page=1"
    );

    list.go_last();
    list.wait_idle().await;
    assert_eq!(list.state().page_number, 2);
    assert_eq!(list.results().items.len(), 1);
    assert!(list.pagination().is_last_page);

    server.abort();
}
