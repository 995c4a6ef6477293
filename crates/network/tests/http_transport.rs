// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Integration tests for the reqwest-backed transport using a mock server.

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use hubsync_network::{
    http::{HttpMethod, HttpTransport, ReqwestTransport},
    ratelimiter::{CallRecordStore, InMemoryCallRecordStore, RateLimitedRequester, RateWindow},
};
use rstest::rstest;
use serde_json::json;

async fn handle_echo_query(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    Json(json!({ "echo": params }))
}

async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "no such thing" })))
}

async fn handle_create(body: String) -> impl IntoResponse {
    (StatusCode::CREATED, body)
}

fn create_test_router() -> Router {
    Router::new()
        .route("/echo", get(handle_echo_query))
        .route("/missing", get(handle_not_found))
        .route("/create", post(handle_create))
}

async fn start_test_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_test_router();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    addr
}

fn transport() -> ReqwestTransport {
    let headers = HashMap::from([("user-agent".to_string(), "hubsync-test".to_string())]);
    ReqwestTransport::new(headers, Some(10)).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_query_params_reach_the_server() {
    let addr = start_test_server().await;
    let url = format!("http://{addr}/echo");

    let params = vec![("hapikey".to_string(), "demo-key".to_string())];
    let resp = transport()
        .send(HttpMethod::Get, &url, None, Some(params), None)
        .await
        .unwrap();

    assert_eq!(resp.status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(value["echo"]["hapikey"], "demo-key");
}

#[rstest]
#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let addr = start_test_server().await;
    let url = format!("http://{addr}/missing");

    let resp = transport()
        .send(HttpMethod::Get, &url, None, None, None)
        .await
        .unwrap();

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let value: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(value["message"], "no such thing");
}

#[rstest]
#[tokio::test]
async fn test_post_body_roundtrip() {
    let addr = start_test_server().await;
    let url = format!("http://{addr}/create");

    let body = br#"{"properties":[]}"#.to_vec();
    let resp = transport()
        .send(HttpMethod::Post, &url, None, None, Some(body))
        .await
        .unwrap();

    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(resp.body.as_ref(), br#"{"properties":[]}"#);
}

#[rstest]
#[tokio::test]
async fn test_requester_over_real_transport() {
    let addr = start_test_server().await;
    let url = format!("http://{addr}/echo");

    let store = Arc::new(InMemoryCallRecordStore::new());
    let requester = RateLimitedRequester::new(
        Arc::new(transport()),
        store.clone(),
        RateWindow::new(8, 10.0),
        None,
    );

    // Stay under the quota so the test never sleeps for real
    for _ in 0..3 {
        let resp = requester
            .execute(HttpMethod::Get, &url, None, None, None)
            .await
            .unwrap();
        assert_eq!(resp.status, StatusCode::OK);
    }

    let records = store.get_records("hub_api_calls").await.unwrap().unwrap();
    assert_eq!(records.len(), 3);
}
