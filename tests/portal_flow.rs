//! Login and dashboard flows against a stub customer API served over HTTP.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use subs_portal::views::{
    CustomerPicker, DashboardFlow, LoginFlow, Route, LOGIN_FAILED_MESSAGE,
    METRICS_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
use subs_portal::{
    ApiConfig, CustomerKey, FileSessionStore, HttpPortalApi, MemorySessionStore, PortalApi,
    PortalError, SessionStore,
};

#[derive(Default)]
struct Upstream {
    phone_lookups: Mutex<Vec<String>>,
    metric_keys: Mutex<Vec<String>>,
    fail_metrics: bool,
    fail_lookups: bool,
}

type Shared = Arc<Upstream>;

async fn customer_by_phone(
    State(upstream): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let phone = params.get("phone").cloned().unwrap_or_default();
    upstream.phone_lookups.lock().unwrap().push(phone.clone());

    if upstream.fail_lookups {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "warehouse unavailable"})),
        )
            .into_response();
    }

    match phone.as_str() {
        "5551234567" => Json(json!({
            "CUSTOMER_KEY": 42,
            "CUSTOMERFNAME": "Sam",
            "CUSTOMERLNAME": "Smith",
            "CUSTOMERPHONE": "5551234567"
        }))
        .into_response(),
        "not json" => "<html>oops</html>".into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Customer not found"})),
        )
            .into_response(),
    }
}

async fn customer_metrics(
    State(upstream): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let key = params.get("customer_key").cloned().unwrap_or_default();
    upstream.metric_keys.lock().unwrap().push(key);

    if upstream.fail_metrics {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    Json(json!({
        "favorite_sandwich": {"CUSTOMER_KEY": 42, "SANDWICH": "Italian BMT", "SANDWICH_COUNT": 17},
        "favorite_side": {"CUSTOMER_KEY": 42, "SIDE": "Cookie", "SIDE_COUNT": 8},
        "total_inches": {"CUSTOMER_KEY": 42, "INCHES_OF_SANDWICH": 204},
        "most_visited_store": {"CUSTOMER_KEY": 42, "CITY": "Orem", "MOST_VISITED_COUNT": 12},
        "favorite_month": {"CUSTOMER_KEY": 42, "MONTH": 3, "NUMOFVISITS": 4}
    }))
    .into_response()
}

async fn customers() -> Response {
    Json(json!({
        "columns": ["CUSTOMER_KEY", "CUSTOMERFNAME", "CUSTOMERLNAME", "CUSTOMERPHONE"],
        "results": [
            {"CUSTOMER_KEY": 42, "CUSTOMERFNAME": "Sam", "CUSTOMERLNAME": "Smith", "CUSTOMERPHONE": "5551234567"},
            {"CUSTOMER_KEY": 43, "CUSTOMERFNAME": "Ana", "CUSTOMERLNAME": "Diaz", "CUSTOMERPHONE": "5550000000"}
        ],
        "row_count": 2
    }))
    .into_response()
}

async fn spawn_upstream(upstream: Upstream) -> (HttpPortalApi, Shared) {
    let shared = Arc::new(upstream);
    let app = Router::new()
        .route("/api/data/get_customer_by_phone/", get(customer_by_phone))
        .route("/api/data/customer_metrics/", get(customer_metrics))
        .route("/api/data/get_customers/", get(customers))
        .with_state(Arc::clone(&shared));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HttpPortalApi::new(ApiConfig {
        base_url: format!("http://{}/api", addr),
        request_timeout_ms: 5_000,
    })
    .unwrap();

    (api, shared)
}

#[tokio::test]
async fn test_login_then_dashboard() {
    let (api, upstream) = spawn_upstream(Upstream::default()).await;
    let session = MemorySessionStore::new();

    let mut login = LoginFlow::new();
    login.set_phone("5551234567");
    let route = login.submit(&api, &session).await.unwrap();

    assert_eq!(route, Some(Route::Dashboard));
    let stored = session.load().unwrap().unwrap();
    assert_eq!(stored.customer_key, CustomerKey::Number(42));
    assert_eq!(stored.first_name, "Sam");

    let dashboard = DashboardFlow::load(&api, &session).await;
    assert_eq!(dashboard.greeting().as_deref(), Some("HEY Sam!"));
    assert_eq!(*upstream.metric_keys.lock().unwrap(), vec!["42".to_string()]);

    let cards = dashboard.cards();
    assert_eq!(cards[0].value, "Italian BMT");
    assert_eq!(cards[2].value, "204 inches");
    assert_eq!(cards[3].value, "Orem");
    assert_eq!(cards[4].value, "March");
}

#[tokio::test]
async fn test_unknown_phone_shows_not_found() {
    let (api, upstream) = spawn_upstream(Upstream::default()).await;
    let session = MemorySessionStore::new();

    let mut login = LoginFlow::new();
    login.set_phone("+1 (555) 000");
    let route = login.submit(&api, &session).await.unwrap();

    assert_eq!(route, None);
    assert_eq!(login.error_message(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(session.load().unwrap(), None);
    assert_eq!(
        *upstream.phone_lookups.lock().unwrap(),
        vec!["+1 (555) 000".to_string()]
    );
}

#[tokio::test]
async fn test_server_error_and_bad_body_are_generic() {
    let (api, _) = spawn_upstream(Upstream {
        fail_lookups: true,
        ..Default::default()
    })
    .await;
    let session = MemorySessionStore::new();

    let mut login = LoginFlow::new();
    login.set_phone("5551234567");
    login.submit(&api, &session).await.unwrap();
    assert_eq!(login.error_message(), Some(LOGIN_FAILED_MESSAGE));

    let (api, _) = spawn_upstream(Upstream::default()).await;
    let err = api.find_customer_by_phone("not json").await.unwrap_err();
    assert!(matches!(err, PortalError::Decode(_)));

    login.set_phone("not json");
    login.submit(&api, &session).await.unwrap();
    assert_eq!(login.error_message(), Some(LOGIN_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_dashboard_without_session_makes_no_request() {
    let (api, upstream) = spawn_upstream(Upstream::default()).await;
    let session = MemorySessionStore::new();

    let dashboard = DashboardFlow::load(&api, &session).await;

    assert_eq!(dashboard.redirect(), Some(Route::Login));
    assert!(upstream.metric_keys.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_failure_message() {
    let (api, _) = spawn_upstream(Upstream {
        fail_metrics: true,
        ..Default::default()
    })
    .await;
    let session = MemorySessionStore::with_customer(subs_portal::CustomerRecord::new(42, "Sam"));

    let dashboard = DashboardFlow::load(&api, &session).await;
    assert_eq!(dashboard.error_message(), Some(METRICS_FAILED_MESSAGE));
}

#[tokio::test]
async fn test_logout_with_file_session() {
    let dir = tempfile::tempdir().unwrap();
    let (api, upstream) = spawn_upstream(Upstream::default()).await;
    let session = FileSessionStore::new(dir.path().join("session.json"));

    let mut login = LoginFlow::new();
    login.set_phone("5551234567");
    login.submit(&api, &session).await.unwrap();

    let mut dashboard = DashboardFlow::load(&api, &session).await;
    assert_eq!(dashboard.logout(&session).unwrap(), Route::Login);
    assert_eq!(session.load().unwrap(), None);

    let again = DashboardFlow::load(&api, &session).await;
    assert_eq!(again.redirect(), Some(Route::Login));
    assert_eq!(upstream.metric_keys.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_picker_lists_and_selects() {
    let (api, upstream) = spawn_upstream(Upstream::default()).await;
    let mut picker = CustomerPicker::new();

    picker.load_customers(&api).await.unwrap();
    assert_eq!(picker.customers().len(), 2);

    picker.choose_by_value(&api, "43").await.unwrap();
    assert_eq!(picker.selected_customer().unwrap().display_name(), "Ana Diaz");
    assert_eq!(picker.cards().len(), 5);
    assert_eq!(*upstream.metric_keys.lock().unwrap(), vec!["43".to_string()]);
}
