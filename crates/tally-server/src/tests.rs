//! Server API tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use tally_core::Database;

fn setup_test_app() -> Router {
    let db = Database::in_memory().unwrap();
    create_router(db, None)
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn send_get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Create a category and return its id
async fn create_category(app: &Router, name: &str) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/api/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    get_body_json(response).await["id"].as_i64().unwrap()
}

/// Record a transaction with a decimal amount string
async fn add_transaction(app: &Router, category_id: i64, amount: &str, date: &str, note: &str) {
    let response = send_json(
        app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": category_id,
            "amount": amount,
            "occurred_at": date,
            "note": note,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();
    let response = send_get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ========== Category API ==========

#[tokio::test]
async fn test_create_and_list_categories() {
    let app = setup_test_app();

    let id = create_category(&app, "Food").await;
    assert!(id > 0);

    let response = send_get(&app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Food");
}

#[tokio::test]
async fn test_create_category_rejects_bad_input() {
    let app = setup_test_app();

    let response = send_json(
        &app,
        "POST",
        "/api/categories",
        serde_json::json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    create_category(&app, "Food").await;
    let response = send_json(
        &app,
        "POST",
        "/api/categories",
        serde_json::json!({ "name": "Food" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_category_cascades() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;
    add_transaction(&app, food, "-23.00", "2024-03-10", "Groceries").await;
    send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": food, "limit": "35.00" }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/categories/{}", food))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "deleted");

    // Nothing left behind
    let summary = get_body_json(send_get(&app, "/api/summary").await).await;
    assert!(summary.as_array().unwrap().is_empty());
    let budgets = get_body_json(send_get(&app, "/api/budgets").await).await;
    assert!(budgets.as_array().unwrap().is_empty());

    // Second delete is a 404
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/categories/{}", food))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Transaction API ==========

#[tokio::test]
async fn test_create_transaction_converts_decimal_amount() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;

    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": food,
            "amount": "-0.01",
            "occurred_at": "2024-03-10",
            "note": "One cent down",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = get_body_json(response).await;
    assert_eq!(json["amount_minor"], -1);
    assert_eq!(json["note"], "One cent down");

    // Comma as decimal separator is tolerated
    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": food,
            "amount": "12,34",
            "occurred_at": "2024-03-11",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = get_body_json(response).await;
    assert_eq!(json["amount_minor"], 1234);
}

#[tokio::test]
async fn test_create_transaction_rejects_bad_input() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;

    // Unknown category
    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": 999,
            "amount": "-1.00",
            "occurred_at": "2024-03-10",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unparseable amount
    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": food,
            "amount": "lots",
            "occurred_at": "2024-03-10",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Bad date format
    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": food,
            "amount": "-1.00",
            "occurred_at": "10.03.2024",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_transaction_full_replace() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;
    let transport = create_category(&app, "Transport").await;

    let response = send_json(
        &app,
        "POST",
        "/api/transactions",
        serde_json::json!({
            "category_id": food,
            "amount": "-23.00",
            "occurred_at": "2024-03-10",
            "note": "Groceries",
        }),
    )
    .await;
    let tx_id = get_body_json(response).await["id"].as_i64().unwrap();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/transactions/{}", tx_id),
        serde_json::json!({
            "category_id": transport,
            "amount": "-9.50",
            "occurred_at": "2024-03-12",
            "note": "Taxi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["category_id"], transport);
    assert_eq!(json["amount_minor"], -950);
    assert_eq!(json["note"], "Taxi");

    // Unknown transaction id
    let response = send_json(
        &app,
        "PUT",
        "/api/transactions/9999",
        serde_json::json!({
            "category_id": transport,
            "amount": "-9.50",
            "occurred_at": "2024-03-12",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_transactions_range_and_pagination() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;
    let transport = create_category(&app, "Transport").await;

    add_transaction(&app, food, "-23.00", "2024-03-10", "Groceries").await;
    add_transaction(&app, food, "-15.00", "2024-03-15", "Dinner out").await;
    add_transaction(&app, transport, "-9.00", "2024-03-11", "Taxi").await;

    // Category filter
    let json = get_body_json(
        send_get(&app, &format!("/api/transactions?category_id={}", food)).await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // Inclusive range: the 'to' date itself is covered
    let json = get_body_json(
        send_get(&app, "/api/transactions?from=2024-03-11&to=2024-03-15").await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // Newest first
    assert_eq!(json[0]["note"], "Dinner out");

    // Pagination
    let json = get_body_json(send_get(&app, "/api/transactions?limit=1&offset=1").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Limit cap
    let response = send_get(&app, "/api/transactions?limit=5000").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Summary and Alerts API ==========

/// Seed the March scenario: three food transactions and one taxi inside the
/// range, one February grocery run outside it.
async fn seed_march(app: &Router) -> (i64, i64) {
    let food = create_category(app, "Food").await;
    let transport = create_category(app, "Transport").await;

    add_transaction(app, food, "-23.00", "2024-03-10", "Groceries").await;
    add_transaction(app, food, "-15.00", "2024-03-15", "Dinner out").await;
    add_transaction(app, food, "20.00", "2024-03-21", "Refund").await;
    add_transaction(app, transport, "-9.00", "2024-03-11", "Taxi").await;
    add_transaction(app, food, "-10.00", "2024-02-28", "February groceries").await;

    (food, transport)
}

#[tokio::test]
async fn test_summary_aggregates_in_decimal() {
    let app = setup_test_app();
    let (food, _) = seed_march(&app).await;

    let response = send_get(&app, "/api/summary?from=2024-03-01&to=2024-03-31").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let food_row = rows
        .iter()
        .find(|r| r["category_id"] == food)
        .expect("food summary present");
    assert_eq!(food_row["income"], 20.0);
    assert_eq!(food_row["expense"], 38.0);
    assert_eq!(food_row["net"], -18.0);
    assert_eq!(food_row["count"], 3);
}

#[tokio::test]
async fn test_alerts_report_exceedance() {
    let app = setup_test_app();
    let (food, _) = seed_march(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": food, "limit": "35.00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_get(&app, "/api/alerts?from=2024-03-01&to=2024-03-31").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let alerts = json.as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["category_id"], food);
    assert_eq!(alerts[0]["category_name"], "Food");
    assert_eq!(alerts[0]["limit"], 35.0);
    assert_eq!(alerts[0]["spent"], 38.0);
    assert_eq!(alerts[0]["exceeded_by"], 3.0);

    // Raising the limit to exactly the spend clears the alert
    send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": food, "limit": "38.00" }),
    )
    .await;
    let json = get_body_json(send_get(&app, "/api/alerts?from=2024-03-01&to=2024-03-31").await)
        .await;
    assert!(json.as_array().unwrap().is_empty());
}

// ========== Budget API ==========

#[tokio::test]
async fn test_budget_upsert_replaces() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;

    let response = send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": food, "limit": "35.00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = get_body_json(response).await;
    assert_eq!(json["limit_minor"], 3500);
    assert_eq!(json["category_name"], "Food");

    send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": food, "limit": "50.00" }),
    )
    .await;

    let budgets = get_body_json(send_get(&app, "/api/budgets").await).await;
    let budgets = budgets.as_array().unwrap();
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets[0]["limit_minor"], 5000);
}

#[tokio::test]
async fn test_budget_rejects_bad_input() {
    let app = setup_test_app();
    let food = create_category(&app, "Food").await;

    // Zero or negative limits are rejected, not treated as "no limit"
    for limit in ["0", "-10.00"] {
        let response = send_json(
            &app,
            "POST",
            "/api/budgets",
            serde_json::json!({ "category_id": food, "limit": limit }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Unknown category never creates an orphan budget
    let response = send_json(
        &app,
        "POST",
        "/api/budgets",
        serde_json::json!({ "category_id": 999, "limit": "10.00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let budgets = get_body_json(send_get(&app, "/api/budgets").await).await;
    assert!(budgets.as_array().unwrap().is_empty());
}
