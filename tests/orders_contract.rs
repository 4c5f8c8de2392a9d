mod common;

use axum::http::StatusCode;
use common::{assert_problem, empty_app, empty_request, json_request, request_json, seeded_app, send};
use serde_json::{Value, json};

#[tokio::test]
async fn create_forces_in_progress_then_complete_exactly_once() {
    let app = empty_app();

    // The caller asks for COMPLETED; the store must say IN_PROGRESS.
    let (status, headers, created) = send(
        app.clone(),
        json_request(
            "POST",
            "/orders",
            json!({ "description": "MacBook Pro", "status": "COMPLETED" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_u64().expect("created order has an id");
    assert_eq!(
        headers.get("location").and_then(|value| value.to_str().ok()),
        Some(format!("/orders/{id}").as_str())
    );
    assert_eq!(created["status"], "IN_PROGRESS");
    assert_eq!(created["_links"]["self"]["href"], format!("/orders/{id}"));
    assert_eq!(created["_links"]["cancel"]["href"], format!("/orders/{id}/cancel"));
    assert_eq!(
        created["_links"]["complete"]["href"],
        format!("/orders/{id}/complete")
    );

    let (status, completed) = request_json(
        app.clone(),
        empty_request("PUT", &format!("/orders/{id}/complete")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "COMPLETED");
    assert!(completed["_links"].get("cancel").is_none());
    assert!(completed["_links"].get("complete").is_none());

    let (status, headers, problem) = send(
        app.clone(),
        empty_request("PUT", &format!("/orders/{id}/complete")),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        headers
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/problem+json")
    );
    assert_problem(&problem, 405, "Method not allowed");
    assert_eq!(
        problem["detail"],
        "You can't complete an order that is in the COMPLETED status"
    );

    let (status, problem) = request_json(
        app,
        empty_request("DELETE", &format!("/orders/{id}/cancel")),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        problem["detail"],
        "You can't cancel an order that is in the COMPLETED status"
    );
}

#[tokio::test]
async fn cancel_succeeds_exactly_once() {
    let app = empty_app();

    let (_, created) = request_json(
        app.clone(),
        json_request("POST", "/orders", json!({ "description": "iPhone" })),
    )
    .await;
    let id = created["id"].as_u64().expect("id");

    let (status, cancelled) = request_json(
        app.clone(),
        empty_request("DELETE", &format!("/orders/{id}/cancel")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "CANCELLED");
    assert!(cancelled["_links"].get("cancel").is_none());
    assert!(cancelled["_links"].get("complete").is_none());

    let (status, problem) = request_json(
        app.clone(),
        empty_request("DELETE", &format!("/orders/{id}/cancel")),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        problem["detail"],
        "You can't cancel an order that is in the CANCELLED status"
    );

    let (status, problem) = request_json(
        app,
        empty_request("PUT", &format!("/orders/{id}/complete")),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        problem["detail"],
        "You can't complete an order that is in the CANCELLED status"
    );
}

#[tokio::test]
async fn missing_orders_are_a_plain_text_404_everywhere() {
    let app = empty_app();

    for request in [
        empty_request("GET", "/orders/7"),
        empty_request("DELETE", "/orders/7/cancel"),
        empty_request("PUT", "/orders/7/complete"),
    ] {
        let (status, body) = request_json(app.clone(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::String("Could not find order 7".to_string()));
    }
}

#[tokio::test]
async fn action_links_track_the_status_across_the_listing() {
    let app = seeded_app().await;

    let (status, collection) = request_json(app, empty_request("GET", "/orders")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(collection["_links"]["self"]["href"], "/orders");

    let items = collection["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);

    for item in items {
        let in_progress = item["status"] == "IN_PROGRESS";
        assert_eq!(item["_links"].get("cancel").is_some(), in_progress);
        assert_eq!(item["_links"].get("complete").is_some(), in_progress);
    }

    // Seeded terminal state survives as COMPLETED.
    let macbook = items
        .iter()
        .find(|item| item["description"] == "MacBook Pro")
        .expect("seeded MacBook Pro order");
    assert_eq!(macbook["status"], "COMPLETED");
}
