#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use payroll_api::{
    application::{
        booking_service::BookingService, employee_service::EmployeeService,
        order_service::OrderService,
    },
    bootstrap, build_router,
    domain::{booking::Booking, employee::Employee, order::Order},
    infrastructure::{DynRepository, in_memory::InMemoryRepository},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn empty_app() -> Router {
    let (employees, orders, bookings) = repositories();
    router(employees, orders, bookings)
}

pub async fn seeded_app() -> Router {
    let (employees, orders, bookings) = repositories();
    bootstrap::seed(&employees, &orders, &bookings)
        .await
        .expect("seeding should succeed");
    router(employees, orders, bookings)
}

fn repositories() -> (
    DynRepository<Employee>,
    DynRepository<Order>,
    DynRepository<Booking>,
) {
    (
        Arc::new(InMemoryRepository::new()),
        Arc::new(InMemoryRepository::new()),
        Arc::new(InMemoryRepository::new()),
    )
}

fn router(
    employees: DynRepository<Employee>,
    orders: DynRepository<Order>,
    bookings: DynRepository<Booking>,
) -> Router {
    build_router(AppState::new(
        Arc::new(EmployeeService::new(employees)),
        Arc::new(OrderService::new(orders)),
        Arc::new(BookingService::new(bookings)),
    ))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Runs one request in-process. Non-JSON bodies (the plain-text 404s)
/// come back as a JSON string value.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.expect("request should be handled");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, headers, body)
}

pub async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    (status, body)
}

pub fn assert_problem(body: &Value, status: u16, title: &str) {
    assert_eq!(
        body.get("status").and_then(Value::as_u64),
        Some(u64::from(status))
    );
    assert_eq!(body.get("title").and_then(Value::as_str), Some(title));
}
