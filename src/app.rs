use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{delete, get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        bookings_handler::list_bookings,
        employees_handler::{
            create_employee, delete_employee, get_employee, list_employees, replace_employee,
        },
        healthcheck,
        orders_handler::{cancel_order, complete_order, create_order, get_order, list_orders},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(replace_employee).delete(delete_employee),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/cancel", delete(cancel_order))
        .route("/orders/{id}/complete", put(complete_order))
        .route("/bookings", get(list_bookings))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
