use axum::Json;

use crate::application::dto::HealthResponse;

pub mod bookings_handler;
pub mod employees_handler;
pub mod hateoas;
pub mod orders_handler;
pub mod problem;

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
