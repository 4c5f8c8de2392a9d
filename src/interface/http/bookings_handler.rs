use axum::{Json, extract::State};

use crate::{
    application::dto::BookingResponse,
    domain::errors::DomainError,
    infrastructure::Entity,
    interface::http::problem::ApiResult,
    state::AppState,
};

/// Plain listing, no hypermedia: bookings are a read-only demo resource.
pub async fn list_bookings(State(state): State<AppState>) -> ApiResult<Json<Vec<BookingResponse>>> {
    let bookings = state.booking_service.list().await?;

    let items = bookings
        .into_iter()
        .map(|booking| Ok(BookingResponse::new(booking.require_id()?, booking)))
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(Json(items))
}
