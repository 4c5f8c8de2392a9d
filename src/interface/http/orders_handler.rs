use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    application::{
        dto::{OrderRequest, OrderResponse},
        order_service::TransitionOutcome,
    },
    infrastructure::Entity,
    interface::http::{
        hateoas::{CollectionModel, EntityModel, order_collection, order_model, order_self_href},
        problem::{ApiError, ApiResult},
    },
    state::AppState,
};

pub async fn list_orders(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionModel<OrderResponse>>> {
    let orders = state.order_service.list().await?;
    Ok(Json(order_collection(orders)?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<EntityModel<OrderResponse>>> {
    let order = state.order_service.get(id).await?;
    Ok(Json(order_model(order)?))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> ApiResult<impl IntoResponse> {
    let order = state.order_service.create(request.description).await?;
    let id = order.require_id()?;
    let model = order_model(order)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, order_self_href(id))],
        Json(model),
    ))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<EntityModel<OrderResponse>>> {
    match state.order_service.cancel(id).await? {
        TransitionOutcome::Applied(order) => Ok(Json(order_model(order)?)),
        TransitionOutcome::Rejected(current) => Err(ApiError::method_not_allowed(format!(
            "You can't cancel an order that is in the {current} status"
        ))),
    }
}

pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<EntityModel<OrderResponse>>> {
    match state.order_service.complete(id).await? {
        TransitionOutcome::Applied(order) => Ok(Json(order_model(order)?)),
        TransitionOutcome::Rejected(current) => Err(ApiError::method_not_allowed(format!(
            "You can't complete an order that is in the {current} status"
        ))),
    }
}
