use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    application::dto::{EmployeeRequest, EmployeeResponse},
    domain::employee::Employee,
    infrastructure::Entity,
    interface::http::{
        hateoas::{
            CollectionModel, EntityModel, employee_collection, employee_model, employee_self_href,
        },
        problem::ApiResult,
    },
    state::AppState,
};

pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionModel<EmployeeResponse>>> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employee_collection(employees)?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<EntityModel<EmployeeResponse>>> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(employee_model(employee)?))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> ApiResult<impl IntoResponse> {
    let employee = state
        .employee_service
        .create(request.into_fields()?)
        .await?;

    created_response(employee)
}

/// Upsert. Responds 201 Created on the update path as well; existing
/// callers depend on that status code.
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<EmployeeRequest>,
) -> ApiResult<impl IntoResponse> {
    let employee = state
        .employee_service
        .upsert(id, request.into_fields()?)
        .await?;

    created_response(employee)
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state.employee_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn created_response(employee: Employee) -> ApiResult<impl IntoResponse> {
    let id = employee.require_id()?;
    let model = employee_model(employee)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, employee_self_href(id))],
        Json(model),
    ))
}
