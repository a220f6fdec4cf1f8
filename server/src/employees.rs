//! REST routes for employee records.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use platform_api::{ApiError, ApiResult, internal_error};
use products_hr::{Employee, EmployeeInput, StoreError};
use tracing::instrument;

use crate::http::AppState;

const COLLECTION: &str = "/api/employees";
const ITEM: &str = "/api/employees/{id}";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, get(list).post(create))
        .route(ITEM, get(get_by_id).put(update).delete(delete))
}

fn store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound(_) => ApiError::NotFound,
        other => internal_error(other),
    }
}

#[instrument(name = "employees.list", skip_all)]
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.store.list().await.map_err(store_error)?;
    Ok(Json(employees))
}

#[instrument(name = "employees.get", skip(state))]
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    state
        .store
        .get(id)
        .await
        .map_err(store_error)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[instrument(name = "employees.create", skip_all)]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Json<Employee>> {
    let employee = state.store.create(input).await.map_err(store_error)?;
    Ok(Json(employee))
}

#[instrument(name = "employees.update", skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeInput>,
) -> ApiResult<Json<Employee>> {
    let employee = state.store.update(id, input).await.map_err(store_error)?;
    Ok(Json(employee))
}

#[instrument(name = "employees.delete", skip(state))]
async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.store.delete(id).await.map_err(store_error)?;
    Ok(StatusCode::OK)
}
