//! Department HTTP Routes
//!
//! CRUD endpoints over the department collection, plus the two
//! department traversals.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::registry::{Class, Department, DepartmentPatch, EntityKind, Professor, RegistryError};
use crate::validate;

use super::errors::ApiResult;
use super::state::AppState;

/// Create department routes
pub fn department_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/departments", get(list_departments_handler))
        .route("/departments", post(create_department_handler))
        .route("/departments/{id}", get(get_department_handler))
        .route("/departments/{id}", put(update_department_handler))
        .route("/departments/{id}", delete(delete_department_handler))
        .route("/departments/{id}/classes", get(department_classes_handler))
        .route(
            "/departments/{id}/professors",
            get(department_professors_handler),
        )
        .with_state(state)
}

async fn list_departments_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Department>>> {
    Ok(Json(state.registry()?.list_departments()))
}

async fn create_department_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DepartmentPatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Department>)> {
    let Json(patch) = body?;
    validate::validate_department(&patch)?;
    let department = state.registry_mut()?.create_department(patch);
    Ok((StatusCode::CREATED, Json(department)))
}

async fn get_department_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Department>> {
    let department = state
        .registry()?
        .get_department(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Department))?;
    Ok(Json(department))
}

async fn update_department_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<DepartmentPatch>, JsonRejection>,
) -> ApiResult<Json<Department>> {
    let Json(patch) = body?;
    let mut registry = state.registry_mut()?;
    registry
        .get_department(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Department))?;
    validate::validate_department(&patch)?;
    let department = registry.update_department(&id, patch)?;
    Ok(Json(department))
}

async fn delete_department_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.registry_mut()?.delete_department(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RegistryError::NotFound(EntityKind::Department).into())
    }
}

async fn department_classes_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Class>>> {
    Ok(Json(state.registry()?.department_classes(&id)))
}

/// Membership is derived per query from the free-text department field of
/// each professor's classes; nothing is stored.
async fn department_professors_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Professor>>> {
    Ok(Json(state.registry()?.department_professors(&id)))
}
