//! Student HTTP Routes
//!
//! CRUD endpoints over the student collection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::registry::{EntityKind, RegistryError, Student, StudentPatch};
use crate::validate;

use super::errors::ApiResult;
use super::state::AppState;

/// Create student routes
pub fn student_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/students", get(list_students_handler))
        .route("/students", post(create_student_handler))
        .route("/students/{id}", get(get_student_handler))
        .route("/students/{id}", put(update_student_handler))
        .route("/students/{id}", delete(delete_student_handler))
        .with_state(state)
}

async fn list_students_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.registry()?.list_students()))
}

async fn create_student_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let Json(patch) = body?;
    validate::validate_student(&patch)?;
    let student = state.registry_mut()?.create_student(patch);
    Ok((StatusCode::CREATED, Json(student)))
}

async fn get_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    let student = state
        .registry()?
        .get_student(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Student))?;
    Ok(Json(student))
}

async fn update_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<StudentPatch>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let Json(patch) = body?;
    let mut registry = state.registry_mut()?;
    // Existence first: a PUT to a missing id is 404 even if the body is
    // also invalid.
    registry
        .get_student(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Student))?;
    validate::validate_student(&patch)?;
    let student = registry.update_student(&id, patch)?;
    Ok(Json(student))
}

async fn delete_student_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.registry_mut()?.delete_student(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RegistryError::NotFound(EntityKind::Student).into())
    }
}
