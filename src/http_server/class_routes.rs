//! Class HTTP Routes
//!
//! CRUD endpoints over the class collection, plus the roster traversal.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::registry::{Class, ClassPatch, EntityKind, RegistryError, Student};
use crate::validate;

use super::errors::ApiResult;
use super::state::AppState;

/// Create class routes
pub fn class_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/classes", get(list_classes_handler))
        .route("/classes", post(create_class_handler))
        .route("/classes/{id}", get(get_class_handler))
        .route("/classes/{id}", put(update_class_handler))
        .route("/classes/{id}", delete(delete_class_handler))
        .route("/classes/{id}/students", get(class_students_handler))
        .with_state(state)
}

async fn list_classes_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Class>>> {
    Ok(Json(state.registry()?.list_classes()))
}

async fn create_class_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ClassPatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Class>)> {
    let Json(patch) = body?;
    validate::validate_class(&patch)?;
    let class = state.registry_mut()?.create_class(patch);
    Ok((StatusCode::CREATED, Json(class)))
}

async fn get_class_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Class>> {
    let class = state
        .registry()?
        .get_class(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Class))?;
    Ok(Json(class))
}

async fn update_class_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<ClassPatch>, JsonRejection>,
) -> ApiResult<Json<Class>> {
    let Json(patch) = body?;
    let mut registry = state.registry_mut()?;
    registry
        .get_class(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Class))?;
    validate::validate_class(&patch)?;
    let class = registry.update_class(&id, patch)?;
    Ok(Json(class))
}

async fn delete_class_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.registry_mut()?.delete_class(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RegistryError::NotFound(EntityKind::Class).into())
    }
}

/// Roster traversal: unknown classes and dangling roster ids both degrade
/// to an empty list, never an error.
async fn class_students_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.registry()?.class_students(&id)))
}
