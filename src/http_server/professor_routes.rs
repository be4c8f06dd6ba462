//! Professor HTTP Routes
//!
//! CRUD endpoints over the professor collection.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::registry::{EntityKind, Professor, ProfessorPatch, RegistryError};
use crate::validate;

use super::errors::ApiResult;
use super::state::AppState;

/// Create professor routes
pub fn professor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/professors", get(list_professors_handler))
        .route("/professors", post(create_professor_handler))
        .route("/professors/{id}", get(get_professor_handler))
        .route("/professors/{id}", put(update_professor_handler))
        .route("/professors/{id}", delete(delete_professor_handler))
        .with_state(state)
}

async fn list_professors_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Professor>>> {
    Ok(Json(state.registry()?.list_professors()))
}

async fn create_professor_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ProfessorPatch>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Professor>)> {
    let Json(patch) = body?;
    validate::validate_professor(&patch)?;
    let professor = state.registry_mut()?.create_professor(patch);
    Ok((StatusCode::CREATED, Json(professor)))
}

async fn get_professor_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Professor>> {
    let professor = state
        .registry()?
        .get_professor(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Professor))?;
    Ok(Json(professor))
}

async fn update_professor_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<ProfessorPatch>, JsonRejection>,
) -> ApiResult<Json<Professor>> {
    let Json(patch) = body?;
    let mut registry = state.registry_mut()?;
    registry
        .get_professor(&id)
        .ok_or(RegistryError::NotFound(EntityKind::Professor))?;
    validate::validate_professor(&patch)?;
    let professor = registry.update_professor(&id, patch)?;
    Ok(Json(professor))
}

async fn delete_professor_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.registry_mut()?.delete_professor(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(RegistryError::NotFound(EntityKind::Professor).into())
    }
}
