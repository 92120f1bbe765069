use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::system::users::service;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub search: Option<String>,
}

/// GET /api/system/users
pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<User>>, axum::http::StatusCode> {
    match service::list_all(params.search.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/system/users/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<User>, axum::http::StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/users
pub async fn create(
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    match service::create_user(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e.to_string())),
    }
}

/// POST /api/system/users/superuser
pub async fn create_superuser(
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    match service::create_superuser(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e.to_string())),
    }
}

/// PUT /api/system/users/:id
pub async fn update(
    Path(id): Path<String>,
    Json(mut dto): Json<UpdateUserDto>,
) -> Result<(), (axum::http::StatusCode, String)> {
    dto.id = id;
    match service::update(dto).await {
        Ok(()) => Ok(()),
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e.to_string())),
    }
}

/// DELETE /api/system/users/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    match service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
