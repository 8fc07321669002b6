//! Notebook inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::notebook::{CreateNotebook, Notebook, NotebookQuery, UpdateNotebookStatus},
};

use super::AuthenticatedUser;

/// List notebooks, optionally filtered by status
#[utoipa::path(
    get,
    path = "/notebooks",
    tag = "notebooks",
    security(("bearer_auth" = [])),
    params(NotebookQuery),
    responses(
        (status = 200, description = "Notebooks", body = Vec<Notebook>)
    )
)]
pub async fn list_notebooks(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<NotebookQuery>,
) -> AppResult<Json<Vec<Notebook>>> {
    let notebooks = state.services.notebooks.list(query.status).await?;
    Ok(Json(notebooks))
}

/// Get a notebook by id
#[utoipa::path(
    get,
    path = "/notebooks/{id}",
    tag = "notebooks",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Notebook ID")
    ),
    responses(
        (status = 200, description = "Notebook", body = Notebook),
        (status = 404, description = "Notebook not found")
    )
)]
pub async fn get_notebook(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Notebook>> {
    let notebook = state.services.notebooks.get(id).await?;
    Ok(Json(notebook))
}

/// Register a new notebook
#[utoipa::path(
    post,
    path = "/notebooks",
    tag = "notebooks",
    security(("bearer_auth" = [])),
    request_body = CreateNotebook,
    responses(
        (status = 201, description = "Notebook created", body = Notebook),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Serial number already registered")
    )
)]
pub async fn create_notebook(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateNotebook>,
) -> AppResult<(StatusCode, Json<Notebook>)> {
    let notebook = state
        .services
        .notebooks
        .create(claims.user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(notebook)))
}

/// Manually set a notebook's status (available ↔ maintenance)
#[utoipa::path(
    put,
    path = "/notebooks/{id}/status",
    tag = "notebooks",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Notebook ID")
    ),
    request_body = UpdateNotebookStatus,
    responses(
        (status = 200, description = "Status updated", body = Notebook),
        (status = 400, description = "Transition not allowed"),
        (status = 404, description = "Notebook not found")
    )
)]
pub async fn update_notebook_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateNotebookStatus>,
) -> AppResult<Json<Notebook>> {
    let notebook = state
        .services
        .notebooks
        .set_status(claims.user_id, id, request.status)
        .await?;
    Ok(Json(notebook))
}
