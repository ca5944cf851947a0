//! Handlers for the author collection and item endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::author::{
    AuthorListResponse, AuthorPatchRequest, AuthorRequest, AuthorResponse,
};
use crate::api::extractors::{ApiJson, ApiPath};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses((status = 200, description = "All authors", body = AuthorListResponse))
)]
pub async fn list_authors_handler(
    State(state): State<AppState>,
) -> Result<Json<AuthorListResponse>, AppError> {
    let authors = state.author_service.list_authors().await?;
    Ok(Json(authors.into()))
}

/// Creates an author. Books are linked from the book side.
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse,
            headers(("Location" = String, description = "URI of the new author"))),
        (status = 400, description = "Validation failed", body = ErrorBody)
    )
)]
pub async fn create_author_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let author = state.author_service.create_author(payload.into()).await?;
    let location = format!("/authors/{}", author.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuthorResponse::from(author)),
    ))
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found", body = ErrorBody)
    )
)]
pub async fn get_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.get_author(id).await?;
    Ok(Json(author.into()))
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author replaced", body = AuthorResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Author not found", body = ErrorBody)
    )
)]
pub async fn replace_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.replace_author(id, payload.into()).await?;
    Ok(Json(author.into()))
}

#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorPatchRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Author not found", body = ErrorBody)
    )
)]
pub async fn patch_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AuthorPatchRequest>,
) -> Result<Json<AuthorResponse>, AppError> {
    let author = state.author_service.patch_author(id, payload.into()).await?;
    Ok(Json(author.into()))
}

/// Deletes an author and unlinks them from their books.
///
/// # Errors
///
/// Returns 409 Conflict if the author is the only author of a book; the
/// details list those book ids.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = ErrorBody),
        (status = 409, description = "Author is the only author of a book", body = ErrorBody)
    )
)]
pub async fn delete_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.author_service.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
