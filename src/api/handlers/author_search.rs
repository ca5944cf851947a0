//! Handlers for the derived author finders under `/authors/search`.

use axum::{Json, extract::State};

use crate::api::dto::author::AuthorListResponse;
use crate::api::dto::search::{FinderLinksResponse, LastNameParams, TitleParams};
use crate::api::extractors::ApiQuery;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

pub const AUTHOR_FINDERS: &[(&str, &str)] =
    &[("findByLastName", "lastName"), ("findByBooksTitle", "title")];

#[utoipa::path(
    get,
    path = "/authors/search",
    tag = "authors",
    responses((status = 200, description = "Available author finders", body = FinderLinksResponse))
)]
pub async fn author_finders_handler() -> Json<FinderLinksResponse> {
    Json(FinderLinksResponse::new("/authors", AUTHOR_FINDERS))
}

#[utoipa::path(
    get,
    path = "/authors/search/findByLastName",
    tag = "authors",
    params(LastNameParams),
    responses(
        (status = 200, description = "Authors with exactly this last name", body = AuthorListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_last_name_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LastNameParams>,
) -> Result<Json<AuthorListResponse>, AppError> {
    let authors = state
        .author_service
        .find_by_last_name(&params.last_name)
        .await?;
    Ok(Json(authors.into()))
}

/// Authors of at least one book with exactly this title, each listed once.
#[utoipa::path(
    get,
    path = "/authors/search/findByBooksTitle",
    tag = "authors",
    params(TitleParams),
    responses(
        (status = 200, description = "Authors of a book with this title", body = AuthorListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_books_title_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TitleParams>,
) -> Result<Json<AuthorListResponse>, AppError> {
    let authors = state.author_service.find_by_books_title(&params.title).await?;
    Ok(Json(authors.into()))
}
