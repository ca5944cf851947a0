//! Handlers for the derived book finders under `/books/search`.
//!
//! Every finder answers `200` with `{ "items": [...] }`; no match is an
//! empty list, never a 404. String matches are case-sensitive.

use axum::{Json, extract::State};

use crate::api::dto::book::BookListResponse;
use crate::api::dto::search::{
    FinderLinksResponse, KeywordParams, KeywordPublishedDateParams, LastNameParams,
    PriceRangeParams, PublishedDateParams, TitleParams,
};
use crate::api::extractors::ApiQuery;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Finder names and their query parameters, in index order.
pub const BOOK_FINDERS: &[(&str, &str)] = &[
    ("findByTitle", "title"),
    ("findByTitleContains", "keyword"),
    ("findByPublishedDateAfter", "publishedDate"),
    ("findByTitleContainsAndPublishedDateAfter", "keyword,publishedDate"),
    (
        "findByTitleContainsAndPriceCurrencyAndPriceAmountBetween",
        "keyword,currency,low,high",
    ),
    ("findByAuthorsLastName", "lastName"),
];

#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    responses((status = 200, description = "Available book finders", body = FinderLinksResponse))
)]
pub async fn book_finders_handler() -> Json<FinderLinksResponse> {
    Json(FinderLinksResponse::new("/books", BOOK_FINDERS))
}

#[utoipa::path(
    get,
    path = "/books/search/findByTitle",
    tag = "books",
    params(TitleParams),
    responses(
        (status = 200, description = "Books with exactly this title", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_title_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TitleParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state.book_service.find_by_title(&params.title).await?;
    Ok(Json(books.into()))
}

#[utoipa::path(
    get,
    path = "/books/search/findByTitleContains",
    tag = "books",
    params(KeywordParams),
    responses(
        (status = 200, description = "Books whose title contains the keyword", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_title_contains_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KeywordParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state
        .book_service
        .find_by_title_contains(&params.keyword)
        .await?;
    Ok(Json(books.into()))
}

#[utoipa::path(
    get,
    path = "/books/search/findByPublishedDateAfter",
    tag = "books",
    params(PublishedDateParams),
    responses(
        (status = 200, description = "Books published strictly after the date", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_published_date_after_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PublishedDateParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state
        .book_service
        .find_by_published_date_after(params.published_date)
        .await?;
    Ok(Json(books.into()))
}

#[utoipa::path(
    get,
    path = "/books/search/findByTitleContainsAndPublishedDateAfter",
    tag = "books",
    params(KeywordPublishedDateParams),
    responses(
        (status = 200, description = "Books matching both predicates", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_title_contains_and_published_date_after_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<KeywordPublishedDateParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state
        .book_service
        .find_by_title_contains_and_published_date_after(&params.keyword, params.published_date)
        .await?;
    Ok(Json(books.into()))
}

#[utoipa::path(
    get,
    path = "/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween",
    tag = "books",
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Books in the currency priced within [low, high]", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_title_contains_and_price_between_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PriceRangeParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state
        .book_service
        .find_by_title_contains_and_price_currency_and_price_amount_between(
            &params.keyword,
            params.currency,
            params.low,
            params.high,
        )
        .await?;
    Ok(Json(books.into()))
}

#[utoipa::path(
    get,
    path = "/books/search/findByAuthorsLastName",
    tag = "books",
    params(LastNameParams),
    responses(
        (status = 200, description = "Books with an author of this last name", body = BookListResponse),
        (status = 400, description = "Missing or malformed parameter", body = ErrorBody)
    )
)]
pub async fn find_by_authors_last_name_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LastNameParams>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state
        .book_service
        .find_by_authors_last_name(&params.last_name)
        .await?;
    Ok(Json(books.into()))
}
