//! Handlers for the book collection and item endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::book::{BookListResponse, BookPatchRequest, BookRequest, BookResponse};
use crate::api::extractors::{ApiJson, ApiPath};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Lists every book in insertion order.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "All books", body = BookListResponse))
)]
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<BookListResponse>, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books.into()))
}

/// Creates a book linked to existing authors.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Pro Spring Boot",
///   "description": "A no-nonsense guide",
///   "publishedDate": "2016-05-21",
///   "price": { "amount": "42.74", "currency": "USD" },
///   "authors": [2]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a field constraint is violated or `authors` is empty.
/// Returns 404 Not Found if an author id is unknown.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse,
            headers(("Location" = String, description = "URI of the new book"))),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Unknown author id", body = ErrorBody)
    )
)]
pub async fn create_book_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookRequest>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.book_service.create_book(payload.into()).await?;
    let location = format!("/books/{}", book.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookResponse::from(book)),
    ))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorBody)
    )
)]
pub async fn get_book_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.get_book(id).await?;
    Ok(Json(book.into()))
}

/// Replaces every field of a book, including its author list.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book replaced", body = BookResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Book or author not found", body = ErrorBody)
    )
)]
pub async fn replace_book_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<BookRequest>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.replace_book(id, payload.into()).await?;
    Ok(Json(book.into()))
}

/// Partially updates a book.
///
/// All fields are optional. `price` and `authors` are replaced as a whole
/// when given, so a `price` without `currency` resets the currency to USD.
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookPatchRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Book or author not found", body = ErrorBody)
    )
)]
pub async fn patch_book_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<BookPatchRequest>,
) -> Result<Json<BookResponse>, AppError> {
    let book = state.book_service.patch_book(id, payload.into()).await?;
    Ok(Json(book.into()))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorBody)
    )
)]
pub async fn delete_book_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.book_service.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
