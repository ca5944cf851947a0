//! API route configuration.

use crate::api::handlers::{
    author_finders_handler, book_finders_handler, create_author_handler, create_book_handler,
    delete_author_handler, delete_book_handler, find_by_authors_last_name_handler,
    find_by_books_title_handler, find_by_last_name_handler, find_by_published_date_after_handler,
    find_by_title_contains_and_price_between_handler,
    find_by_title_contains_and_published_date_after_handler, find_by_title_contains_handler,
    find_by_title_handler, get_author_handler, get_book_handler, list_authors_handler,
    list_books_handler, patch_author_handler, patch_book_handler, replace_author_handler,
    replace_book_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Book routes.
///
/// # Endpoints
///
/// - `GET    /books`               - List books
/// - `POST   /books`               - Create a book
/// - `GET    /books/{id}`          - Fetch a book
/// - `PUT    /books/{id}`          - Replace a book
/// - `PATCH  /books/{id}`          - Partially update a book
/// - `DELETE /books/{id}`          - Delete a book
/// - `GET    /books/search`        - Finder index
/// - `GET    /books/search/{name}` - Derived finders
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(replace_book_handler)
                .patch(patch_book_handler)
                .delete(delete_book_handler),
        )
        .route("/books/search", get(book_finders_handler))
        .route("/books/search/findByTitle", get(find_by_title_handler))
        .route(
            "/books/search/findByTitleContains",
            get(find_by_title_contains_handler),
        )
        .route(
            "/books/search/findByPublishedDateAfter",
            get(find_by_published_date_after_handler),
        )
        .route(
            "/books/search/findByTitleContainsAndPublishedDateAfter",
            get(find_by_title_contains_and_published_date_after_handler),
        )
        .route(
            "/books/search/findByTitleContainsAndPriceCurrencyAndPriceAmountBetween",
            get(find_by_title_contains_and_price_between_handler),
        )
        .route(
            "/books/search/findByAuthorsLastName",
            get(find_by_authors_last_name_handler),
        )
}

/// Author routes, mirroring [`book_routes`].
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/authors",
            get(list_authors_handler).post(create_author_handler),
        )
        .route(
            "/authors/{id}",
            get(get_author_handler)
                .put(replace_author_handler)
                .patch(patch_author_handler)
                .delete(delete_author_handler),
        )
        .route("/authors/search", get(author_finders_handler))
        .route(
            "/authors/search/findByLastName",
            get(find_by_last_name_handler),
        )
        .route(
            "/authors/search/findByBooksTitle",
            get(find_by_books_title_handler),
        )
}
