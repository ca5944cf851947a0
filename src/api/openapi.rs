//! OpenAPI 3 document for the catalog API.
//!
//! Paths come from the `#[utoipa::path]` annotations on the handlers, schemas
//! from the DTO derives.

use utoipa::OpenApi;

use crate::api::dto::author::{
    AuthorListResponse, AuthorPatchRequest, AuthorRequest, AuthorResponse, BookRefItem,
};
use crate::api::dto::book::{
    AuthorRefItem, BookListResponse, BookPatchRequest, BookRequest, BookResponse,
};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::search::{FinderLink, FinderLinksResponse};
use crate::api::handlers::{author_search, authors, book_search, books, health};
use crate::domain::entities::{Currency, Money};
use crate::error::{ErrorBody, ErrorInfo};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalog API",
        description = "CRUD and finder endpoints for books and their authors"
    ),
    paths(
        books::list_books_handler,
        books::create_book_handler,
        books::get_book_handler,
        books::replace_book_handler,
        books::patch_book_handler,
        books::delete_book_handler,
        book_search::book_finders_handler,
        book_search::find_by_title_handler,
        book_search::find_by_title_contains_handler,
        book_search::find_by_published_date_after_handler,
        book_search::find_by_title_contains_and_published_date_after_handler,
        book_search::find_by_title_contains_and_price_between_handler,
        book_search::find_by_authors_last_name_handler,
        authors::list_authors_handler,
        authors::create_author_handler,
        authors::get_author_handler,
        authors::replace_author_handler,
        authors::patch_author_handler,
        authors::delete_author_handler,
        author_search::author_finders_handler,
        author_search::find_by_last_name_handler,
        author_search::find_by_books_title_handler,
        health::health_handler,
    ),
    components(schemas(
        Money,
        Currency,
        BookRequest,
        BookPatchRequest,
        BookResponse,
        BookListResponse,
        AuthorRefItem,
        AuthorRequest,
        AuthorPatchRequest,
        AuthorResponse,
        AuthorListResponse,
        BookRefItem,
        FinderLink,
        FinderLinksResponse,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        ErrorBody,
        ErrorInfo,
    )),
    tags(
        (name = "books", description = "Books, their price and ordered authors"),
        (name = "authors", description = "Authors and the books they wrote"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_finder() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for (name, _) in book_search::BOOK_FINDERS {
            let path = format!("/books/search/{name}");
            assert!(paths.iter().any(|p| **p == path), "missing {path}");
        }
        for (name, _) in author_search::AUTHOR_FINDERS {
            let path = format!("/authors/search/{name}");
            assert!(paths.iter().any(|p| **p == path), "missing {path}");
        }
    }

    #[test]
    fn test_document_has_item_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/books/{id}"));
        assert!(doc.paths.paths.contains_key("/authors/{id}"));
    }
}
