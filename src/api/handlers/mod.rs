//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod author_search;
pub mod authors;
pub mod book_search;
pub mod books;
pub mod health;
pub mod openapi;

pub use author_search::{
    author_finders_handler, find_by_books_title_handler, find_by_last_name_handler,
};
pub use authors::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    patch_author_handler, replace_author_handler,
};
pub use book_search::{
    book_finders_handler, find_by_authors_last_name_handler,
    find_by_published_date_after_handler, find_by_title_contains_and_price_between_handler,
    find_by_title_contains_and_published_date_after_handler, find_by_title_contains_handler,
    find_by_title_handler,
};
pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    patch_book_handler, replace_book_handler,
};
pub use health::health_handler;
pub use openapi::openapi_handler;
