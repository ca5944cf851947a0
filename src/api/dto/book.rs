//! DTOs for the book resource.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{AuthorRef, Book, BookPatch, Money, NewBook};

/// Body of `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[schema(example = "Spring Microservices")]
    pub title: String,
    pub description: String,
    #[schema(example = "2016-06-28")]
    pub published_date: NaiveDate,
    pub price: Money,
    /// Author ids in display order.
    #[schema(example = json!([1]))]
    pub authors: Vec<i64>,
}

impl From<BookRequest> for NewBook {
    fn from(req: BookRequest) -> Self {
        NewBook::new(
            req.title,
            req.description,
            req.published_date,
            req.price,
            req.authors,
        )
    }
}

/// Body of `PATCH /books/{id}`. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPatchRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<NaiveDate>,
    /// Replaces the whole price; an omitted currency means USD.
    pub price: Option<Money>,
    pub authors: Option<Vec<i64>>,
}

impl From<BookPatchRequest> for BookPatch {
    fn from(req: BookPatchRequest) -> Self {
        BookPatch {
            title: req.title,
            description: req.description,
            published_date: req.published_date,
            price: req.price,
            authors: req.authors,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRefItem {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorRef> for AuthorRefItem {
    fn from(author: AuthorRef) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub published_date: NaiveDate,
    pub price: Money,
    pub authors: Vec<AuthorRefItem>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            published_date: book.published_date,
            price: book.price,
            authors: book.authors.into_iter().map(AuthorRefItem::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListResponse {
    pub items: Vec<BookResponse>,
}

impl From<Vec<Book>> for BookListResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            items: books.into_iter().map(BookResponse::from).collect(),
        }
    }
}
