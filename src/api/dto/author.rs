//! DTOs for the author resource.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{Author, AuthorPatch, BookRef, NewAuthor};

/// Body of `POST /authors` and `PUT /authors/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[schema(example = "Felipe")]
    pub first_name: String,
    #[schema(example = "Gutierrez")]
    pub last_name: String,
}

impl From<AuthorRequest> for NewAuthor {
    fn from(req: AuthorRequest) -> Self {
        NewAuthor::new(req.first_name, req.last_name)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatchRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<AuthorPatchRequest> for AuthorPatch {
    fn from(req: AuthorPatchRequest) -> Self {
        AuthorPatch {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookRefItem {
    pub id: i64,
    pub title: String,
}

impl From<BookRef> for BookRefItem {
    fn from(book: BookRef) -> Self {
        Self {
            id: book.id,
            title: book.title,
        }
    }
}

/// JSON representation of a stored author and the books they wrote.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<BookRefItem>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            books: author.books.into_iter().map(BookRefItem::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorListResponse {
    pub items: Vec<AuthorResponse>,
}

impl From<Vec<Author>> for AuthorListResponse {
    fn from(authors: Vec<Author>) -> Self {
        Self {
            items: authors.into_iter().map(AuthorResponse::from).collect(),
        }
    }
}
