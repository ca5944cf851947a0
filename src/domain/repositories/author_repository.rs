//! Repository trait for author data access.

use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::AuthorFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authors.
///
/// Authors are the inverse side of the book/author relation: the `books` of
/// a returned [`Author`] are read from the join written by
/// [`crate::domain::repositories::BookRepository`], never stored here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Stores a new author with no books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Lists all authors in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Author>, AppError>;

    /// Lists the authors matching every criterion of `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AppError>;

    /// Replaces the name fields of an author. Book links are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, author: NewAuthor) -> Result<Author, AppError>;

    /// Deletes an author and unlinks it from its books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Conflict`] if the author is the only author of a book.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts stored authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
