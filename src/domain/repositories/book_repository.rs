//! Repository trait for book data access.

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for books.
///
/// The book side owns the book/author join: `create`, `update` and `delete`
/// write the join rows in the same transaction as the book itself, so the
/// inverse view read through [`crate::domain::repositories::AuthorRepository`]
/// is always consistent.
///
/// Inputs are expected to be validated already; implementations only enforce
/// referential integrity.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Stores a new book and links its authors in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if any author id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Finds a book by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Lists all books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Lists the books matching every criterion of `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError>;

    /// Replaces every field of a book, including its author list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book or any author id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, book: NewBook) -> Result<Book, AppError>;

    /// Deletes a book together with its author links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts stored books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
