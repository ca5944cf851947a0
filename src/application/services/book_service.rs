//! Book catalog service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

use super::validated;
use crate::domain::entities::{Book, BookPatch, Currency, NewBook};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::AppError;

/// Service for books and the book-side finder operations.
///
/// Every write is validated here, before the repository sees it:
/// - title and description are 1-255 characters
/// - the price amount is positive with at most 2 fraction digits
/// - at least one author is given
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field constraint is violated.
    /// Returns [`AppError::NotFound`] if an author id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        validated(&new_book, "book")?;
        let book = self.repository.create(new_book.normalized()).await?;
        tracing::info!(book_id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    /// Retrieves a book by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Replaces every field of a book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field constraint is violated.
    /// Returns [`AppError::NotFound`] if the book or an author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn replace_book(&self, id: i64, book: NewBook) -> Result<Book, AppError> {
        validated(&book, "book")?;
        let book = self.repository.update(id, book.normalized()).await?;
        tracing::info!(book_id = id, "book replaced");
        Ok(book)
    }

    /// Applies a partial update; the merged book is validated as a whole.
    ///
    /// # Errors
    ///
    /// Same as [`BookService::replace_book`].
    pub async fn patch_book(&self, id: i64, patch: BookPatch) -> Result<Book, AppError> {
        let current = self.get_book(id).await?;
        let merged = patch.apply_to(&current);
        validated(&merged, "book")?;
        let book = self.repository.update(id, merged.normalized()).await?;
        tracing::info!(book_id = id, "book patched");
        Ok(book)
    }

    /// Deletes a book and unlinks it from its authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }

    /// Books whose title equals `title` exactly.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(&BookFilter::new().with_title(title))
            .await
    }

    /// Books whose title contains `keyword` (case-sensitive).
    pub async fn find_by_title_contains(&self, keyword: &str) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(&BookFilter::new().with_title_containing(keyword))
            .await
    }

    /// Books published strictly after `date`.
    pub async fn find_by_published_date_after(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(&BookFilter::new().with_published_after(date))
            .await
    }

    pub async fn find_by_title_contains_and_published_date_after(
        &self,
        keyword: &str,
        date: NaiveDate,
    ) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(
                &BookFilter::new()
                    .with_title_containing(keyword)
                    .with_published_after(date),
            )
            .await
    }

    /// Books whose title contains `keyword`, priced in `currency` within
    /// `[low, high]` (both bounds inclusive).
    pub async fn find_by_title_contains_and_price_currency_and_price_amount_between(
        &self,
        keyword: &str,
        currency: Currency,
        low: Decimal,
        high: Decimal,
    ) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(
                &BookFilter::new()
                    .with_title_containing(keyword)
                    .with_currency(currency)
                    .with_amount_between(low, high),
            )
            .await
    }

    /// Books with at least one author whose last name equals `last_name`.
    pub async fn find_by_authors_last_name(&self, last_name: &str) -> Result<Vec<Book>, AppError> {
        self.repository
            .search(&BookFilter::new().with_author_last_name(last_name))
            .await
    }
}
