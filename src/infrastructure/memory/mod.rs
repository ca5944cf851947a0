//! In-process catalog store.
//!
//! [`MemoryStore`] implements both repository traits over one shared state,
//! so the book/author join behaves exactly like the PostgreSQL join table:
//! it is owned by the book records and the author side is derived from it on
//! every read. Each operation holds the lock for its whole duration, which
//! makes it atomic.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Author, AuthorRef, Book, BookRef, Money, NewAuthor, NewBook};
use crate::domain::repositories::{AuthorFilter, AuthorRepository, BookFilter, BookRepository};
use crate::error::AppError;

#[derive(Debug, Clone)]
struct BookRecord {
    title: String,
    description: String,
    published_date: NaiveDate,
    price: Money,
    /// Owning side of the join, in author position order.
    author_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
struct AuthorRecord {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Default)]
struct State {
    last_book_id: i64,
    last_author_id: i64,
    books: BTreeMap<i64, BookRecord>,
    authors: BTreeMap<i64, AuthorRecord>,
}

impl State {
    fn book(&self, id: i64, record: &BookRecord) -> Book {
        let authors = record
            .author_ids
            .iter()
            .filter_map(|author_id| {
                self.authors.get(author_id).map(|a| AuthorRef {
                    id: *author_id,
                    first_name: a.first_name.clone(),
                    last_name: a.last_name.clone(),
                })
            })
            .collect();

        Book::new(
            id,
            record.title.clone(),
            record.description.clone(),
            record.published_date,
            record.price.clone(),
            authors,
        )
    }

    fn author(&self, id: i64, record: &AuthorRecord) -> Author {
        let books = self
            .books
            .iter()
            .filter(|(_, b)| b.author_ids.contains(&id))
            .map(|(book_id, b)| BookRef {
                id: *book_id,
                title: b.title.clone(),
            })
            .collect();

        Author::new(
            id,
            record.first_name.clone(),
            record.last_name.clone(),
            books,
        )
    }

    fn ensure_authors_exist(&self, ids: &[i64]) -> Result<(), AppError> {
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !self.authors.contains_key(id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Author not found",
                json!({ "missingAuthorIds": missing }),
            ))
        }
    }

    fn record_from(new_book: &NewBook) -> BookRecord {
        BookRecord {
            title: new_book.title.clone(),
            description: new_book.description.clone(),
            published_date: new_book.published_date,
            price: new_book.price.clone(),
            author_ids: new_book.distinct_author_ids(),
        }
    }
}

/// Catalog store kept in process memory.
///
/// Cloning is cheap and every clone shares the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryStore {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let mut state = self.state.write().await;
        let record = State::record_from(&new_book);
        state.ensure_authors_exist(&record.author_ids)?;

        state.last_book_id += 1;
        let id = state.last_book_id;
        let book = state.book(id, &record);
        state.books.insert(id, record);

        Ok(book)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let state = self.state.read().await;
        Ok(state.books.get(&id).map(|record| state.book(id, record)))
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .books
            .iter()
            .map(|(id, record)| state.book(*id, record))
            .collect())
    }

    async fn search(&self, filter: &BookFilter) -> Result<Vec<Book>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .books
            .iter()
            .map(|(id, record)| state.book(*id, record))
            .filter(|book| filter.matches(book))
            .collect())
    }

    async fn update(&self, id: i64, book: NewBook) -> Result<Book, AppError> {
        let mut state = self.state.write().await;
        if !state.books.contains_key(&id) {
            return Err(AppError::not_found("Book not found", json!({ "id": id })));
        }

        let record = State::record_from(&book);
        state.ensure_authors_exist(&record.author_ids)?;

        let updated = state.book(id, &record);
        state.books.insert(id, record);

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        state
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Book not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.state.read().await.books.len() as i64)
    }
}

#[async_trait]
impl AuthorRepository for MemoryStore {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut state = self.state.write().await;
        state.last_author_id += 1;
        let id = state.last_author_id;

        let record = AuthorRecord {
            first_name: new_author.first_name,
            last_name: new_author.last_name,
        };
        let author = state.author(id, &record);
        state.authors.insert(id, record);

        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        let state = self.state.read().await;
        Ok(state.authors.get(&id).map(|record| state.author(id, record)))
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .authors
            .iter()
            .map(|(id, record)| state.author(*id, record))
            .collect())
    }

    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<Author>, AppError> {
        let state = self.state.read().await;
        Ok(state
            .authors
            .iter()
            .map(|(id, record)| state.author(*id, record))
            .filter(|author| filter.matches(author))
            .collect())
    }

    async fn update(&self, id: i64, author: NewAuthor) -> Result<Author, AppError> {
        let mut state = self.state.write().await;
        let Some(record) = state.authors.get_mut(&id) else {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        };

        record.first_name = author.first_name;
        record.last_name = author.last_name;

        let record = record.clone();
        Ok(state.author(id, &record))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if !state.authors.contains_key(&id) {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        let orphaned: Vec<i64> = state
            .books
            .iter()
            .filter(|(_, b)| b.author_ids == [id])
            .map(|(book_id, _)| *book_id)
            .collect();
        if !orphaned.is_empty() {
            return Err(AppError::conflict(
                "Author is the only author of some books",
                json!({ "id": id, "bookIds": orphaned }),
            ));
        }

        for book in state.books.values_mut() {
            book.author_ids.retain(|author_id| *author_id != id);
        }
        state.authors.remove(&id);

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.state.read().await.authors.len() as i64)
    }
}
